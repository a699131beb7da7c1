//! Colors
//!
//! This module defines the colour mapping handed to visualisation tooling. Defaults are the
//! ColorBrewer Set1 colours; a different [`Palette`] can be built and passed explicitly.
use crate::residue::{BackboneAtom, SecondaryStructure};
use bon::Builder;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Components scaled to `0.0..=1.0`.
    pub fn to_unit(&self) -> [f64; 3] {
        [self.0, self.1, self.2].map(|c| c as f64 / 255.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Builder, Debug, Clone, PartialEq)]
pub struct Palette {
    #[builder(default = Rgb(0, 0, 0))]
    none: Rgb,
    #[builder(default = Rgb(228, 26, 28))]
    bend: Rgb,
    #[builder(default = Rgb(55, 126, 184))]
    helix: Rgb,
    #[builder(default = Rgb(77, 175, 74))]
    strand: Rgb,
    #[builder(default = Rgb(152, 78, 163))]
    turn: Rgb,
    /// Indexed by [`BackboneAtom::to_index`].
    #[builder(default = [Rgb(228, 26, 28), Rgb(55, 126, 184), Rgb(77, 175, 74), Rgb(152, 78, 163)])]
    atoms: [Rgb; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Palette::builder().build()
    }
}

impl Palette {
    pub fn secondary(&self, label: SecondaryStructure) -> Rgb {
        match label {
            SecondaryStructure::None => self.none,
            SecondaryStructure::Bend => self.bend,
            SecondaryStructure::Helix => self.helix,
            SecondaryStructure::Strand => self.strand,
            SecondaryStructure::Turn => self.turn,
        }
    }

    pub fn atom(&self, atom: BackboneAtom) -> Rgb {
        self.atoms[atom.to_index()]
    }
}
