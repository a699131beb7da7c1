//! Provides the typed per-residue record read from a structure table.
//!
//! A [`ResidueRecord`] carries the accession and position of the residue, its residue type,
//! the coordinates of its four backbone atoms and its secondary-structure flags. Records are
//! immutable once loaded; derived values are computed on demand.
//!
use super::secondary::{IndicatorPolicy, SecondaryIndicators, SecondaryStructure};
use crate::error::{FoldVisError, Result};
use crate::info::constants::AminoAcid;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

pub type Coord = [f64; 3];

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum BackboneAtom {
    C = 0,    CA = 1,   CB = 2,   N = 3,
}

impl BackboneAtom {
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// Suffix used in the `{x,y,z}_coord_<suffix>` column names.
    pub fn column_suffix(&self) -> &'static str {
        match self {
            BackboneAtom::C => "c",
            BackboneAtom::CA => "ca",
            BackboneAtom::CB => "cb",
            BackboneAtom::N => "n",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResidueRecord {
    pub protein_id: String,
    pub position: i64,
    pub residue_type: String,
    /// Indexed by [`BackboneAtom::to_index`].
    pub coords: [Coord; 4],
    pub indicators: SecondaryIndicators,
}

impl ResidueRecord {
    pub fn coord(&self, atom: BackboneAtom) -> &Coord {
        &self.coords[atom.to_index()]
    }

    pub fn amino_acid(&self) -> AminoAcid {
        AminoAcid::parse_lenient(&self.residue_type)
    }

    /// Unweighted componentwise mean of the four backbone atoms.
    ///
    /// A NaN in any input propagates to the matching component.
    pub fn mean_coord(&self) -> Coord {
        let mut sum = [0f64; 3];
        for atom in BackboneAtom::iter() {
            let xyz = self.coord(atom);
            for (acc, v) in sum.iter_mut().zip(xyz.iter()) {
                *acc += v;
            }
        }
        sum.map(|v| v / 4.0)
    }

    pub fn secondary_label(&self, policy: IndicatorPolicy) -> Result<SecondaryStructure> {
        self.indicators
            .label(policy)
            .map_err(|set| FoldVisError::InvalidIndicatorState {
                protein_id: self.protein_id.clone(),
                position: self.position,
                indicators: set.iter().map(|label| label.to_string()).collect(),
            })
    }

    pub fn distance_ca(&self, other: &ResidueRecord) -> f64 {
        distance(self.coord(BackboneAtom::CA), other.coord(BackboneAtom::CA))
    }
}

pub(crate) fn distance(a: &Coord, b: &Coord) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}


#[cfg(test)]
mod tests {
    use super::test_utilities::residue;
    use super::*;

    #[test]
    fn test_mean_coord() {
        let record = residue("P01137", 1, SecondaryStructure::Helix);
        let mean = record.mean_coord();
        for v in mean {
            assert!((v - 2.5).abs() < 1e-9);
        }
        assert_eq!(
            record.secondary_label(IndicatorPolicy::Strict),
            Ok(SecondaryStructure::Helix)
        );
    }

    #[test]
    fn test_mean_coord_uneven() {
        let mut record = residue("P01137", 1, SecondaryStructure::None);
        record.coords = [
            [0.5, -1.0, 10.0],
            [1.5, -2.0, 20.0],
            [2.5, -3.0, 30.0],
            [3.5, -4.0, 41.0],
        ];
        let mean = record.mean_coord();
        assert!((mean[0] - 2.0).abs() < 1e-9);
        assert!((mean[1] + 2.5).abs() < 1e-9);
        assert!((mean[2] - 25.25).abs() < 1e-9);
    }

    #[test]
    fn test_nan_propagates() {
        let mut record = residue("P01137", 1, SecondaryStructure::None);
        record.coords[BackboneAtom::N.to_index()][1] = f64::NAN;
        let mean = record.mean_coord();
        assert!((mean[0] - 2.5).abs() < 1e-9);
        assert!(mean[1].is_nan());
        assert!((mean[2] - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_conflict_reports_residue() {
        let mut record = residue("P09651", 42, SecondaryStructure::Helix);
        record.indicators.turn = true;
        let err = record.secondary_label(IndicatorPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            FoldVisError::InvalidIndicatorState {
                protein_id: "P09651".to_string(),
                position: 42,
                indicators: vec!["HELIX".to_string(), "TURN".to_string()],
            }
        );
    }

    #[test]
    fn test_atoms() {
        let record = residue("P01137", 1, SecondaryStructure::None);
        assert_eq!(record.coord(BackboneAtom::CB), &[3.0; 3]);
        assert_eq!(BackboneAtom::CA.column_suffix(), "ca");
        assert_eq!(BackboneAtom::CB.to_string(), "CB");
        assert_eq!(record.amino_acid(), AminoAcid::Ala);
        let other = super::test_utilities::residue_at("P01137", 2, [5.0, 6.0, 2.0]);
        assert!((record.distance_ca(&other) - 5.0).abs() < 1e-9);
    }
}
