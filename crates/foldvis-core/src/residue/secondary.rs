//! Secondary-structure labels and the indicator flags they are read from.
use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

/// Local structural motif of a residue.
///
/// The discriminant is the numeric id written to the `secondary` column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, Serialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum SecondaryStructure {
    None = 0,
    Bend = 1,
    #[strum(to_string = "HELIX", serialize = "HELX")]
    Helix = 2,
    #[strum(to_string = "STRAND", serialize = "STRN")]
    Strand = 3,
    Turn = 4,
}

impl SecondaryStructure {
    /// Resolution order used when more than one flag is set.
    pub const PRECEDENCE: [SecondaryStructure; 4] = [
        SecondaryStructure::Helix,
        SecondaryStructure::Strand,
        SecondaryStructure::Turn,
        SecondaryStructure::Bend,
    ];

    pub fn id(&self) -> u8 {
        *self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(SecondaryStructure::None),
            1 => Some(SecondaryStructure::Bend),
            2 => Some(SecondaryStructure::Helix),
            3 => Some(SecondaryStructure::Strand),
            4 => Some(SecondaryStructure::Turn),
            _ => None,
        }
    }
}

/// How to label a residue that carries more than one secondary-structure flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IndicatorPolicy {
    /// Reject the residue and abort the run.
    #[default]
    Strict,
    /// Keep the first set flag in [`SecondaryStructure::PRECEDENCE`].
    Precedence,
}

/// The four BEND / HELIX / STRAND / TURN flags of one residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SecondaryIndicators {
    pub bend: bool,
    pub helix: bool,
    pub strand: bool,
    pub turn: bool,
}

impl SecondaryIndicators {
    pub fn only(label: SecondaryStructure) -> Self {
        let mut flags = SecondaryIndicators::default();
        match label {
            SecondaryStructure::None => {}
            SecondaryStructure::Bend => flags.bend = true,
            SecondaryStructure::Helix => flags.helix = true,
            SecondaryStructure::Strand => flags.strand = true,
            SecondaryStructure::Turn => flags.turn = true,
        }
        flags
    }

    pub fn is_set(&self, label: SecondaryStructure) -> bool {
        match label {
            SecondaryStructure::None => !(self.bend || self.helix || self.strand || self.turn),
            SecondaryStructure::Bend => self.bend,
            SecondaryStructure::Helix => self.helix,
            SecondaryStructure::Strand => self.strand,
            SecondaryStructure::Turn => self.turn,
        }
    }

    /// Labels whose flag is set, in precedence order.
    pub fn set_labels(&self) -> Vec<SecondaryStructure> {
        SecondaryStructure::PRECEDENCE
            .into_iter()
            .filter(|label| self.is_set(*label))
            .collect()
    }

    /// Resolve the flags to one label.
    ///
    /// Under [`IndicatorPolicy::Strict`] a conflicting set of flags is returned as the error.
    pub fn label(
        &self,
        policy: IndicatorPolicy,
    ) -> std::result::Result<SecondaryStructure, Vec<SecondaryStructure>> {
        let set = self.set_labels();
        match (set.as_slice(), policy) {
            ([], _) => Ok(SecondaryStructure::None),
            ([single], _) => Ok(*single),
            (_, IndicatorPolicy::Strict) => Err(set),
            ([first, ..], IndicatorPolicy::Precedence) => Ok(*first),
        }
    }
}
