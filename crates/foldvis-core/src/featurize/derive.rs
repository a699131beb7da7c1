//! Residue -> feature derivation.
//!
//! Every input record yields exactly one [`DerivedResidue`], in input order. The run fails as a
//! whole on the first record that cannot be labelled under the configured policy.
use crate::error::Result;
use crate::residue::{Coord, IndicatorPolicy, ResidueRecord, SecondaryStructure};
use bon::Builder;

/// Features computed for one residue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedResidue {
    pub mean_coord: Coord,
    pub secondary: SecondaryStructure,
}

/// Derives mean backbone coordinates and secondary-structure labels.
///
/// ```
/// use foldvis_core::{FeatureDeriver, IndicatorPolicy};
/// let deriver = FeatureDeriver::builder()
///     .policy(IndicatorPolicy::Precedence)
///     .build();
/// assert!(deriver.derive(&[]).unwrap().is_empty());
/// ```
#[derive(Builder, Debug, Clone, Copy, Default)]
pub struct FeatureDeriver {
    #[builder(default)]
    policy: IndicatorPolicy,
}

impl FeatureDeriver {
    pub fn policy(&self) -> IndicatorPolicy {
        self.policy
    }

    pub fn derive_one(&self, record: &ResidueRecord) -> Result<DerivedResidue> {
        let secondary = record.secondary_label(self.policy)?;
        if self.policy == IndicatorPolicy::Precedence {
            let flags = record.indicators.set_labels();
            if flags.len() > 1 {
                log::warn!(
                    "{}:{} has flags {:?}; labelled {}",
                    record.protein_id,
                    record.position,
                    flags,
                    secondary
                );
            }
        }
        Ok(DerivedResidue {
            mean_coord: record.mean_coord(),
            secondary,
        })
    }

    pub fn derive(&self, records: &[ResidueRecord]) -> Result<Vec<DerivedResidue>> {
        let derived = records
            .iter()
            .map(|record| self.derive_one(record))
            .collect::<Result<Vec<_>>>()?;
        log::debug!("derived features for {} residues", derived.len());
        Ok(derived)
    }
}

pub fn derive_features(
    records: &[ResidueRecord],
    policy: IndicatorPolicy,
) -> Result<Vec<DerivedResidue>> {
    FeatureDeriver::builder().policy(policy).build().derive(records)
}
