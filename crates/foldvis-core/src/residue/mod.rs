mod record;
mod secondary;

pub(crate) use record::distance;
pub use record::{BackboneAtom, Coord, ResidueRecord};
pub use secondary::{IndicatorPolicy, SecondaryIndicators, SecondaryStructure};

#[cfg(test)]
pub(crate) use record::test_utilities;
