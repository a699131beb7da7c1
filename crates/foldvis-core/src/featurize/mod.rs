mod derive;

pub use derive::{derive_features, DerivedResidue, FeatureDeriver};
