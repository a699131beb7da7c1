//! # foldvis-core
//!
//! A library for deriving residue-level features from tabular protein structure data.
//!
//! __foldvis-core__ provides functionality for:
//! * Typed per-residue records with backbone coordinates and secondary-structure flags
//! * Deriving mean backbone coordinates and secondary-structure labels
//! * Selecting residues by accession, residue type, label, position or location
//! * Building Cα neighbourhood tables and dataset summaries
//!
//! The main entry point is the [`ResidueCollection`] struct which holds the records of one
//! analysis run, and [`derive_features`] which maps every record to its [`DerivedResidue`].
//!
mod collection;
mod colors;
mod error;
mod featurize;
mod info;
mod modification;
mod neighbors;
mod residue;
mod selection;
mod summary;

pub use self::collection::ResidueCollection;
pub use self::colors::{Palette, Rgb};
pub use self::error::{FoldVisError, Result};
pub use self::featurize::{derive_features, DerivedResidue, FeatureDeriver};
pub use self::info::constants::{aa3to1, is_amino_acid, AminoAcid};
pub use self::modification::ModificationRecord;
pub use self::neighbors::{neighbor_table, NeighborExtent, NeighborPair};
pub use self::residue::{
    BackboneAtom, Coord, IndicatorPolicy, ResidueRecord, SecondaryIndicators, SecondaryStructure,
};
pub use self::selection::{ResidueSelector, ResidueView, Selection};
pub use self::summary::{
    modification_counts, residue_type_histogram, residues_per_accession, secondary_composition,
    ModificationCount,
};
