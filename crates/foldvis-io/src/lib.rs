//! # foldvis-io
//!
//! Reading and writing the tabular files foldvis works on.
//!
//! * [`ResidueTable`] / [`ModificationTable`] load a delimited file with polars, validate it
//!   against a [`ResidueSchema`] / [`ModificationSchema`] once, and convert it to typed records.
//! * [`write_csv`], [`write_json_records`] and [`write_json`] emit the artifacts consumed by
//!   visualisation tooling.
mod columns;
mod error;
mod export;
mod modifications;
mod schema;
mod table;

pub use self::error::{IoError, Result};
pub use self::export::{
    modifications_frame, neighbors_frame, write_csv, write_json, write_json_records,
};
pub use self::modifications::ModificationTable;
pub use self::schema::{ModificationSchema, ResidueSchema};
pub use self::table::ResidueTable;
