use crate::columns::{flag_values, i64_values, string_values};
use crate::error::Result;
use crate::schema::ModificationSchema;
use foldvis_core::ModificationRecord;
use polars::prelude::*;
use std::path::Path;

/// A loaded modification table.
pub struct ModificationTable {
    records: Vec<ModificationRecord>,
}

impl ModificationTable {
    pub fn from_csv<P: AsRef<Path>>(path: P, schema: &ModificationSchema) -> Result<Self> {
        let separator = schema.separator;
        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(10_000))
            .map_parse_options(|opts| opts.with_separator(separator))
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
            .finish()?;
        Self::from_frame(&frame, schema)
    }

    pub fn from_frame(frame: &DataFrame, schema: &ModificationSchema) -> Result<Self> {
        schema.validate(frame)?;
        let protein_ids = string_values(frame, &schema.protein_id)?;
        let positions = i64_values(frame, &schema.position)?;
        let residue_types = string_values(frame, &schema.residue_type)?;
        let modifications = string_values(frame, &schema.modification)?;
        let pathogenic = flag_values(frame, &schema.pathogenic_mutation)?;

        let records = protein_ids
            .into_iter()
            .zip(positions)
            .zip(residue_types)
            .zip(modifications)
            .zip(pathogenic)
            .map(
                |((((protein_id, position), residue_type), modification), pathogenic_mutation)| {
                    ModificationRecord {
                        protein_id,
                        position,
                        residue_type,
                        modification,
                        pathogenic_mutation,
                    }
                },
            )
            .collect::<Vec<_>>();
        log::debug!("loaded {} modifications", records.len());
        Ok(ModificationTable { records })
    }

    pub fn records(&self) -> &[ModificationRecord] {
        &self.records
    }

    pub fn for_accession(&self, protein_id: &str) -> Vec<ModificationRecord> {
        self.records
            .iter()
            .filter(|m| m.protein_id == protein_id)
            .cloned()
            .collect()
    }
}
