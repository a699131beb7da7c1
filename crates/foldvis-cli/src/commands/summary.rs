use super::load_residues;
use crate::cli::SummaryArgs;
use foldvis_core::{
    derive_features, residue_type_histogram, residues_per_accession, secondary_composition,
    SecondaryStructure,
};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct Summary {
    residues: usize,
    per_accession: BTreeMap<String, usize>,
    residue_types: BTreeMap<String, usize>,
    secondary: BTreeMap<SecondaryStructure, usize>,
}

pub fn execute(args: SummaryArgs) -> anyhow::Result<()> {
    let table = load_residues(&args.input)?;
    let derived = derive_features(table.records(), args.policy)?;
    let summary = Summary {
        residues: table.len(),
        per_accession: residues_per_accession(table.records()),
        residue_types: residue_type_histogram(table.records()),
        secondary: secondary_composition(&derived),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
