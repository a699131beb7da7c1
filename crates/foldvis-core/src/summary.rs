//! Dataset summaries.
//!
//! Counts are returned in ordered maps so reports are stable between runs.
use crate::featurize::DerivedResidue;
use crate::modification::ModificationRecord;
use crate::residue::{ResidueRecord, SecondaryStructure};
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModificationCount {
    #[serde(rename = "MOD")]
    pub modification: String,
    #[serde(rename = "UniAcc")]
    pub protein_id: String,
    #[serde(rename = "PathogenicMutation")]
    pub pathogenic_mutation: bool,
    pub count: usize,
}

/// Number of residues per accession.
pub fn residues_per_accession(records: &[ResidueRecord]) -> BTreeMap<String, usize> {
    records
        .iter()
        .map(|r| r.protein_id.clone())
        .counts()
        .into_iter()
        .collect()
}

/// Number of residues per residue type, keyed by the type as written in the table.
pub fn residue_type_histogram<'a, I>(records: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a ResidueRecord>,
{
    records
        .into_iter()
        .map(|r| r.residue_type.clone())
        .counts()
        .into_iter()
        .collect()
}

/// Residues per secondary-structure label. Every label is present, possibly with a zero count.
pub fn secondary_composition(derived: &[DerivedResidue]) -> BTreeMap<SecondaryStructure, usize> {
    let mut composition: BTreeMap<SecondaryStructure, usize> =
        SecondaryStructure::iter().map(|label| (label, 0)).collect();
    for feature in derived {
        *composition.entry(feature.secondary).or_default() += 1;
    }
    composition
}

/// Annotations grouped by modification, accession and pathogenic-mutation flag.
pub fn modification_counts(modifications: &[ModificationRecord]) -> Vec<ModificationCount> {
    modifications
        .iter()
        .map(|m| {
            (
                m.modification.clone(),
                m.protein_id.clone(),
                m.pathogenic_mutation,
            )
        })
        .counts()
        .into_iter()
        .sorted()
        .map(
            |((modification, protein_id, pathogenic_mutation), count)| ModificationCount {
                modification,
                protein_id,
                pathogenic_mutation,
                count,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::residue::test_utilities::residue;
    use crate::residue::IndicatorPolicy;
    use crate::derive_features;

    fn modification(protein_id: &str, kind: &str, pathogenic: bool) -> ModificationRecord {
        ModificationRecord {
            protein_id: protein_id.to_string(),
            position: 1,
            residue_type: "S".to_string(),
            modification: kind.to_string(),
            pathogenic_mutation: pathogenic,
        }
    }

    #[test]
    fn test_residue_counts() {
        let mut records = vec![
            residue("P09651", 1, SecondaryStructure::Helix),
            residue("P01137", 1, SecondaryStructure::Helix),
            residue("P09651", 2, SecondaryStructure::Turn),
        ];
        records[2].residue_type = "GLY".to_string();

        let per_acc = residues_per_accession(&records);
        assert_eq!(per_acc.get("P09651"), Some(&2));
        assert_eq!(per_acc.values().sum::<usize>(), records.len());
        assert_eq!(per_acc.keys().next().map(String::as_str), Some("P01137"));

        let histogram = residue_type_histogram(&records);
        assert_eq!(histogram.get("ALA"), Some(&2));
        assert_eq!(histogram.get("GLY"), Some(&1));

        let derived = derive_features(&records, IndicatorPolicy::Strict).unwrap();
        let composition = secondary_composition(&derived);
        assert_eq!(composition[&SecondaryStructure::Helix], 2);
        assert_eq!(composition[&SecondaryStructure::Turn], 1);
        assert_eq!(composition[&SecondaryStructure::None], 0);
        assert_eq!(composition.len(), 5);
    }

    #[test]
    fn test_modification_counts() {
        let mods = vec![
            modification("P09651", "Phosphorylation", false),
            modification("P01137", "Phosphorylation", false),
            modification("P09651", "Phosphorylation", false),
            modification("P09651", "Acetylation", true),
        ];
        let counts = modification_counts(&mods);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[0].modification, "Acetylation");
        assert_eq!(counts[2].protein_id, "P09651");
        assert_eq!(counts[2].count, 2);
    }
}
