use serde::Serialize;

/// One post-translational modification annotation.
///
/// Serializes with the column names of the modification table, so a JSON export can be read
/// by the same tooling that reads the CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModificationRecord {
    #[serde(rename = "UniAcc")]
    pub protein_id: String,
    #[serde(rename = "POS")]
    pub position: i64,
    #[serde(rename = "RES")]
    pub residue_type: String,
    #[serde(rename = "MOD")]
    pub modification: String,
    #[serde(rename = "PathogenicMutation")]
    pub pathogenic_mutation: bool,
}
