//! Column layout of the input tables.
//!
//! The defaults match the structure and modification datasets. A schema is plain
//! configuration: build one, adjust fields, and pass it to the loaders.
use foldvis_core::{BackboneAtom, FoldVisError, SecondaryStructure};
use polars::prelude::DataFrame;
use strum::IntoEnumIterator;

const AXES: [&str; 3] = ["x", "y", "z"];

#[derive(Debug, Clone, PartialEq)]
pub struct ResidueSchema {
    pub protein_id: String,
    pub position: String,
    pub residue_type: String,
    /// Indexed `[atom][axis]`, atoms in [`BackboneAtom::to_index`] order.
    pub coords: [[String; 3]; 4],
    pub bend: String,
    pub helix: String,
    pub strand: String,
    pub turn: String,
    /// Output columns.
    pub mean_coord: [String; 3],
    pub secondary_id: String,
    pub secondary_label: String,
    pub secondary_color: String,
    pub separator: u8,
}

impl Default for ResidueSchema {
    fn default() -> Self {
        let atoms: Vec<BackboneAtom> = BackboneAtom::iter().collect();
        ResidueSchema {
            protein_id: "UniAcc".to_string(),
            position: "POS".to_string(),
            residue_type: "RES".to_string(),
            coords: std::array::from_fn(|a| {
                std::array::from_fn(|x| format!("{}_coord_{}", AXES[x], atoms[a].column_suffix()))
            }),
            bend: "BEND".to_string(),
            helix: "HELX".to_string(),
            strand: "STRN".to_string(),
            turn: "TURN".to_string(),
            mean_coord: AXES.map(|axis| format!("{}_coord_mean", axis)),
            secondary_id: "secondary".to_string(),
            secondary_label: "secondary_str".to_string(),
            secondary_color: "secondary_color".to_string(),
            separator: b',',
        }
    }
}

impl ResidueSchema {
    pub fn coord_column(&self, atom: BackboneAtom, axis: usize) -> &str {
        &self.coords[atom.to_index()][axis]
    }

    pub fn indicator_column(&self, label: SecondaryStructure) -> Option<&str> {
        match label {
            SecondaryStructure::None => None,
            SecondaryStructure::Bend => Some(&self.bend),
            SecondaryStructure::Helix => Some(&self.helix),
            SecondaryStructure::Strand => Some(&self.strand),
            SecondaryStructure::Turn => Some(&self.turn),
        }
    }

    /// Every input column, in validation order.
    pub fn required_columns(&self) -> Vec<&str> {
        let mut columns = vec![
            self.protein_id.as_str(),
            self.position.as_str(),
            self.residue_type.as_str(),
        ];
        columns.extend(self.coords.iter().flatten().map(String::as_str));
        columns.extend([
            self.bend.as_str(),
            self.helix.as_str(),
            self.strand.as_str(),
            self.turn.as_str(),
        ]);
        columns
    }

    /// The columns added by feature derivation.
    pub fn derived_columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = self.mean_coord.iter().map(String::as_str).collect();
        columns.extend([
            self.secondary_id.as_str(),
            self.secondary_label.as_str(),
            self.secondary_color.as_str(),
        ]);
        columns
    }

    pub fn validate(&self, frame: &DataFrame) -> Result<(), FoldVisError> {
        validate_columns(frame, self.required_columns())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModificationSchema {
    pub protein_id: String,
    pub position: String,
    pub residue_type: String,
    pub modification: String,
    pub pathogenic_mutation: String,
    pub separator: u8,
}

impl Default for ModificationSchema {
    fn default() -> Self {
        ModificationSchema {
            protein_id: "UniAcc".to_string(),
            position: "POS".to_string(),
            residue_type: "RES".to_string(),
            modification: "MOD".to_string(),
            pathogenic_mutation: "PathogenicMutation".to_string(),
            separator: b',',
        }
    }
}

impl ModificationSchema {
    pub fn required_columns(&self) -> Vec<&str> {
        vec![
            self.protein_id.as_str(),
            self.position.as_str(),
            self.residue_type.as_str(),
            self.modification.as_str(),
            self.pathogenic_mutation.as_str(),
        ]
    }

    pub fn validate(&self, frame: &DataFrame) -> Result<(), FoldVisError> {
        validate_columns(frame, self.required_columns())
    }
}

fn validate_columns(frame: &DataFrame, columns: Vec<&str>) -> Result<(), FoldVisError> {
    match columns.into_iter().find(|name| frame.column(name).is_err()) {
        Some(missing) => Err(FoldVisError::missing_column(missing)),
        None => Ok(()),
    }
}
