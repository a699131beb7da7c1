//! The structure table: a polars frame kept in step with its typed records.
use crate::columns::{f64_values, flag_values, i64_values, string_values};
use crate::error::Result;
use crate::schema::ResidueSchema;
use foldvis_core::{
    BackboneAtom, DerivedResidue, Palette, ResidueCollection, ResidueRecord, SecondaryIndicators,
};
use polars::prelude::*;
use std::path::Path;
use strum::IntoEnumIterator;

/// A loaded structure table.
///
/// `frame` holds every input column, so derived columns can be appended without losing
/// anything the downstream tooling reads; `collection` holds the validated records, one per
/// frame row, in the same order.
pub struct ResidueTable {
    frame: DataFrame,
    collection: ResidueCollection,
    schema: ResidueSchema,
}

impl ResidueTable {
    pub fn from_csv<P: AsRef<Path>>(path: P, schema: &ResidueSchema) -> Result<Self> {
        let path = path.as_ref();
        let separator = schema.separator;
        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(10_000))
            .map_parse_options(|opts| opts.with_separator(separator))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?;
        log::debug!(
            "read {} rows x {} columns from {}",
            frame.height(),
            frame.width(),
            path.display()
        );
        Self::from_frame(frame, schema)
    }

    /// Validate `frame` against `schema` and convert it to records.
    pub fn from_frame(frame: DataFrame, schema: &ResidueSchema) -> Result<Self> {
        schema.validate(&frame)?;

        let protein_ids = string_values(&frame, &schema.protein_id)?;
        let positions = i64_values(&frame, &schema.position)?;
        let residue_types = string_values(&frame, &schema.residue_type)?;

        let mut coords: Vec<[Vec<f64>; 3]> = Vec::with_capacity(4);
        for atom in BackboneAtom::iter() {
            coords.push([
                f64_values(&frame, schema.coord_column(atom, 0))?,
                f64_values(&frame, schema.coord_column(atom, 1))?,
                f64_values(&frame, schema.coord_column(atom, 2))?,
            ]);
        }
        let bend = flag_values(&frame, &schema.bend)?;
        let helix = flag_values(&frame, &schema.helix)?;
        let strand = flag_values(&frame, &schema.strand)?;
        let turn = flag_values(&frame, &schema.turn)?;

        let records = protein_ids
            .into_iter()
            .zip(positions)
            .zip(residue_types)
            .enumerate()
            .map(|(row, ((protein_id, position), residue_type))| ResidueRecord {
                protein_id,
                position,
                residue_type,
                coords: std::array::from_fn(|a| std::array::from_fn(|x| coords[a][x][row])),
                indicators: SecondaryIndicators {
                    bend: bend[row],
                    helix: helix[row],
                    strand: strand[row],
                    turn: turn[row],
                },
            })
            .collect();

        Ok(ResidueTable {
            frame,
            collection: ResidueCollection::new(records),
            schema: schema.clone(),
        })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn collection(&self) -> &ResidueCollection {
        &self.collection
    }

    pub fn records(&self) -> &[ResidueRecord] {
        self.collection.records()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Narrow the table to one protein. An unknown accession gives an empty table.
    pub fn select_accession(&self, protein_id: &str) -> Result<Self> {
        let selection = self.collection.select_by_accession(protein_id);
        let mask: Vec<bool> = (0..self.len()).map(|i| selection.contains(i)).collect();
        let mask = BooleanChunked::new(PlSmallStr::from_static("mask"), mask.as_slice());
        let frame = self.frame.filter(&mask)?;
        log::debug!("{} residues for {}", frame.height(), protein_id);
        Ok(ResidueTable {
            frame,
            collection: self.collection.view(selection).to_collection(),
            schema: self.schema.clone(),
        })
    }

    /// The input frame with the derived columns added.
    ///
    /// Derived columns already present (from an earlier run) are replaced, never duplicated.
    /// `palette` adds a colour column for the secondary-structure label.
    pub fn augment(
        &self,
        derived: &[DerivedResidue],
        palette: Option<&Palette>,
    ) -> Result<DataFrame> {
        if derived.len() != self.frame.height() {
            return Err(PolarsError::ShapeMismatch(
                format!(
                    "{} derived rows for a table of {} rows",
                    derived.len(),
                    self.frame.height()
                )
                .into(),
            )
            .into());
        }
        let schema = &self.schema;
        let mut frame = self.frame.clone();
        for axis in 0..3 {
            let values: Vec<f64> = derived.iter().map(|d| d.mean_coord[axis]).collect();
            frame.with_column(Column::new(
                PlSmallStr::from(schema.mean_coord[axis].as_str()),
                values,
            ))?;
        }
        let ids: Vec<i32> = derived.iter().map(|d| d.secondary.id() as i32).collect();
        frame.with_column(Column::new(
            PlSmallStr::from(schema.secondary_id.as_str()),
            ids,
        ))?;
        let labels: Vec<String> = derived.iter().map(|d| d.secondary.to_string()).collect();
        frame.with_column(Column::new(
            PlSmallStr::from(schema.secondary_label.as_str()),
            labels,
        ))?;
        if let Some(palette) = palette {
            let colors: Vec<String> = derived
                .iter()
                .map(|d| palette.secondary(d.secondary).to_string())
                .collect();
            frame.with_column(Column::new(
                PlSmallStr::from(schema.secondary_color.as_str()),
                colors,
            ))?;
        }
        Ok(frame)
    }
}
