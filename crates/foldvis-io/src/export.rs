//! Writers for the CSV and JSON artifacts.
use crate::error::Result;
use foldvis_core::{ModificationRecord, NeighborPair};
use polars::prelude::*;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn write_csv<P: AsRef<Path>>(frame: &mut DataFrame, path: P) -> Result<()> {
    let mut file = File::create(path.as_ref())?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(frame)?;
    log::info!("wrote {} rows to {}", frame.height(), path.as_ref().display());
    Ok(())
}

/// Write `frame` as a JSON array with one object per row, keyed by column name.
///
/// Non-finite floats are written as `null`. Columns that are neither boolean nor numeric
/// are written as their text form.
pub fn write_json_records<P: AsRef<Path>>(frame: &DataFrame, path: P) -> Result<()> {
    let mut columns = Vec::with_capacity(frame.width());
    for column in frame.get_columns() {
        let values = json_values(column.as_materialized_series())?;
        columns.push((column.name().to_string(), values.into_iter()));
    }
    let rows: Vec<Value> = (0..frame.height())
        .map(|_| {
            let object: Map<String, Value> = columns
                .iter_mut()
                .map(|(name, values)| (name.clone(), values.next().unwrap_or(Value::Null)))
                .collect();
            Value::Object(object)
        })
        .collect();
    write_json(&rows, path)
}

pub fn write_json<T: Serialize, P: AsRef<Path>>(items: &[T], path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    serde_json::to_writer(&mut writer, items)?;
    writer.flush()?;
    log::info!("wrote {} records to {}", items.len(), path.as_ref().display());
    Ok(())
}

pub fn neighbors_frame(pairs: &[NeighborPair]) -> Result<DataFrame> {
    let protein_ids: Vec<&str> = pairs.iter().map(|p| p.protein_id.as_str()).collect();
    let sources: Vec<i64> = pairs.iter().map(|p| p.source).collect();
    let targets: Vec<i64> = pairs.iter().map(|p| p.target).collect();
    let distances: Vec<f64> = pairs.iter().map(|p| p.distance_ca).collect();
    let frame = DataFrame::new(vec![
        Column::new("UniAcc".into(), protein_ids),
        Column::new("POS_x".into(), sources),
        Column::new("POS_y".into(), targets),
        Column::new("distance_ca".into(), distances),
    ])?;
    Ok(frame)
}

pub fn modifications_frame(records: &[ModificationRecord]) -> Result<DataFrame> {
    let protein_ids: Vec<&str> = records.iter().map(|m| m.protein_id.as_str()).collect();
    let positions: Vec<i64> = records.iter().map(|m| m.position).collect();
    let residue_types: Vec<&str> = records.iter().map(|m| m.residue_type.as_str()).collect();
    let modifications: Vec<&str> = records.iter().map(|m| m.modification.as_str()).collect();
    let pathogenic: Vec<bool> = records.iter().map(|m| m.pathogenic_mutation).collect();
    let frame = DataFrame::new(vec![
        Column::new("UniAcc".into(), protein_ids),
        Column::new("POS".into(), positions),
        Column::new("RES".into(), residue_types),
        Column::new("MOD".into(), modifications),
        Column::new("PathogenicMutation".into(), pathogenic),
    ])?;
    Ok(frame)
}

fn json_values(series: &Series) -> Result<Vec<Value>> {
    let dtype = series.dtype();
    let values = if dtype.is_bool() {
        series
            .bool()?
            .into_iter()
            .map(|v| v.map_or(Value::Null, Value::Bool))
            .collect()
    } else if dtype.is_unsigned_integer() {
        series
            .cast(&DataType::UInt64)?
            .u64()?
            .into_iter()
            .map(|v| v.map_or(Value::Null, Value::from))
            .collect()
    } else if dtype.is_signed_integer() {
        series
            .cast(&DataType::Int64)?
            .i64()?
            .into_iter()
            .map(|v| v.map_or(Value::Null, Value::from))
            .collect()
    } else if dtype.is_float() {
        series
            .cast(&DataType::Float64)?
            .f64()?
            .into_iter()
            .map(|v| v.map_or(Value::Null, Value::from))
            .collect()
    } else {
        series
            .cast(&DataType::String)?
            .str()?
            .into_iter()
            .map(|v| v.map_or(Value::Null, |s| Value::String(s.to_string())))
            .collect()
    };
    Ok(values)
}
