//! Column -> Vec conversions with the null policies used by the loaders.
//!
//! A null cell follows the per-column policy below. A non-null cell that cannot be read as
//! the column's type is always a [`FoldVisError::InvalidValue`].
use crate::error::Result;
use foldvis_core::FoldVisError;
use polars::prelude::*;

fn series<'a>(frame: &'a DataFrame, name: &str) -> Result<&'a Series> {
    Ok(frame.column(name)?.as_materialized_series())
}

/// Cast `name` to `dtype`, rejecting cells the cast turned into nulls.
fn checked_cast(frame: &DataFrame, name: &str, dtype: &DataType) -> Result<Series> {
    let original = series(frame, name)?;
    let cast = original.cast(dtype)?;
    if cast.null_count() == original.null_count() {
        return Ok(cast);
    }
    let (now, before) = (cast.is_null(), original.is_null());
    let row = now
        .into_iter()
        .zip(before.into_iter())
        .position(|(now, before)| now == Some(true) && before == Some(false))
        .unwrap_or_default();
    Err(invalid(original, name, row)?.into())
}

fn invalid(original: &Series, name: &str, row: usize) -> Result<FoldVisError> {
    let text = original.cast(&DataType::String)?;
    let value = text.str()?.get(row).unwrap_or_default().to_string();
    Ok(FoldVisError::invalid_value(name, row, value))
}

/// Numeric column as f64; nulls become NaN.
pub(crate) fn f64_values(frame: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let cast = checked_cast(frame, name, &DataType::Float64)?;
    Ok(cast
        .f64()?
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect())
}

/// Integer column; a null is a [`FoldVisError::MissingValue`].
pub(crate) fn i64_values(frame: &DataFrame, name: &str) -> Result<Vec<i64>> {
    let cast = checked_cast(frame, name, &DataType::Int64)?;
    let values = cast
        .i64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.ok_or_else(|| FoldVisError::missing_value(name, row)))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(values)
}

/// Text column; a null is a [`FoldVisError::MissingValue`].
pub(crate) fn string_values(frame: &DataFrame, name: &str) -> Result<Vec<String>> {
    let cast = series(frame, name)?.cast(&DataType::String)?;
    let values = cast
        .str()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| {
            v.map(str::to_string)
                .ok_or_else(|| FoldVisError::missing_value(name, row))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(values)
}

/// Flag column stored as booleans, integers (non-zero is set) or text; nulls are unset.
///
/// Text flags must be one of `true`/`t`/`yes`/`y`/`1` or `false`/`f`/`no`/`n`/`0`
/// (case-insensitive); anything else is rejected.
pub(crate) fn flag_values(frame: &DataFrame, name: &str) -> Result<Vec<bool>> {
    let column = series(frame, name)?;
    let values = match column.dtype() {
        DataType::String => column
            .str()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| match v {
                None => Ok(false),
                Some(text) => parse_flag(text)
                    .ok_or_else(|| FoldVisError::invalid_value(name, row, text)),
            })
            .collect::<std::result::Result<Vec<_>, _>>()?,
        _ => checked_cast(frame, name, &DataType::Int64)?
            .i64()?
            .into_iter()
            .map(|v| v.map(|x| x != 0).unwrap_or(false))
            .collect(),
    };
    Ok(values)
}

fn parse_flag(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" => Some(true),
        "false" | "f" | "no" | "n" | "0" | "" => Some(false),
        _ => None,
    }
}
