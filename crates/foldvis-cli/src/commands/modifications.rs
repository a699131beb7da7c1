use super::separator_byte;
use crate::cli::{ModificationArgs, OutputFormat};
use anyhow::Context;
use foldvis_core::modification_counts;
use foldvis_io::{modifications_frame, write_csv, write_json, ModificationSchema, ModificationTable};

pub fn execute(args: ModificationArgs) -> anyhow::Result<()> {
    let input = &args.input;
    let schema = ModificationSchema {
        separator: separator_byte(input.separator)?,
        ..Default::default()
    };
    let table = ModificationTable::from_csv(&input.input, &schema)
        .with_context(|| format!("loading {}", input.input))?;
    let records = match &input.accession {
        Some(accession) => table.for_accession(accession),
        None => table.records().to_vec(),
    };
    log::info!("{} modifications", records.len());

    match (&args.output, args.format) {
        (Some(output), OutputFormat::Json) => write_json(&records, output)?,
        (Some(output), OutputFormat::Csv) => {
            write_csv(&mut modifications_frame(&records)?, output)?
        }
        (None, _) => println!(
            "{}",
            serde_json::to_string_pretty(&modification_counts(&records))?
        ),
    }
    Ok(())
}
