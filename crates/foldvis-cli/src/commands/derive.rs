use super::load_residues;
use crate::cli::{DeriveArgs, OutputFormat};
use foldvis_core::{FeatureDeriver, Palette};
use foldvis_io::{write_csv, write_json_records};

pub fn execute(args: DeriveArgs) -> anyhow::Result<()> {
    let table = load_residues(&args.input)?;
    let deriver = FeatureDeriver::builder().policy(args.policy).build();
    let derived = deriver.derive(table.records())?;

    let palette = args.colors.then(Palette::default);
    let mut frame = table.augment(&derived, palette.as_ref())?;
    match args.format {
        OutputFormat::Csv => write_csv(&mut frame, &args.output)?,
        OutputFormat::Json => write_json_records(&frame, &args.output)?,
    }
    Ok(())
}
