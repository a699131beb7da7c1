use super::load_residues;
use crate::cli::{NeighborArgs, OutputFormat};
use anyhow::bail;
use foldvis_core::{neighbor_table, NeighborExtent};
use foldvis_io::{neighbors_frame, write_csv, write_json};

pub fn execute(args: NeighborArgs) -> anyhow::Result<()> {
    let extent = match (args.radius, args.count) {
        (Some(radius), None) if radius >= 0.0 => NeighborExtent::Radius(radius),
        (Some(radius), None) => bail!("radius must be non-negative, got {}", radius),
        (None, Some(count)) => NeighborExtent::Count(count),
        _ => bail!("exactly one of --radius or --count is required"),
    };
    let table = load_residues(&args.input)?;
    let pairs = neighbor_table(table.records(), extent);
    match args.format {
        OutputFormat::Csv => write_csv(&mut neighbors_frame(&pairs)?, &args.output)?,
        OutputFormat::Json => write_json(&pairs, &args.output)?,
    }
    Ok(())
}
