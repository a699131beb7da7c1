pub mod derive;
pub mod modifications;
pub mod neighbors;
pub mod summary;

use crate::cli::InputArgs;
use anyhow::Context;
use foldvis_io::{ResidueSchema, ResidueTable};

/// Load the structure table named by `args`, narrowed to `--accession` when given.
pub(crate) fn load_residues(args: &InputArgs) -> anyhow::Result<ResidueTable> {
    let schema = ResidueSchema {
        separator: separator_byte(args.separator)?,
        ..Default::default()
    };
    let table = ResidueTable::from_csv(&args.input, &schema)
        .with_context(|| format!("loading {}", args.input))?;
    log::info!("loaded {} residues from {}", table.len(), args.input);
    match &args.accession {
        Some(accession) => {
            let selected = table.select_accession(accession)?;
            if selected.is_empty() {
                log::warn!("no residues for accession {}", accession);
            }
            Ok(selected)
        }
        None => Ok(table),
    }
}

pub(crate) fn separator_byte(separator: char) -> anyhow::Result<u8> {
    u8::try_from(separator)
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| format!("separator {:?} is not a single ASCII character", separator))
}
