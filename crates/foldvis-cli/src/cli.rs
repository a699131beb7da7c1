use super::commands;
use clap::{Args, Parser, Subcommand, ValueEnum};
use foldvis_core::IndicatorPolicy;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add mean backbone coordinates and secondary-structure labels to a structure table
    Derive(DeriveArgs),
    /// Print residue counts per accession, residue type and secondary-structure label
    Summary(SummaryArgs),
    /// Build the Cα neighbourhood table
    Neighbors(NeighborArgs),
    /// Print modification counts, or write the modification records with --output
    Modifications(ModificationArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    #[arg(short, long)]
    pub input: String,

    /// Keep only this accession
    #[arg(short, long)]
    pub accession: Option<String>,

    #[arg(long, default_value_t = ',')]
    pub separator: char,
}

#[derive(Args, Debug, Clone)]
pub struct DeriveArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(short, long)]
    pub output: String,

    /// How to label residues carrying more than one secondary-structure flag
    #[arg(long, default_value_t = IndicatorPolicy::Strict)]
    pub policy: IndicatorPolicy,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Add a colour column for the secondary-structure label
    #[arg(long)]
    pub colors: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long, default_value_t = IndicatorPolicy::Strict)]
    pub policy: IndicatorPolicy,
}

#[derive(Args, Debug, Clone)]
pub struct NeighborArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(short, long)]
    pub output: String,

    /// Keep neighbours within this Cα distance
    #[arg(long, conflicts_with = "count", required_unless_present = "count")]
    pub radius: Option<f64>,

    /// Keep this many nearest neighbours
    #[arg(long)]
    pub count: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct ModificationArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the (filtered) records here instead of printing grouped counts
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Derive(args) => commands::derive::execute(args),
            Commands::Summary(args) => commands::summary::execute(args),
            Commands::Neighbors(args) => commands::neighbors::execute(args),
            Commands::Modifications(args) => commands::modifications::execute(args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_derive() {
        let cli = Cli::try_parse_from([
            "foldvis",
            "derive",
            "--input",
            "in.csv",
            "--output",
            "out.json",
            "--policy",
            "precedence",
            "--format",
            "json",
            "-a",
            "P09651",
        ])
        .unwrap();
        match cli.command {
            Commands::Derive(args) => {
                assert_eq!(args.policy, IndicatorPolicy::Precedence);
                assert_eq!(args.format, OutputFormat::Json);
                assert_eq!(args.input.accession.as_deref(), Some("P09651"));
                assert_eq!(args.input.separator, ',');
                assert!(!args.colors);
            }
            _ => panic!("expected derive"),
        }
    }

    #[test]
    fn test_parse_modifications() {
        let cli = Cli::try_parse_from(["foldvis", "modifications", "-i", "mods.csv"]).unwrap();
        match cli.command {
            Commands::Modifications(args) => {
                assert!(args.output.is_none());
                assert_eq!(args.format, OutputFormat::Json);
            }
            _ => panic!("expected modifications"),
        }
    }

    #[test]
    fn test_neighbors_extent_required() {
        let missing = Cli::try_parse_from(["foldvis", "neighbors", "-i", "a.csv", "-o", "b.csv"]);
        assert!(missing.is_err());
        let both = Cli::try_parse_from([
            "foldvis", "neighbors", "-i", "a.csv", "-o", "b.csv", "--radius", "8", "--count", "3",
        ]);
        assert!(both.is_err());
    }
}
