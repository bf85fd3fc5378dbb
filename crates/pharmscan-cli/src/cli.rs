use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "pharmscan - mine candidate pharmacophores from docked receptor-ligand complexes.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify receptor-ligand interactions and rank the resulting pharmacophores.
    Analyze(AnalyzeArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Path to the receptor structure in PDBQT format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub receptor: PathBuf,

    /// Path to the docked ligand poses in PDBQT format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub ligand: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of interactions (on distinct residues) per pharmacophore.
    #[arg(short = 'k', long = "size", value_name = "INT")]
    pub size: Option<usize>,

    /// Number of ranked pharmacophores to report.
    #[arg(short = 'n', long = "top-n", value_name = "INT")]
    pub top_n: Option<usize>,

    /// Write the ranked pharmacophores to a CSV report.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S pharmacophore.top-n=5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}
