use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// Summary table as CSV (default)
    Csv,
    /// Full per-worker results as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "riskmap")]
#[command(about = "Psychosocial risk questionnaire scoring and reporting", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a survey export and write the summary and per-worker reports
    Evaluate {
        /// CSV survey export with one row per worker
        input: PathBuf,

        /// Directory receiving the summary file and the reports directory
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Summary artifact format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: SummaryFormat,

        /// Configuration file (default: riskmap.toml in the working directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write only the summary, skip the per-worker report files
        #[arg(long)]
        no_reports: bool,

        /// Plain ASCII console output without colors
        #[arg(long)]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Create a riskmap.toml with the default configuration
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}
