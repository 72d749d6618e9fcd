use clap::Parser;
use colored::Colorize;
use env_logger::Env;

use riskmap::cli::{Cli, Commands};
use riskmap::commands::evaluate::{evaluate, EvaluateOptions};
use riskmap::commands::init::init_config;

// Main orchestrator function
fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Evaluate {
            input,
            out_dir,
            format,
            config,
            no_reports,
            plain,
            verbosity,
        } => {
            init_logging(verbosity);
            if plain {
                colored::control::set_override(false);
            }
            let options = EvaluateOptions {
                input,
                out_dir,
                format,
                config,
                no_reports,
                plain,
            };
            evaluate(&options)
        }
        Commands::Init { force } => {
            init_logging(0);
            init_config(force)
        }
    }
}

/// Default level follows the -v count; RUST_LOG still wins when set.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();
}
