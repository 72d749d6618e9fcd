//! The evaluate command: read, score, write, summarize.

use anyhow::{Context, Result};
use log::info;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::batch::process_all;
use crate::cli::SummaryFormat;
use crate::config::RiskmapConfig;
use crate::io::reader::read_answer_sheet;
use crate::io::writers::report::write_reports;
use crate::io::writers::summary::{write_summary_csv, write_summary_json};
use crate::io::writers::terminal::print_summary;

/// Everything `evaluate` needs, resolved from CLI flags.
#[derive(Debug, Clone)]
pub struct EvaluateOptions {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub format: SummaryFormat,
    pub config: Option<PathBuf>,
    pub no_reports: bool,
    pub plain: bool,
}

/// Run the full pipeline.
///
/// Artifacts are written in a fixed order (summary first, then reports), so
/// a failure partway leaves the earlier artifacts on disk. Nothing is
/// written before the whole batch has been scored.
pub fn evaluate(options: &EvaluateOptions) -> Result<()> {
    let config = RiskmapConfig::load(options.config.as_deref())
        .context("failed to load configuration")?;

    let sheet = read_answer_sheet(&options.input, &config.input.name_column)
        .with_context(|| format!("failed to read {}", options.input.display()))?;
    info!(
        "read {} worker row(s) from {}",
        sheet.rows.len(),
        options.input.display()
    );

    let results = process_all(&sheet).context("batch aborted")?;

    fs::create_dir_all(&options.out_dir)
        .with_context(|| format!("failed to create {}", options.out_dir.display()))?;

    let summary_path = summary_path(&options.out_dir, &config, options.format);
    let summary_file = File::create(&summary_path)
        .with_context(|| format!("failed to create {}", summary_path.display()))?;
    match options.format {
        SummaryFormat::Csv => write_summary_csv(summary_file, &results),
        SummaryFormat::Json => write_summary_json(summary_file, &results),
    }
    .with_context(|| format!("failed to write {}", summary_path.display()))?;
    info!("summary written to {}", summary_path.display());

    if !options.no_reports {
        let reports_dir = options.out_dir.join(&config.output.reports_dirname);
        write_reports(&reports_dir, &results, &config.report.area)
            .with_context(|| format!("failed to write reports under {}", reports_dir.display()))?;
        info!(
            "{} report(s) written under {}",
            results.len(),
            reports_dir.display()
        );
    }

    print_summary(&results, options.plain);
    Ok(())
}

/// Summary file location: the configured name, with the extension following
/// the chosen format.
fn summary_path(out_dir: &Path, config: &RiskmapConfig, format: SummaryFormat) -> PathBuf {
    let path = out_dir.join(&config.output.summary_filename);
    match format {
        SummaryFormat::Csv => path,
        SummaryFormat::Json => path.with_extension("json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_format_swaps_the_extension() {
        let config = RiskmapConfig::default();
        let csv = summary_path(Path::new("out"), &config, SummaryFormat::Csv);
        let json = summary_path(Path::new("out"), &config, SummaryFormat::Json);
        assert_eq!(
            csv,
            Path::new("out/resultados_evaluacion_psicosocial.csv")
        );
        assert_eq!(
            json,
            Path::new("out/resultados_evaluacion_psicosocial.json")
        );
    }
}
