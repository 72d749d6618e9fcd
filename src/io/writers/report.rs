//! Per-worker Markdown reports.

use anyhow::{Context, Result};
use chrono::Local;
use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::WorkerResult;
use crate::survey::hierarchy::{self, subcategory_key, REPORT_WALK};
use crate::survey::recommend::recommendation;

pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write one worker's full report: header, the fixed 20-row dimension
    /// breakdown, and the tier recommendation.
    pub fn write_report(&mut self, result: &WorkerResult, area: &str) -> Result<()> {
        self.write_header(result, area)?;
        self.write_breakdown(result)?;
        self.write_recommendations(result)?;
        Ok(())
    }

    fn write_header(&mut self, result: &WorkerResult, area: &str) -> Result<()> {
        let month = Local::now().format("%B %Y").to_string().to_uppercase();
        writeln!(
            self.writer,
            "# RESULTADOS DE EVALUACIÓN DE RIESGOS PSICOSOCIALES ({month})"
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- **Trabajador:** {}", result.name)?;
        writeln!(self.writer, "- **Área adscrita:** {area}")?;
        writeln!(self.writer, "- **Nivel de riesgo:** {}", result.tier.label())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, result: &WorkerResult) -> Result<()> {
        writeln!(self.writer, "## Desglose por dimensión")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Categoría | Dominio | Dimensión | Puntuación de dimensión | \
             Resultado del cuestionario | Calificación de la categoría | \
             Resultado por dominio |"
        )?;
        writeln!(self.writer, "|---|---|---|---|---|---|---|")?;

        // The category label appears once per block; continuation rows keep
        // the cell empty but still need the block's category to resolve
        // domain totals.
        let mut current_category = "";
        for row in &REPORT_WALK {
            if let Some(category) = row.category {
                current_category = category;
            }
            let (score, answers) = dimension_cells(result, row.dimension);
            let category_total = row
                .category
                .map(|name| result.category_score(name).to_string())
                .unwrap_or_default();
            let domain_total = row
                .domain
                .map(|name| domain_score(result, current_category, name).to_string())
                .unwrap_or_default();
            let cells = [
                row.category.unwrap_or_default(),
                row.domain.unwrap_or_default(),
                row.dimension,
                score.as_str(),
                answers.as_str(),
                category_total.as_str(),
                domain_total.as_str(),
            ];
            writeln!(self.writer, "| {} |", cells.join(" | "))?;
        }

        writeln!(
            self.writer,
            "| **Total** | | | **{}** | | | |",
            result.total
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, result: &WorkerResult) -> Result<()> {
        writeln!(self.writer, "## Recomendaciones")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", recommendation(result.tier))?;
        Ok(())
    }
}

/// Score and answer cells for one dimension row. Both stay empty when none
/// of the dimension's questions had a column in the input.
fn dimension_cells(result: &WorkerResult, name: &str) -> (String, String) {
    let Some(dimension) = hierarchy::dimension(name) else {
        return (String::new(), String::new());
    };
    let outcomes: Vec<_> = dimension
        .questions
        .iter()
        .filter_map(|id| result.outcomes.get(id))
        .collect();
    if outcomes.is_empty() {
        return (String::new(), String::new());
    }
    let score: u32 = outcomes.iter().map(|outcome| outcome.score).sum();
    let answers = outcomes
        .iter()
        .map(|outcome| outcome.label.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    (score.to_string(), answers)
}

/// Total shown in the domain column. Domains of grouped categories are
/// sub-categories; the flat category's single domain carries the category
/// total itself.
fn domain_score(result: &WorkerResult, category: &str, domain: &str) -> u32 {
    let key = subcategory_key(category, domain);
    result
        .category_scores
        .get(&key)
        .copied()
        .unwrap_or_else(|| result.category_score(category))
}

/// File name for a worker's report. Spaces become underscores, as do path
/// separators and anything else that cannot sit in a file name.
pub fn report_filename(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("Reporte_{stem}.md")
}

/// Write one report file per worker under `dir`, creating it if needed.
///
/// Reports are written in result order; if one fails the earlier files
/// remain on disk.
pub fn write_reports(dir: &Path, results: &[WorkerResult], area: &str) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    for result in results {
        let path = dir.join(report_filename(&result.name));
        let file =
            File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = ReportWriter::new(BufWriter::new(file));
        writer.write_report(result, area)?;
        writer
            .into_inner()
            .flush()
            .with_context(|| format!("failed to write {}", path.display()))?;
        debug!("report written for {} at {}", result.name, path.display());
    }
    Ok(())
}
