//! The summary artifact: one row per worker, as CSV or JSON.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::core::WorkerResult;
use crate::survey::hierarchy::score_columns;

/// Fixed leading columns of the summary table.
pub const HEADER_NAME: &str = "Nombre";
pub const HEADER_TOTAL: &str = "Puntuación Total";
pub const HEADER_TIER: &str = "Nivel de Riesgo";

/// Write the summary table as CSV: the three fixed columns, then one column
/// per category and sub-category total in hierarchy order.
pub fn write_summary_csv<W: Write>(writer: W, results: &[WorkerResult]) -> Result<()> {
    let columns = score_columns();
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = vec![HEADER_NAME, HEADER_TOTAL, HEADER_TIER];
    header.extend(columns.iter().map(String::as_str));
    csv_writer.write_record(&header)?;

    for result in results {
        let mut record: Vec<String> = Vec::with_capacity(header.len());
        record.push(result.name.clone());
        record.push(result.total.to_string());
        record.push(result.tier.label().to_string());
        for column in &columns {
            record.push(result.category_score(column).to_string());
        }
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct SummaryEnvelope<'a> {
    generated_at: DateTime<Utc>,
    worker_count: usize,
    results: &'a [WorkerResult],
}

/// Write the summary artifact as JSON: the full per-worker results,
/// per-question outcomes included, under a timestamped envelope.
pub fn write_summary_json<W: Write>(writer: W, results: &[WorkerResult]) -> Result<()> {
    let envelope = SummaryEnvelope {
        generated_at: Utc::now(),
        worker_count: results.len(),
        results,
    };
    serde_json::to_writer_pretty(writer, &envelope)?;
    Ok(())
}
