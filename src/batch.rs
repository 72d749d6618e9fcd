//! Sequential batch processing of a parsed answer sheet.

use log::debug;

use crate::core::{AnswerSheet, RiskmapError, RiskmapResult, WorkerResult};
use crate::scoring::engine::aggregate;

/// Score every row of the sheet, in input order.
///
/// Output order and count mirror the input; that ordering is part of the
/// contract, not an accident. The only fatal condition is a row without a
/// worker name. Per-answer problems never abort the batch.
pub fn process_all(sheet: &AnswerSheet) -> RiskmapResult<Vec<WorkerResult>> {
    let mut results = Vec::with_capacity(sheet.rows.len());
    for (index, row) in sheet.rows.iter().enumerate() {
        if row.name.is_empty() {
            // Data rows are numbered from 1, the way operators count
            // spreadsheet rows below the header.
            return Err(RiskmapError::MissingWorkerName { row: index + 1 });
        }
        let result = aggregate(row);
        debug!(
            "scored {}: total={} tier={}",
            result.name, result.total, result.tier
        );
        results.push(result);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WorkerRow;
    use crate::survey::questions::QuestionId;

    fn named_row(name: &str) -> WorkerRow {
        WorkerRow {
            name: name.to_string(),
            answers: QuestionId::all()
                .map(|id| (id, "Algunas veces".to_string()))
                .collect(),
        }
    }

    #[test]
    fn results_mirror_input_order() {
        let sheet = AnswerSheet {
            rows: vec![named_row("Carlos"), named_row("Ana"), named_row("Beatriz")],
        };
        let results = process_all(&sheet).unwrap();
        let names: Vec<&str> = results.iter().map(|result| result.name.as_str()).collect();
        assert_eq!(names, vec!["Carlos", "Ana", "Beatriz"]);
    }

    #[test]
    fn empty_name_aborts_with_the_row_number() {
        let sheet = AnswerSheet {
            rows: vec![named_row("Carlos"), named_row(""), named_row("Beatriz")],
        };
        let err = process_all(&sheet).unwrap_err();
        assert!(matches!(err, RiskmapError::MissingWorkerName { row: 2 }));
    }

    #[test]
    fn empty_sheet_yields_no_results() {
        let results = process_all(&AnswerSheet::default()).unwrap();
        assert!(results.is_empty());
    }
}
