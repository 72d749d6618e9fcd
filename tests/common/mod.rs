// Test utility module for riskmap integration tests
#![allow(dead_code)]

use std::collections::BTreeMap;

use riskmap::{QuestionId, WorkerRow};

/// Name column header used by the default configuration.
pub const NAME_COLUMN: &str = "Nombre Completo del trabajador";

/// Answers for all 46 questions, every one set to `label`.
pub fn answers_for_all(label: &str) -> BTreeMap<QuestionId, String> {
    QuestionId::all().map(|id| (id, label.to_string())).collect()
}

/// A worker row answering every question with `label`.
pub fn worker_row(name: &str, label: &str) -> WorkerRow {
    WorkerRow {
        name: name.to_string(),
        answers: answers_for_all(label),
    }
}

/// A complete survey export: the default name column plus all 46 question
/// columns, one row per `(name, label)` pair with the label repeated across
/// every question.
pub fn survey_csv(rows: &[(&str, &str)]) -> String {
    let mut header = vec![NAME_COLUMN.to_string()];
    header.extend((1..=46).map(|id| id.to_string()));
    let mut csv = header.join(",");
    csv.push('\n');
    for (name, label) in rows {
        let mut cells = vec![name.to_string()];
        cells.extend(std::iter::repeat(label.to_string()).take(46));
        csv.push_str(&cells.join(","));
        csv.push('\n');
    }
    csv
}
