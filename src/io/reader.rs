//! CSV input parsing: header normalization and row extraction.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::core::{AnswerSheet, RiskmapError, RiskmapResult, WorkerRow};
use crate::survey::questions::QuestionId;

/// Map a raw column header to the question id it carries, if any.
///
/// Spreadsheet exports rename repeated columns to "12.1", "12.2", and so
/// on. Everything after the first '.' is dropped and the numeric prefix is
/// the base id. Headers that do not parse into `1..=46` are not question
/// columns.
fn question_column(header: &str) -> Option<QuestionId> {
    let base = header.split('.').next().unwrap_or(header);
    base.trim().parse::<u8>().ok().and_then(QuestionId::new)
}

/// Read a survey export file into an [`AnswerSheet`].
pub fn read_answer_sheet(path: &Path, name_column: &str) -> RiskmapResult<AnswerSheet> {
    let file = File::open(path)?;
    read_answer_sheet_from_reader(file, name_column)
}

/// Read a survey export from any reader.
///
/// The header must contain `name_column`. Question columns are matched by
/// their numeric header, with ".n" duplicate suffixes collapsed to the base
/// id; the first occurrence of an id wins and later duplicates are ignored.
/// Every other column (timestamps, emails, free comments) is skipped. All
/// fields are whitespace-trimmed.
pub fn read_answer_sheet_from_reader<R: Read>(
    reader: R,
    name_column: &str,
) -> RiskmapResult<AnswerSheet> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let name_index = headers
        .iter()
        .position(|header| header == name_column)
        .ok_or_else(|| RiskmapError::MissingNameColumn(name_column.to_string()))?;

    let mut question_columns: Vec<(usize, QuestionId)> = Vec::new();
    for (index, header) in headers.iter().enumerate() {
        if index == name_index {
            continue;
        }
        let Some(id) = question_column(header) else {
            debug!("ignoring non-question column \"{header}\"");
            continue;
        };
        if question_columns.iter().any(|(_, existing)| *existing == id) {
            debug!("ignoring duplicate column \"{header}\" for question {id}; first occurrence wins");
            continue;
        }
        question_columns.push((index, id));
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let name = record.get(name_index).unwrap_or("").to_string();
        let mut answers = BTreeMap::new();
        for &(index, id) in &question_columns {
            let raw = record.get(index).unwrap_or("");
            answers.insert(id, raw.to_string());
        }
        rows.push(WorkerRow { name, answers });
    }

    Ok(AnswerSheet { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    const NAME_COLUMN: &str = "Nombre Completo del trabajador";

    #[test]
    fn parses_question_columns_and_skips_the_rest() {
        let csv = indoc! {"
            Marca temporal,Nombre Completo del trabajador,1,2,Comentarios
            2024-05-01,Ana Pérez,Siempre,Nunca,sin comentarios
        "};
        let sheet = read_answer_sheet_from_reader(csv.as_bytes(), NAME_COLUMN).unwrap();
        assert_eq!(sheet.rows.len(), 1);
        let row = &sheet.rows[0];
        assert_eq!(row.name, "Ana Pérez");
        assert_eq!(row.answers.len(), 2);
        assert_eq!(row.answers[&QuestionId::new(1).unwrap()], "Siempre");
        assert_eq!(row.answers[&QuestionId::new(2).unwrap()], "Nunca");
    }

    #[test]
    fn first_occurrence_wins_for_duplicate_headers() {
        let csv = indoc! {"
            Nombre Completo del trabajador,12,12.1
            Ana,,Siempre
        "};
        let sheet = read_answer_sheet_from_reader(csv.as_bytes(), NAME_COLUMN).unwrap();
        let row = &sheet.rows[0];
        // The first "12" column is blank; the duplicate is ignored even
        // though it holds a value.
        assert_eq!(row.answers[&QuestionId::new(12).unwrap()], "");
    }

    #[test]
    fn suffixed_headers_collapse_to_the_base_id() {
        let csv = indoc! {"
            Nombre Completo del trabajador,3.2
            Ana,Casi nunca
        "};
        let sheet = read_answer_sheet_from_reader(csv.as_bytes(), NAME_COLUMN).unwrap();
        assert_eq!(
            sheet.rows[0].answers[&QuestionId::new(3).unwrap()],
            "Casi nunca"
        );
    }

    #[test]
    fn out_of_range_numeric_headers_are_not_questions() {
        let csv = indoc! {"
            Nombre Completo del trabajador,0,47,46
            Ana,x,y,Nunca
        "};
        let sheet = read_answer_sheet_from_reader(csv.as_bytes(), NAME_COLUMN).unwrap();
        let row = &sheet.rows[0];
        assert_eq!(row.answers.len(), 1);
        assert_eq!(row.answers[&QuestionId::new(46).unwrap()], "Nunca");
    }

    #[test]
    fn missing_name_column_is_an_error() {
        let csv = indoc! {"
            Trabajador,1
            Ana,Siempre
        "};
        let err = read_answer_sheet_from_reader(csv.as_bytes(), NAME_COLUMN).unwrap_err();
        assert!(matches!(err, RiskmapError::MissingNameColumn(column) if column == NAME_COLUMN));
    }

    #[test]
    fn fields_are_trimmed() {
        let csv = indoc! {"
            Nombre Completo del trabajador,5
            \u{20}\u{20}Ana Pérez ,  Siempre
        "};
        let sheet = read_answer_sheet_from_reader(csv.as_bytes(), NAME_COLUMN).unwrap();
        let row = &sheet.rows[0];
        assert_eq!(row.name, "Ana Pérez");
        assert_eq!(row.answers[&QuestionId::new(5).unwrap()], "Siempre");
    }

    #[test]
    fn configurable_name_column() {
        let csv = indoc! {"
            Empleado,1
            Ana,Nunca
        "};
        let sheet = read_answer_sheet_from_reader(csv.as_bytes(), "Empleado").unwrap();
        assert_eq!(sheet.rows[0].name, "Ana");
    }
}
