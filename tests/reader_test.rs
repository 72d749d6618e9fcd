//! Integration tests for CSV parsing and its interaction with scoring:
//! header normalization, duplicate columns, and the blank-versus-missing
//! distinction end to end.

mod common;

use common::{survey_csv, NAME_COLUMN};
use indoc::indoc;
use riskmap::{aggregate, process_all, read_answer_sheet, read_answer_sheet_from_reader};
use riskmap::{QuestionId, RiskmapError, QUESTION_COUNT};
use std::fs;

#[test]
fn test_full_export_round_trip() {
    let csv = survey_csv(&[("Ana Pérez", "Nunca"), ("Luis Gómez", "Siempre")]);
    let sheet = read_answer_sheet_from_reader(csv.as_bytes(), NAME_COLUMN).unwrap();
    assert_eq!(sheet.rows.len(), 2);
    assert_eq!(sheet.rows[0].answers.len(), QUESTION_COUNT);

    let results = process_all(&sheet).unwrap();
    assert_eq!(results[0].total, 64);
    assert_eq!(results[1].total, 120);
}

#[test]
fn test_reads_from_a_file_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("respuestas.csv");
    fs::write(&path, survey_csv(&[("Ana", "Algunas veces")])).unwrap();

    let sheet = read_answer_sheet(&path, NAME_COLUMN).unwrap();
    assert_eq!(sheet.rows.len(), 1);
    assert_eq!(sheet.rows[0].name, "Ana");
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = read_answer_sheet(std::path::Path::new("/nonexistent/r.csv"), NAME_COLUMN)
        .unwrap_err();
    assert!(matches!(err, RiskmapError::Io(_)));
}

#[test]
fn test_blank_cell_and_missing_column_differ_end_to_end() {
    // Question 18 is positive. A blank cell scores as "Nunca" (4 points);
    // no column at all contributes nothing.
    let with_blank = indoc! {"
        Nombre Completo del trabajador,18
        Ana,
    "};
    let without_column = indoc! {"
        Nombre Completo del trabajador,17
        Ana,Nunca
    "};

    let blank_sheet = read_answer_sheet_from_reader(with_blank.as_bytes(), NAME_COLUMN).unwrap();
    let blank_result = aggregate(&blank_sheet.rows[0]);
    assert_eq!(blank_result.total, 4);
    assert_eq!(
        blank_result.outcomes[&QuestionId::new(18).unwrap()].label,
        "Nunca"
    );

    let missing_sheet =
        read_answer_sheet_from_reader(without_column.as_bytes(), NAME_COLUMN).unwrap();
    let missing_result = aggregate(&missing_sheet.rows[0]);
    assert!(!missing_result
        .outcomes
        .contains_key(&QuestionId::new(18).unwrap()));
}

#[test]
fn test_duplicate_column_keeps_the_first_even_when_blank() {
    // The retained first "12" column is blank, so it scores as "Nunca";
    // the duplicate's "Siempre" must not leak in.
    let csv = indoc! {"
        Nombre Completo del trabajador,12,12.1
        Ana,,Siempre
    "};
    let sheet = read_answer_sheet_from_reader(csv.as_bytes(), NAME_COLUMN).unwrap();
    let result = aggregate(&sheet.rows[0]);
    let outcome = &result.outcomes[&QuestionId::new(12).unwrap()];
    assert_eq!(outcome.label, "Nunca");
    // Question 12 is negative: "Nunca" scores 0, "Siempre" would be 4.
    assert_eq!(outcome.score, 0);
}

#[test]
fn test_extraneous_columns_are_ignored() {
    let csv = indoc! {"
        Marca temporal,Nombre Completo del trabajador,Correo,1,comentario final
        2024-05-01 10:00,Ana,ana@example.com,Casi siempre,ninguno
    "};
    let sheet = read_answer_sheet_from_reader(csv.as_bytes(), NAME_COLUMN).unwrap();
    let row = &sheet.rows[0];
    assert_eq!(row.answers.len(), 1);
    assert_eq!(row.answers[&QuestionId::new(1).unwrap()], "Casi siempre");
}

#[test]
fn test_missing_name_column_reports_the_expected_header() {
    let csv = indoc! {"
        Empleado,1
        Ana,Siempre
    "};
    let err = read_answer_sheet_from_reader(csv.as_bytes(), NAME_COLUMN).unwrap_err();
    match err {
        RiskmapError::MissingNameColumn(column) => assert_eq!(column, NAME_COLUMN),
        other => panic!("unexpected error: {other}"),
    }
}
