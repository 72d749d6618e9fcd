//! The fixed category / sub-category tree, the finer-grained dimension map,
//! and the fixed walk the per-worker report follows.
//!
//! All of this is instrument data: compiled into the binary, shared
//! read-only by every worker's aggregation, never derived from input.

use crate::survey::questions::QuestionId;

const fn q(raw: u8) -> QuestionId {
    QuestionId::from_const(raw)
}

/// Question membership of one top-level category.
#[derive(Debug, Clone, Copy)]
pub enum CategoryKind {
    /// Questions hang directly off the category.
    Flat(&'static [QuestionId]),
    /// Questions are grouped into named sub-categories.
    Grouped(&'static [Subcategory]),
}

#[derive(Debug, Clone, Copy)]
pub struct Subcategory {
    pub name: &'static str,
    pub questions: &'static [QuestionId],
}

#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub kind: CategoryKind,
}

/// The four categories. Together they cover each of the 46 questions exactly
/// once; `categories_partition_the_questionnaire` holds the tables to that.
pub static CATEGORIES: [Category; 4] = [
    Category {
        name: "Ambiente de trabajo",
        kind: CategoryKind::Flat(&[q(1), q(2), q(3)]),
    },
    Category {
        name: "Factores propios de la actividad",
        kind: CategoryKind::Grouped(&[
            Subcategory {
                name: "Carga de trabajo",
                questions: &[q(4), q(5), q(6), q(7), q(8), q(9), q(41), q(42), q(43)],
            },
            Subcategory {
                name: "Cargas de alta responsabilidad",
                questions: &[q(10), q(11)],
            },
            Subcategory {
                name: "Cargas contradictorias o inconsistentes",
                questions: &[q(12), q(13)],
            },
            Subcategory {
                name: "Falta de control sobre el trabajo",
                questions: &[q(20), q(21), q(22), q(18), q(19), q(26), q(27)],
            },
        ]),
    },
    Category {
        name: "Organización del tiempo de trabajo",
        kind: CategoryKind::Grouped(&[
            Subcategory {
                name: "Jornada de trabajo",
                questions: &[q(14), q(15)],
            },
            Subcategory {
                name: "Interferencia en la relación trabajo-familia",
                questions: &[q(16), q(17)],
            },
        ]),
    },
    Category {
        name: "Liderazgo y relaciones en el trabajo",
        kind: CategoryKind::Grouped(&[
            Subcategory {
                name: "Liderazgo",
                questions: &[q(23), q(24), q(25), q(28), q(29)],
            },
            Subcategory {
                name: "Relaciones en el trabajo",
                questions: &[q(30), q(31), q(32), q(33)],
            },
            Subcategory {
                name: "Violencia",
                questions: &[q(34), q(35), q(36), q(37), q(38), q(39), q(40)],
            },
            Subcategory {
                name: "Deficiente relación con los colaboradores que supervisa",
                questions: &[q(44), q(45), q(46)],
            },
        ]),
    },
];

/// Key under which a sub-category total is stored and labelled in the
/// summary table.
pub fn subcategory_key(category: &str, subcategory: &str) -> String {
    format!("{category} - {subcategory}")
}

/// Summary column labels for every category and sub-category total, in
/// artifact order: each grouped category lists its sub-categories first and
/// then its own total; the flat category is just itself.
pub fn score_columns() -> Vec<String> {
    let mut columns = Vec::new();
    for category in &CATEGORIES {
        match category.kind {
            CategoryKind::Flat(_) => columns.push(category.name.to_string()),
            CategoryKind::Grouped(subcategories) => {
                for sub in subcategories {
                    columns.push(subcategory_key(category.name, sub.name));
                }
                columns.push(category.name.to_string());
            }
        }
    }
    columns
}

/// One presentational dimension of the per-worker report. Dimensions are
/// finer than the aggregation tree and independent of it; they also cover
/// each question exactly once.
#[derive(Debug, Clone, Copy)]
pub struct Dimension {
    pub name: &'static str,
    pub questions: &'static [QuestionId],
}

pub static DIMENSIONS: [Dimension; 20] = [
    Dimension {
        name: "Condiciones peligrosas e inseguras",
        questions: &[q(1)],
    },
    Dimension {
        name: "Condiciones deficientes e insalubres",
        questions: &[q(2)],
    },
    Dimension {
        name: "Trabajos peligrosos",
        questions: &[q(3)],
    },
    Dimension {
        name: "Cargas cuantitativas",
        questions: &[q(4), q(5)],
    },
    Dimension {
        name: "Ritmos de trabajo acelerado",
        questions: &[q(6)],
    },
    Dimension {
        name: "Carga mental",
        questions: &[q(7), q(8), q(9)],
    },
    Dimension {
        name: "Cargas psicológicas emocionales",
        questions: &[q(41), q(42), q(43)],
    },
    Dimension {
        name: "Cargas de alta responsabilidad",
        questions: &[q(10), q(11)],
    },
    Dimension {
        name: "Cargas contradictorias o inconsistentes",
        questions: &[q(12), q(13)],
    },
    Dimension {
        name: "Falta de control y autonomía sobre el trabajo",
        questions: &[q(20), q(21), q(22)],
    },
    Dimension {
        name: "Limitada o nula posibilidad de desarrollo",
        questions: &[q(18), q(19)],
    },
    Dimension {
        name: "Limitada o inexistente capacitación",
        questions: &[q(26), q(27)],
    },
    Dimension {
        name: "Jornadas de trabajo extensas",
        questions: &[q(14), q(15)],
    },
    Dimension {
        name: "Influencia del trabajo fuera del centro laboral",
        questions: &[q(16)],
    },
    Dimension {
        name: "Influencia de las responsabilidades familiares",
        questions: &[q(17)],
    },
    Dimension {
        name: "Escasa claridad de funciones",
        questions: &[q(23), q(24), q(25)],
    },
    Dimension {
        name: "Características del liderazgo",
        questions: &[q(28), q(29)],
    },
    Dimension {
        name: "Relaciones sociales en el trabajo",
        questions: &[q(30), q(31), q(32), q(33)],
    },
    Dimension {
        name: "Deficiente relación con los colaboradores que supervisa",
        questions: &[q(44), q(45), q(46)],
    },
    Dimension {
        name: "Violencia laboral",
        questions: &[q(34), q(35), q(36), q(37), q(38), q(39), q(40)],
    },
];

/// Look up a dimension by its report name.
pub fn dimension(name: &str) -> Option<&'static Dimension> {
    DIMENSIONS.iter().find(|dimension| dimension.name == name)
}

/// One row of the fixed 20-row report walk. `category` and `domain` are
/// `Some` only on the first row of their block; the report leaves the cell
/// empty on continuation rows.
#[derive(Debug, Clone, Copy)]
pub struct ReportRow {
    pub category: Option<&'static str>,
    pub domain: Option<&'static str>,
    pub dimension: &'static str,
}

pub static REPORT_WALK: [ReportRow; 20] = [
    ReportRow {
        category: Some("Ambiente de trabajo"),
        domain: Some("Condiciones en el ambiente de trabajo"),
        dimension: "Condiciones peligrosas e inseguras",
    },
    ReportRow {
        category: None,
        domain: None,
        dimension: "Condiciones deficientes e insalubres",
    },
    ReportRow {
        category: None,
        domain: None,
        dimension: "Trabajos peligrosos",
    },
    ReportRow {
        category: Some("Factores propios de la actividad"),
        domain: Some("Carga de trabajo"),
        dimension: "Cargas cuantitativas",
    },
    ReportRow {
        category: None,
        domain: None,
        dimension: "Ritmos de trabajo acelerado",
    },
    ReportRow {
        category: None,
        domain: None,
        dimension: "Carga mental",
    },
    ReportRow {
        category: None,
        domain: None,
        dimension: "Cargas psicológicas emocionales",
    },
    ReportRow {
        category: None,
        domain: Some("Cargas de alta responsabilidad"),
        dimension: "Cargas de alta responsabilidad",
    },
    ReportRow {
        category: None,
        domain: Some("Cargas contradictorias o inconsistentes"),
        dimension: "Cargas contradictorias o inconsistentes",
    },
    ReportRow {
        category: None,
        domain: Some("Falta de control sobre el trabajo"),
        dimension: "Falta de control y autonomía sobre el trabajo",
    },
    ReportRow {
        category: None,
        domain: None,
        dimension: "Limitada o nula posibilidad de desarrollo",
    },
    ReportRow {
        category: None,
        domain: None,
        dimension: "Limitada o inexistente capacitación",
    },
    ReportRow {
        category: Some("Organización del tiempo de trabajo"),
        domain: Some("Jornada de trabajo"),
        dimension: "Jornadas de trabajo extensas",
    },
    ReportRow {
        category: None,
        domain: Some("Interferencia en la relación trabajo-familia"),
        dimension: "Influencia del trabajo fuera del centro laboral",
    },
    ReportRow {
        category: None,
        domain: None,
        dimension: "Influencia de las responsabilidades familiares",
    },
    ReportRow {
        category: Some("Liderazgo y relaciones en el trabajo"),
        domain: Some("Liderazgo"),
        dimension: "Escasa claridad de funciones",
    },
    ReportRow {
        category: None,
        domain: None,
        dimension: "Características del liderazgo",
    },
    ReportRow {
        category: None,
        domain: Some("Relaciones en el trabajo"),
        dimension: "Relaciones sociales en el trabajo",
    },
    ReportRow {
        category: None,
        domain: None,
        dimension: "Deficiente relación con los colaboradores que supervisa",
    },
    ReportRow {
        category: None,
        domain: Some("Violencia"),
        dimension: "Violencia laboral",
    },
];
