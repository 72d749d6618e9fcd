//! Common type definitions used across the crate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::survey::questions::QuestionId;

/// Risk tier assigned to a worker from their total score.
///
/// The boundaries are instrument constants, never derived from the data:
/// `<20` Nil, `[20,45)` Low, `[45,70)` Medium, `[70,90)` High, `>=90`
/// VeryHigh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Nil,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskTier {
    /// Classify a total questionnaire score.
    pub fn from_total(total: u32) -> Self {
        match total {
            0..=19 => RiskTier::Nil,
            20..=44 => RiskTier::Low,
            45..=69 => RiskTier::Medium,
            70..=89 => RiskTier::High,
            _ => RiskTier::VeryHigh,
        }
    }

    /// Display label, as the instrument names the tiers.
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Nil => "Nulo o despreciable",
            RiskTier::Low => "Bajo",
            RiskTier::Medium => "Medio",
            RiskTier::High => "Alto",
            RiskTier::VeryHigh => "Muy alto",
        }
    }

    /// Inverse of [`RiskTier::label`], for callers that hold the textual
    /// tier (summary tables store labels, not variant names).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Nulo o despreciable" => Some(RiskTier::Nil),
            "Bajo" => Some(RiskTier::Low),
            "Medio" => Some(RiskTier::Medium),
            "Alto" => Some(RiskTier::High),
            "Muy alto" => Some(RiskTier::VeryHigh),
            _ => None,
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One parsed input row: the worker plus their raw answer cells.
///
/// A key holding an empty string is a blank cell (the worker skipped the
/// question); an absent key means the input table had no column for that
/// question at all. The two are not interchangeable: blanks score as
/// "Nunca", absent questions are skipped entirely.
#[derive(Debug, Clone, Default)]
pub struct WorkerRow {
    pub name: String,
    pub answers: BTreeMap<QuestionId, String>,
}

/// Scored outcome of a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    /// Score in `0..=4` under the question's polarity table.
    pub score: u32,
    /// The label that was actually scored; blank cells arrive here already
    /// substituted with "Nunca".
    pub label: String,
}

/// Aggregated result for one worker. Immutable once the engine produced it;
/// every output artifact is a projection of a slice of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerResult {
    pub name: String,
    /// Sum of every scored question.
    pub total: u32,
    pub tier: RiskTier,
    /// Outcome per question that had a column in the input; questions whose
    /// column was missing have no entry.
    pub outcomes: BTreeMap<QuestionId, AnswerOutcome>,
    /// Category and sub-category totals, keyed by category name and by
    /// `"{category} - {subcategory}"`.
    pub category_scores: BTreeMap<String, u32>,
}

impl WorkerResult {
    /// Total for one summary column, 0 when the key is unknown.
    pub fn category_score(&self, key: &str) -> u32 {
        self.category_scores.get(key).copied().unwrap_or(0)
    }
}

/// A parsed input table, rows in original order.
#[derive(Debug, Clone, Default)]
pub struct AnswerSheet {
    pub rows: Vec<WorkerRow>,
}

/// Error types for the application.
#[derive(Debug, Error)]
pub enum RiskmapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("worker name column \"{0}\" not found in the input header")]
    MissingNameColumn(String),

    #[error("row {row}: worker name is empty")]
    MissingWorkerName { row: usize },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for riskmap operations.
pub type RiskmapResult<T> = Result<T, RiskmapError>;
