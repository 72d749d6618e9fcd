// Export modules for library usage
pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod scoring;
pub mod survey;

// Re-export commonly used types
pub use crate::core::{
    AnswerOutcome, AnswerSheet, RiskTier, RiskmapError, RiskmapResult, WorkerResult, WorkerRow,
};

pub use crate::batch::process_all;
pub use crate::config::RiskmapConfig;
pub use crate::io::reader::{read_answer_sheet, read_answer_sheet_from_reader};
pub use crate::scoring::engine::aggregate;
pub use crate::survey::answers::{effective_label, score_answer};
pub use crate::survey::questions::{Polarity, QuestionId, QUESTION_COUNT};
pub use crate::survey::recommend::{recommendation, recommendation_for_label};
