//! The aggregation engine: one worker row in, one scored result out.

use std::collections::BTreeMap;

use crate::core::{AnswerOutcome, RiskTier, WorkerResult, WorkerRow};
use crate::survey::answers::{effective_label, score_answer};
use crate::survey::hierarchy::{subcategory_key, CategoryKind, CATEGORIES};
use crate::survey::questions::QuestionId;

/// Aggregate one worker's answers into their scored result.
///
/// Tolerant by contract: unrecognized labels score 0, blank cells score as
/// "Nunca", and questions without a column in the input are skipped
/// entirely. Nothing in here can fail.
pub fn aggregate(row: &WorkerRow) -> WorkerResult {
    let mut total = 0;
    let mut outcomes = BTreeMap::new();

    for id in QuestionId::all() {
        let Some(raw) = row.answers.get(&id) else {
            // No column for this question. Distinct from a blank cell,
            // which scores as "Nunca" below.
            continue;
        };
        let label = effective_label(raw);
        let score = score_answer(label, id.polarity());
        total += score;
        outcomes.insert(
            id,
            AnswerOutcome {
                score,
                label: label.to_string(),
            },
        );
    }

    WorkerResult {
        name: row.name.clone(),
        total,
        tier: RiskTier::from_total(total),
        category_scores: score_hierarchy(&outcomes),
        outcomes,
    }
}

/// Sum question scores into category and sub-category totals.
///
/// Grouped categories get one entry per sub-category plus their own total,
/// the sum of those entries. The flat category sums its questions directly.
fn score_hierarchy(outcomes: &BTreeMap<QuestionId, AnswerOutcome>) -> BTreeMap<String, u32> {
    let mut scores = BTreeMap::new();
    for category in &CATEGORIES {
        match category.kind {
            CategoryKind::Flat(questions) => {
                scores.insert(category.name.to_string(), sum_questions(outcomes, questions));
            }
            CategoryKind::Grouped(subcategories) => {
                let mut category_total = 0;
                for sub in subcategories {
                    let sub_total = sum_questions(outcomes, sub.questions);
                    scores.insert(subcategory_key(category.name, sub.name), sub_total);
                    category_total += sub_total;
                }
                scores.insert(category.name.to_string(), category_total);
            }
        }
    }
    scores
}

fn sum_questions(
    outcomes: &BTreeMap<QuestionId, AnswerOutcome>,
    questions: &[QuestionId],
) -> u32 {
    questions
        .iter()
        .map(|id| outcomes.get(id).map_or(0, |outcome| outcome.score))
        .sum()
}
