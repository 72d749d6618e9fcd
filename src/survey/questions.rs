//! The fixed 46-item questionnaire: question identifiers and their polarity.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of items in the questionnaire. Fixed by the instrument; the
/// questionnaire is never extended at runtime.
pub const QUESTION_COUNT: usize = 46;

/// Scoring direction of a question.
///
/// Negative questions probe exposure to a risk factor, so frequent exposure
/// scores high. Positive questions probe a protective condition, so frequent
/// occurrence scores low. Polarity is positional in the instrument, never
/// inferred from answer content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Negative,
    Positive,
}

/// Identifier of one questionnaire item, guaranteed to be in `1..=46`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct QuestionId(u8);

impl QuestionId {
    /// Build a question id, rejecting anything outside `1..=46`.
    pub fn new(raw: u8) -> Option<Self> {
        (1..=QUESTION_COUNT as u8)
            .contains(&raw)
            .then_some(Self(raw))
    }

    /// Const constructor for the static instrument tables. An out-of-range
    /// id fails compilation of the table instead of surfacing at runtime.
    pub(crate) const fn from_const(raw: u8) -> Self {
        assert!(raw >= 1 && raw <= QUESTION_COUNT as u8);
        Self(raw)
    }

    /// The numeric id, in `1..=46`.
    pub fn get(self) -> u8 {
        self.0
    }

    /// All 46 ids in questionnaire order.
    pub fn all() -> impl Iterator<Item = QuestionId> {
        (1..=QUESTION_COUNT as u8).map(QuestionId)
    }

    /// Scoring direction of this question.
    ///
    /// Items 1-17 and 34-46 are negative, items 18-33 positive. The table is
    /// built once and shared by everything that needs polarity, so the range
    /// boundaries live in exactly one place.
    pub fn polarity(self) -> Polarity {
        POLARITY_BY_ID[(self.0 - 1) as usize]
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for QuestionId {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        QuestionId::new(raw).ok_or_else(|| format!("question id {raw} is outside 1..={QUESTION_COUNT}"))
    }
}

impl From<QuestionId> for u8 {
    fn from(id: QuestionId) -> u8 {
        id.0
    }
}

static POLARITY_BY_ID: Lazy<[Polarity; QUESTION_COUNT]> = Lazy::new(|| {
    let mut table = [Polarity::Positive; QUESTION_COUNT];
    for (index, slot) in table.iter_mut().enumerate() {
        let id = (index + 1) as u8;
        if (1..=17).contains(&id) || (34..=46).contains(&id) {
            *slot = Polarity::Negative;
        }
    }
    table
});
