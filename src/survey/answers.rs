//! Answer labels and the two fixed answer-to-score tables.

use crate::survey::questions::Polarity;

/// The five canonical answer labels, ordered from most to least frequent.
pub const CANONICAL_LABELS: [&str; 5] = [
    "Siempre",
    "Casi siempre",
    "Algunas veces",
    "Casi nunca",
    "Nunca",
];

/// Label a blank cell is scored as.
pub const NEVER_LABEL: &str = "Nunca";

/// Misspelling of "Casi nunca" that occurs in real survey exports. The
/// negative table scores it 1, exactly like the canonical spelling; the
/// positive table does not carry it, so there it falls through to 0.
pub const CASI_NUNCA_TYPO: &str = "Casi nuca";

/// Resolve the label that is actually scored and reported for a raw cell.
///
/// An empty cell counts as "Nunca", and that substituted label (not the
/// empty string) is what reaches the detail output. Callers hand in
/// already-trimmed text; the CSV reader trims every field on the way in.
pub fn effective_label(raw: &str) -> &str {
    if raw.is_empty() {
        NEVER_LABEL
    } else {
        raw
    }
}

/// Score one answer label under the given polarity.
///
/// Unrecognized labels score 0. That is the contract, not an error path:
/// survey exports carry free text and the scorer must keep going.
pub fn score_answer(label: &str, polarity: Polarity) -> u32 {
    match polarity {
        Polarity::Negative => match label {
            "Siempre" => 4,
            "Casi siempre" => 3,
            "Algunas veces" => 2,
            "Casi nunca" | "Casi nuca" => 1,
            "Nunca" => 0,
            _ => 0,
        },
        Polarity::Positive => match label {
            "Siempre" => 0,
            "Casi siempre" => 1,
            "Algunas veces" => 2,
            "Casi nunca" => 3,
            "Nunca" => 4,
            _ => 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn negative_table_scores_frequency_high() {
        let scores: Vec<u32> = CANONICAL_LABELS
            .iter()
            .map(|label| score_answer(label, Polarity::Negative))
            .collect();
        assert_eq!(scores, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn positive_table_mirrors_the_negative_one() {
        for label in CANONICAL_LABELS {
            let negative = score_answer(label, Polarity::Negative);
            let positive = score_answer(label, Polarity::Positive);
            assert_eq!(negative + positive, 4, "label {label}");
        }
    }

    #[test]
    fn typo_scores_like_casi_nunca_only_on_negative_questions() {
        assert_eq!(score_answer(CASI_NUNCA_TYPO, Polarity::Negative), 1);
        assert_eq!(score_answer(CASI_NUNCA_TYPO, Polarity::Positive), 0);
    }

    #[test]
    fn blank_cells_become_nunca() {
        assert_eq!(effective_label(""), NEVER_LABEL);
        assert_eq!(effective_label("Siempre"), "Siempre");
    }

    proptest! {
        // Lowercase-only strings can never collide with the capitalized
        // canonical labels.
        #[test]
        fn unrecognized_labels_score_zero(label in "[a-z ]{1,24}") {
            prop_assume!(!label.trim().is_empty());
            prop_assert_eq!(score_answer(&label, Polarity::Negative), 0);
            prop_assert_eq!(score_answer(&label, Polarity::Positive), 0);
        }

        #[test]
        fn every_score_stays_in_band(label in ".{0,24}") {
            let effective = effective_label(&label);
            prop_assert!(score_answer(effective, Polarity::Negative) <= 4);
            prop_assert!(score_answer(effective, Polarity::Positive) <= 4);
        }
    }
}
