//! Pronunciation accuracy scoring for KPA
//!
//! This crate compares the text a participant was asked to read with the
//! transcript returned by the speech backend. Both texts are normalized, their
//! edit distance is computed, and the distance is turned into a 0-100
//! accuracy score and a three-tier [`Grade`].
//!
//! Everything in here is a pure function: no I/O, no clock, no shared state.

mod distance;
mod grade;
mod normalization;

use serde::{Deserialize, Serialize};

pub use distance::edit_distance;
pub use grade::{Grade, HIGH_THRESHOLD, MID_THRESHOLD, ParseGradeError};
pub use normalization::{STRIPPED_PUNCTUATION, normalize_text};

/// Result of comparing an expected text with a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Accuracy rounded half-up to one decimal place
    pub score: f64,
    /// Grade of the unrounded accuracy
    pub grade: Grade,
    /// Edit distance between the normalized texts
    pub edit_distance: usize,
    /// Unrounded accuracy in `[0, 100]`
    pub accuracy: f64,
    /// Expected text after normalization
    pub normalized_expected: String,
    /// Transcript after normalization
    pub normalized_observed: String,
}

/// Evaluate a transcript against the expected text.
///
/// # Arguments
///
/// * `expected` - The text the participant was asked to read
/// * `observed` - The transcript of the recording
///
/// # Returns
///
/// An [`Evaluation`]. If either text is empty after normalization the score
/// is `0` and the grade is [`Grade::Low`]; this is not an error.
///
/// # Examples
/// ```
/// use kpa_scoring::{Grade, evaluate};
///
/// let evaluation = evaluate("안녕하세요", "안뇽하세요");
/// assert_eq!(evaluation.edit_distance, 1);
/// assert_eq!(evaluation.score, 80.0);
/// assert_eq!(evaluation.grade, Grade::High);
/// ```
pub fn evaluate(expected: &str, observed: &str) -> Evaluation {
    let normalized_expected = normalize_text(expected);
    let normalized_observed = normalize_text(observed);

    let distance = edit_distance(&normalized_expected, &normalized_observed);
    let accuracy = accuracy_from_distance(&normalized_expected, &normalized_observed, distance);

    Evaluation {
        score: round_one_decimal(accuracy),
        grade: Grade::from_score(accuracy),
        edit_distance: distance,
        accuracy,
        normalized_expected,
        normalized_observed,
    }
}

/// Compute the unrounded accuracy between an expected text and a transcript.
///
/// `accuracy = clamp((1 - distance / max(len)) * 100, 0, 100)` over the
/// normalized texts, or `0` when either normalized text is empty.
pub fn accuracy(expected: &str, observed: &str) -> f64 {
    let normalized_expected = normalize_text(expected);
    let normalized_observed = normalize_text(observed);
    let distance = edit_distance(&normalized_expected, &normalized_observed);

    accuracy_from_distance(&normalized_expected, &normalized_observed, distance)
}

fn accuracy_from_distance(expected: &str, observed: &str, distance: usize) -> f64 {
    let expected_len = expected.chars().count();
    let observed_len = observed.chars().count();

    if expected_len == 0 || observed_len == 0 {
        return 0.0;
    }

    let max_len = expected_len.max(observed_len) as f64;
    let accuracy = (1.0 - distance as f64 / max_len) * 100.0;

    accuracy.clamp(0.0, 100.0)
}

/// Round half-up to one decimal place. Scores are never negative, so rounding
/// half away from zero is the same thing.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
