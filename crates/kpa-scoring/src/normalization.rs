//! Text normalization for pronunciation comparison.
//!
//! Expected sentences are authored with spacing and punctuation, while
//! transcripts come back from the speech backend with whatever spacing and
//! punctuation the recognizer guessed. Both sides are reduced to the same
//! canonical form before they are compared character by character.

/// Punctuation removed before comparison.
pub const STRIPPED_PUNCTUATION: [char; 8] = ['.', ',', '!', '?', ';', ':', '(', ')'];

/// Normalize a text for accuracy comparison.
///
/// Applies the following transformations in order:
/// 1. Remove every whitespace character (spaces, tabs, newlines, ...)
/// 2. Remove the punctuation in [`STRIPPED_PUNCTUATION`]
/// 3. Lowercase (Latin words are sometimes mixed into Korean sentences)
///
/// A missing text is represented by the empty string and normalizes to it.
/// The function is idempotent.
///
/// # Examples
/// ```
/// use kpa_scoring::normalize_text;
///
/// assert_eq!(normalize_text("저는 학교에 갑니다."), "저는학교에갑니다");
/// assert_eq!(normalize_text("Hello, K-POP!"), "hellok-pop");
/// ```
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .filter(|c| !is_stripped_whitespace(*c) && !STRIPPED_PUNCTUATION.contains(c))
        .collect::<String>()
        .to_lowercase()
}

// BOM counts as whitespace: some recorders prefix transcripts with it.
fn is_stripped_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
