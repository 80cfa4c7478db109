//! Number detection for question text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Any Unicode decimal digit (`Nd`). Superscripts and vulgar fractions are not matched.
static DIGIT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("Invalid regex pattern"));

/// Returns true if the text contains at least one decimal digit character.
///
/// Full-width, Arabic-Indic and Devanagari digits count as digits; spelled-out
/// numbers and Roman numerals do not.
pub fn contains_number(text: &str) -> bool {
    DIGIT_PATTERN.is_match(text.trim())
}
