//! Detection of words missing from the English dictionary.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::resources::SpellDictionary;

/// A word character followed by word characters, apostrophes or hyphens.
static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w[\w'-]*\b").expect("Invalid regex pattern"));

/// Numeric literals such as `2020`, `45.67`, `7,894,000` or `555-1234`.
static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d[\d,.-]*$").expect("Invalid regex pattern"));

/// Splits text into the words that are spell-checked.
pub fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str())
}

pub fn is_numeric_literal(token: &str) -> bool {
    NUMBER_PATTERN.is_match(token)
}

/// Numeric literals and letterless tokens such as `_` are never spell-checked.
fn is_checkable(token: &str) -> bool {
    !is_numeric_literal(token) && token.chars().any(char::is_alphabetic)
}

/// Returns true if any non-numeric word of `text` fails the dictionary check.
pub fn contains_non_english_and_words(text: &str, dictionary: &SpellDictionary) -> bool {
    word_tokens(text)
        .filter(|token| is_checkable(token))
        .any(|token| !dictionary.check(token))
}

/// The words that fail the dictionary check, in order of appearance.
pub fn non_english_words<'a>(text: &'a str, dictionary: &SpellDictionary) -> Vec<&'a str> {
    word_tokens(text)
        .filter(|token| is_checkable(token) && !dictionary.check(token))
        .collect()
}
