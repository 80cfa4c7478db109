//! Boolean heuristics applied to each question.
//!
//! Each check is independent: a question may match any combination of them.

pub mod non_english;
pub mod numbers;
pub mod proper_nouns;
#[cfg(test)]
mod proper_nouns_test;

pub use non_english::contains_non_english_and_words;
pub use numbers::contains_number;
pub use proper_nouns::{DEFAULT_RARE_THRESHOLD, has_unusual_proper_nouns};
