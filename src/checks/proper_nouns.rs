//! Detection of rare proper nouns.
//!
//! A question qualifies when the tagger marks a word as a proper noun and that
//! word is rare in general English usage, e.g. "Zorkblatt" but not "Paris".

use crate::resources::{PosTagger, TaggedToken, UniversalPos, WordFrequencyTable};

/// Words occurring less often than once per million words are rare.
pub const DEFAULT_RARE_THRESHOLD: f64 = 1e-6;

/// Shortest proper noun considered.
const MIN_PROPER_NOUN_CHARS: usize = 3;

/// Letters only, or letters joined by apostrophes as in `O'Brien`.
fn is_name_like(token: &TaggedToken) -> bool {
    token.is_alpha
        || token
            .text
            .split(['\'', '\u{2019}'])
            .all(|part| !part.is_empty() && part.chars().all(char::is_alphabetic))
}

fn is_candidate(token: &TaggedToken) -> bool {
    token.pos == UniversalPos::Propn
        && is_name_like(token)
        && token.text.chars().count() >= MIN_PROPER_NOUN_CHARS
}

/// Returns true if `text` contains a proper noun whose global frequency is
/// below `threshold`.
pub fn has_unusual_proper_nouns(
    text: &str,
    tagger: &dyn PosTagger,
    frequencies: &WordFrequencyTable,
    threshold: f64,
) -> bool {
    if text.trim().is_empty() {
        return false;
    }

    tagger
        .tag(text)
        .iter()
        .filter(|token| is_candidate(token))
        .any(|token| frequencies.frequency(&token.text.to_lowercase()) < threshold)
}

/// The rare proper nouns of `text` with their frequencies, in order of
/// appearance.
pub fn unusual_proper_nouns(
    text: &str,
    tagger: &dyn PosTagger,
    frequencies: &WordFrequencyTable,
    threshold: f64,
) -> Vec<(String, f64)> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    tagger
        .tag(text)
        .into_iter()
        .filter(is_candidate)
        .filter_map(|token| {
            let frequency = frequencies.frequency(&token.text.to_lowercase());
            (frequency < threshold).then_some((token.text, frequency))
        })
        .collect()
}
