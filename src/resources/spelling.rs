//! Spell-check dictionary with Hunspell casing rules.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use log::info;

use super::hunspell::{BreakPattern, expand_dictionary, parse_affix_file};

/// A fixed set of correctly spelled words.
///
/// Lookups are case-sensitive in the same way Hunspell is: a lowercase entry
/// also accepts its Capitalized and ALL-CAPS spellings, any entry accepts its
/// ALL-CAPS spelling, but a proper noun entry such as `Paris` never accepts
/// `paris`. Words that fail as a whole are split at break patterns
/// (hyphens by default) and accepted when every piece passes.
#[derive(Debug, Clone)]
pub struct SpellDictionary {
    words: HashSet<String>,
    /// Lowercased entries, for ALL-CAPS lookups.
    folded: HashSet<String>,
    break_patterns: Vec<BreakPattern>,
}

impl Default for SpellDictionary {
    fn default() -> Self {
        Self::from_words(std::iter::empty::<&str>())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Casing {
    Lower,
    Capitalized,
    AllCaps,
    Mixed,
}

fn casing(word: &str) -> Casing {
    let cased: Vec<char> = word
        .chars()
        .filter(|c| c.is_uppercase() || c.is_lowercase())
        .collect();
    let upper_count = cased.iter().filter(|c| c.is_uppercase()).count();

    if upper_count == 0 {
        return Casing::Lower;
    }
    if upper_count == cased.len() && cased.len() > 1 {
        return Casing::AllCaps;
    }
    let starts_upper = word.chars().next().is_some_and(char::is_uppercase);
    if starts_upper && upper_count == 1 {
        Casing::Capitalized
    } else {
        Casing::Mixed
    }
}

fn normalize_apostrophes(word: &str) -> Cow<'_, str> {
    if word.contains('\u{2019}') {
        Cow::Owned(word.replace('\u{2019}', "'"))
    } else {
        Cow::Borrowed(word)
    }
}

impl SpellDictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| normalize_apostrophes(w.as_ref().trim()).into_owned())
            .filter(|w| !w.is_empty())
            .collect();
        let folded = words.iter().map(|w| w.to_lowercase()).collect();

        Self {
            words,
            folded,
            break_patterns: BreakPattern::defaults(),
        }
    }

    /// Parses a plain word list: one word per line, `#` comments allowed.
    pub fn parse_word_list(content: &str) -> Self {
        Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Expands a Hunspell `.dic` against its `.aff` rules.
    pub fn parse_hunspell(dic_content: &str, aff_content: &str) -> Self {
        let affixes = parse_affix_file(aff_content);
        Self {
            break_patterns: affixes.break_patterns(),
            ..Self::from_words(expand_dictionary(dic_content, &affixes))
        }
    }

    pub fn load_word_list(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list: {}", path.display()))?;
        let dictionary = Self::parse_word_list(&content);
        info!(
            "Loaded {} words from word list {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    pub fn load_hunspell(dic_path: &Path, aff_path: &Path) -> Result<Self> {
        let dic = fs::read_to_string(dic_path)
            .with_context(|| format!("Failed to read Hunspell dictionary: {}", dic_path.display()))?;
        let aff = fs::read_to_string(aff_path)
            .with_context(|| format!("Failed to read Hunspell affix file: {}", aff_path.display()))?;
        let dictionary = Self::parse_hunspell(&dic, &aff);
        info!(
            "Expanded Hunspell dictionary {} into {} word forms",
            dic_path.display(),
            dictionary.len()
        );
        Ok(dictionary)
    }

    /// Loads a dictionary, choosing the format from the file extension.
    ///
    /// `.dic` files are read as Hunspell dictionaries and need a sibling
    /// `.aff` file; anything else is read as a plain word list.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(anyhow!(
                "Spell-check dictionary not found: {}. Provide a Hunspell .dic/.aff pair \
                 (e.g. en_US.dic) or a plain word list with one word per line.",
                path.display()
            ));
        }

        if path.extension().and_then(|e| e.to_str()) == Some("dic") {
            let aff_path = path.with_extension("aff");
            if !aff_path.exists() {
                return Err(anyhow!(
                    "Hunspell affix file not found next to {}: expected {}",
                    path.display(),
                    aff_path.display()
                ));
            }
            Self::load_hunspell(path, &aff_path)
        } else {
            Self::load_word_list(path)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact membership, without any casing fallback.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Spell-checks a single word.
    pub fn check(&self, word: &str) -> bool {
        let word = normalize_apostrophes(word);
        let word = word.as_ref();
        if word.is_empty() {
            return false;
        }
        self.check_whole(word) || self.check_pieces(word)
    }

    fn check_whole(&self, word: &str) -> bool {
        if self.words.contains(word) || is_number(word) {
            return true;
        }

        match casing(word) {
            Casing::Lower | Casing::Mixed => false,
            Casing::Capitalized => self.words.contains(&word.to_lowercase()),
            Casing::AllCaps => self.folded.contains(&word.to_lowercase()),
        }
    }

    fn check_pieces(&self, word: &str) -> bool {
        self.break_patterns.iter().any(|pattern| match pattern {
            BreakPattern::Start(p) => word
                .strip_prefix(p.as_str())
                .is_some_and(|rest| !rest.is_empty() && self.check(rest)),
            BreakPattern::End(p) => word
                .strip_suffix(p.as_str())
                .is_some_and(|rest| !rest.is_empty() && self.check(rest)),
            // Every piece is shorter than the word, so the recursion ends.
            BreakPattern::Inner(p) => {
                let mut pieces = word.split(p.as_str()).filter(|piece| !piece.is_empty());
                word.contains(p.as_str())
                    && pieces.clone().next().is_some()
                    && pieces.all(|piece| self.check(piece))
            }
        })
    }
}

/// Hunspell accepts plain numbers such as `20`, `3.5` or `1,000`.
fn is_number(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_digit())
        && word.ends_with(|c: char| c.is_ascii_digit())
        && word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}
