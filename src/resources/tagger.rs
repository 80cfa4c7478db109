//! Part-of-speech tagging.
//!
//! [`LexiconTagger`] is a pretrained lexicon tagger in the style of the Brill
//! initial-state tagger: every known word gets its most frequent tag from the
//! lexicon, and unknown words are tagged from capitalization and suffix
//! evidence. Tags are Penn Treebank tags, mapped onto the Universal POS tag set
//! so callers can ask for `PROPN` directly.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use strum::{Display, EnumString};

/// Universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum UniversalPos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl UniversalPos {
    /// Maps a Penn Treebank tag onto the universal tag set.
    pub fn from_penn(tag: &str) -> Self {
        match tag {
            "NNP" | "NNPS" => UniversalPos::Propn,
            "NN" | "NNS" => UniversalPos::Noun,
            "JJ" | "JJR" | "JJS" => UniversalPos::Adj,
            "RB" | "RBR" | "RBS" | "WRB" => UniversalPos::Adv,
            "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" => UniversalPos::Verb,
            "MD" => UniversalPos::Aux,
            "IN" => UniversalPos::Adp,
            "CC" => UniversalPos::Cconj,
            "DT" | "PDT" | "WDT" => UniversalPos::Det,
            "PRP" | "PRP$" | "WP" | "WP$" | "EX" => UniversalPos::Pron,
            "CD" => UniversalPos::Num,
            "RP" | "TO" | "POS" => UniversalPos::Part,
            "UH" => UniversalPos::Intj,
            "SYM" | "$" | "#" => UniversalPos::Sym,
            "." | "," | ":" | "``" | "''" | "-LRB-" | "-RRB-" | "HYPH" | "NFP" => {
                UniversalPos::Punct
            }
            _ => UniversalPos::X,
        }
    }
}

/// A token with its tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedToken {
    pub text: String,
    /// Penn Treebank tag.
    pub tag: String,
    pub pos: UniversalPos,
    /// Every character is alphabetic.
    pub is_alpha: bool,
    pub sentence_start: bool,
}

/// A part-of-speech tagger usable from several classification threads.
pub trait PosTagger: Send + Sync {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

/// Numbers, words (letters then letters/digits, with inner apostrophes), then
/// any other single non-space character. Quotes around a word stay separate.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\d+(?:[.,:/]\d+)*|\p{L}[\p{L}\p{M}\p{N}]*(?:['\u{2019}]\p{L}[\p{L}\p{M}\p{N}]*)*|\S",
    )
    .expect("Invalid regex pattern")
});

const CLITICS: &[&str] = &["'s", "'re", "'ve", "'m", "'ll", "'d", "'t"];

fn is_clitic(text: &str) -> bool {
    let folded = text.to_lowercase().replace('\u{2019}', "'");
    CLITICS.contains(&folded.as_str())
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// Splits `text` into tokens. A trailing clitic such as `'s` is split off its
/// word; other inner apostrophes, as in `O'Brien`, stay inside the word.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for m in TOKEN_PATTERN.find_iter(text) {
        let token = m.as_str();
        match token.rfind(is_apostrophe) {
            Some(split) if split > 0 && is_clitic(&token[split..]) => {
                tokens.push(&token[..split]);
                tokens.push(&token[split..]);
            }
            _ => tokens.push(token),
        }
    }
    tokens
}

const ABBREVIATIONS: &[&str] = &[
    "dr", "mr", "mrs", "ms", "st", "jr", "sr", "prof", "gen", "gov", "sen", "rep", "rev", "capt",
    "col", "lt", "sgt", "mt", "ft", "vs", "etc", "inc", "co", "corp", "ltd", "no", "jan", "feb",
    "mar", "apr", "aug", "sept", "oct", "nov", "dec",
];

/// Lexicon-based tagger.
#[derive(Debug, Clone, Default)]
pub struct LexiconTagger {
    lexicon: HashMap<String, Vec<String>>,
}

impl LexiconTagger {
    pub fn new(lexicon: HashMap<String, Vec<String>>) -> Self {
        Self { lexicon }
    }

    /// Parses a Brill-format lexicon: `word TAG [TAG ...]` per line, most
    /// likely tag first.
    pub fn parse(content: &str) -> Result<Self> {
        let mut lexicon: HashMap<String, Vec<String>> = HashMap::new();

        for (line_number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split_whitespace();
            let word = fields.next().unwrap_or_default();
            let tags: Vec<String> = fields.map(String::from).collect();
            if tags.is_empty() {
                return Err(anyhow!(
                    "Lexicon line {} has no tags: {:?}",
                    line_number + 1,
                    line
                ));
            }

            let entry = lexicon.entry(word.to_string()).or_default();
            for tag in tags {
                if !entry.contains(&tag) {
                    entry.push(tag);
                }
            }
        }

        Ok(Self { lexicon })
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(anyhow!(
                "POS tagger lexicon not found: {}. Provide a Brill-format lexicon \
                 (`word TAG [TAG ...]` per line, Penn Treebank tags).",
                path.display()
            ));
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read POS lexicon: {}", path.display()))?;
        let tagger = Self::parse(&content)
            .with_context(|| format!("Failed to parse POS lexicon: {}", path.display()))?;
        info!(
            "Loaded POS lexicon with {} entries from {}",
            tagger.len(),
            path.display()
        );
        Ok(tagger)
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    fn best_tag(&self, word: &str) -> Option<&str> {
        self.lexicon
            .get(word)
            .and_then(|tags| tags.first())
            .map(String::as_str)
    }

    fn tag_word(&self, text: &str, sentence_start: bool) -> String {
        if let Some(tag) = self.best_tag(text) {
            return tag.to_string();
        }

        let lower = text.to_lowercase();
        let capitalized = starts_uppercase(text);

        if let Some(tag) = self.best_tag(&lower) {
            if capitalized && !sentence_start && is_open_class(tag) {
                return "NNP".to_string();
            }
            return tag.to_string();
        }

        // ALL-CAPS spelling of a Capitalized entry, e.g. "JOHN" for "John".
        if capitalized && text.chars().count() > 1 {
            if let Some(tag) = self.best_tag(&capitalize(&lower)) {
                return tag.to_string();
            }
        }

        unknown_word_tag(text)
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let mut tokens = Vec::new();
        let mut sentence_start = true;
        let mut previous_word: Option<String> = None;

        for token in tokenize(text) {
            let first = token.chars().next().unwrap_or(' ');

            let tag = if first.is_ascii_digit() || first.is_numeric() {
                "CD".to_string()
            } else if first.is_alphabetic() {
                self.tag_word(token, sentence_start)
            } else if is_apostrophe(first) && token.chars().count() > 1 {
                self.best_tag(&token.replace('\u{2019}', "'"))
                    .map(String::from)
                    .unwrap_or_else(|| clitic_tag(token))
            } else {
                punctuation_tag(token).to_string()
            };

            // Quotes and brackets do not move the sentence start.
            let keeps_sentence_start = is_bracket_or_quote(&tag);
            tokens.push(TaggedToken {
                text: token.to_string(),
                pos: UniversalPos::from_penn(&tag),
                tag,
                is_alpha: token.chars().all(char::is_alphabetic),
                sentence_start,
            });

            let ends_sentence = matches!(token, "." | "!" | "?")
                && !(token == "."
                    && previous_word
                        .as_deref()
                        .is_some_and(|w| ABBREVIATIONS.contains(&w.to_lowercase().as_str())));
            if !keeps_sentence_start {
                sentence_start = ends_sentence;
            }

            if first.is_alphabetic() {
                previous_word = Some(token.to_string());
            } else if ends_sentence {
                previous_word = None;
            }
        }

        tokens
    }
}

fn is_bracket_or_quote(tag: &str) -> bool {
    matches!(tag, "``" | "''" | "-LRB-" | "-RRB-")
}

fn starts_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Open-class tags may be promoted to proper nouns when capitalized mid-sentence.
fn is_open_class(tag: &str) -> bool {
    tag.starts_with("NN") || tag.starts_with("JJ") || tag.starts_with("VB")
}

fn unknown_word_tag(text: &str) -> String {
    if starts_uppercase(text) {
        return "NNP".to_string();
    }

    let lower = text.to_lowercase();
    let tag = if lower.ends_with("ly") {
        "RB"
    } else if lower.ends_with("ing") {
        "VBG"
    } else if lower.ends_with("ed") {
        "VBD"
    } else if lower.ends_with("ous") || lower.ends_with("ful") || lower.ends_with("able") {
        "JJ"
    } else if lower.ends_with('s') && !lower.ends_with("ss") {
        "NNS"
    } else {
        "NN"
    };
    tag.to_string()
}

fn clitic_tag(token: &str) -> String {
    let tag = match token.to_lowercase().replace('\u{2019}', "'").as_str() {
        "'s" => "POS",
        "'re" | "'ve" | "'m" => "VBP",
        "'ll" | "'d" => "MD",
        "'t" => "RB",
        _ => "XX",
    };
    tag.to_string()
}

fn punctuation_tag(token: &str) -> &'static str {
    match token {
        "." | "!" | "?" => ".",
        "," => ",",
        ":" | ";" | "-" | "\u{2013}" | "\u{2014}" | "\u{2026}" => ":",
        "(" | "[" | "{" => "-LRB-",
        ")" | "]" | "}" => "-RRB-",
        "\"" | "\u{201c}" | "`" => "``",
        "'" | "\u{201d}" | "\u{2019}" | "\u{2018}" => "''",
        "$" | "\u{20ac}" | "\u{a3}" | "\u{a5}" | "\u{20b9}" => "$",
        "#" => "#",
        _ => "SYM",
    }
}
