//! Linguistic resources used by the question checks.
//!
//! Three resources back the heuristics: a spell-check dictionary, a global
//! word frequency table and a part-of-speech tagger. They are loaded once and
//! shared read-only across classification threads.

pub mod frequency;
mod hunspell;
#[cfg(test)]
mod hunspell_test;
pub mod spelling;
#[cfg(test)]
mod spelling_test;
pub mod tagger;

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub use frequency::{FrequencyFormat, WordFrequencyTable};
pub use spelling::SpellDictionary;
pub use tagger::{LexiconTagger, PosTagger, TaggedToken, UniversalPos};

/// Where to find each resource on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourcePaths {
    /// Hunspell `.dic` (with sibling `.aff`) or a plain word list.
    pub dictionary: PathBuf,
    pub frequencies: PathBuf,
    #[serde(default)]
    pub frequency_format: FrequencyFormat,
    /// Brill-format POS lexicon.
    pub lexicon: PathBuf,
}

impl ResourcePaths {
    /// Default file names inside a resource directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            dictionary: dir.join("en_US.dic"),
            frequencies: dir.join("word_frequency_en.tsv"),
            frequency_format: FrequencyFormat::default(),
            lexicon: dir.join("pos_lexicon.txt"),
        }
    }
}

/// The loaded dictionary, frequency table and tagger.
pub struct LinguisticResources {
    pub dictionary: SpellDictionary,
    pub frequencies: WordFrequencyTable,
    pub tagger: Box<dyn PosTagger>,
}

impl LinguisticResources {
    pub fn new(
        dictionary: SpellDictionary,
        frequencies: WordFrequencyTable,
        tagger: Box<dyn PosTagger>,
    ) -> Self {
        Self {
            dictionary,
            frequencies,
            tagger,
        }
    }

    pub fn load(paths: &ResourcePaths) -> Result<Self> {
        let dictionary = SpellDictionary::load(&paths.dictionary)?;
        let frequencies = WordFrequencyTable::load(&paths.frequencies, paths.frequency_format)?;
        let tagger = LexiconTagger::load(&paths.lexicon)?;
        Ok(Self::new(dictionary, frequencies, Box::new(tagger)))
    }
}
