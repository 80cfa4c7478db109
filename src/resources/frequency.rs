//! Global word frequency table.
//!
//! Frequencies are occurrence rates in a large reference corpus: `1e-3` means
//! roughly one in every thousand running words. Lookups normalize the word
//! (NFC, lowercase) and unknown words have frequency `0.0`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use unicode_normalization::UnicodeNormalization;

/// How the value column of a frequency file is expressed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FrequencyFormat {
    /// Values are already occurrence rates.
    #[default]
    Proportion,
    /// Raw occurrence counts, normalized by their total.
    Count,
    /// Zipf scale: log10 of occurrences per billion words.
    Zipf,
}

#[derive(Debug, Clone, Default)]
pub struct WordFrequencyTable {
    frequencies: HashMap<String, f64>,
}

/// Lowercased NFC form used as the lookup key.
pub fn normalize_word(word: &str) -> String {
    word.nfc().collect::<String>().to_lowercase()
}

pub fn zipf_to_frequency(zipf: f64) -> f64 {
    10f64.powf(zipf - 9.0)
}

pub fn frequency_to_zipf(frequency: f64) -> f64 {
    if frequency <= 0.0 {
        0.0
    } else {
        frequency.log10() + 9.0
    }
}

impl WordFrequencyTable {
    /// Builds a table from `(word, rate)` pairs; duplicate words are summed.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut frequencies: HashMap<String, f64> = HashMap::new();
        for (word, rate) in pairs {
            *frequencies.entry(normalize_word(word.as_ref())).or_insert(0.0) += rate;
        }
        Self { frequencies }
    }

    /// Parses delimited `word<sep>value` lines (tab, comma or whitespace).
    ///
    /// Blank lines and `#` comments are skipped, as is a first line whose value
    /// column is not numeric (a header). Any later malformed line is an error.
    pub fn parse(content: &str, format: FrequencyFormat) -> Result<Self> {
        let mut pairs: Vec<(String, f64)> = Vec::new();
        let mut first_entry = true;

        for (line_number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let may_be_header = std::mem::replace(&mut first_entry, false);

            let Some((word, value)) = split_entry(line) else {
                return Err(anyhow!(
                    "Malformed frequency entry on line {}: {:?}",
                    line_number + 1,
                    line
                ));
            };

            let value: f64 = match value.parse() {
                Ok(v) => v,
                Err(_) if may_be_header => continue,
                Err(e) => {
                    return Err(anyhow!(
                        "Invalid frequency value on line {}: {:?} ({})",
                        line_number + 1,
                        value,
                        e
                    ));
                }
            };
            if !value.is_finite() || (format != FrequencyFormat::Zipf && value < 0.0) {
                warn!("Skipping out-of-range frequency for {:?}: {}", word, value);
                continue;
            }

            pairs.push((word.to_string(), value));
        }

        let pairs: Vec<(String, f64)> = match format {
            FrequencyFormat::Proportion => pairs,
            FrequencyFormat::Count => {
                let total: f64 = pairs.iter().map(|(_, count)| count).sum();
                if total > 0.0 {
                    pairs
                        .into_iter()
                        .map(|(word, count)| (word, count / total))
                        .collect()
                } else {
                    pairs
                }
            }
            FrequencyFormat::Zipf => pairs
                .into_iter()
                .map(|(word, zipf)| (word, zipf_to_frequency(zipf)))
                .collect(),
        };

        Ok(Self::from_pairs(pairs))
    }

    pub fn load(path: &Path, format: FrequencyFormat) -> Result<Self> {
        if !path.exists() {
            return Err(anyhow!(
                "Word frequency table not found: {}. Provide a delimited file of \
                 `word<TAB>value` lines ({} format).",
                path.display(),
                format
            ));
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read frequency table: {}", path.display()))?;
        let table = Self::parse(&content, format)
            .with_context(|| format!("Failed to parse frequency table: {}", path.display()))?;
        info!(
            "Loaded {} word frequencies from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Occurrence rate of `word`, `0.0` when the word is unknown.
    pub fn frequency(&self, word: &str) -> f64 {
        self.frequencies
            .get(&normalize_word(word))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn zipf_frequency(&self, word: &str) -> f64 {
        frequency_to_zipf(self.frequency(word))
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

fn split_entry(line: &str) -> Option<(&str, &str)> {
    for separator in ['\t', ','] {
        if let Some((word, value)) = line.split_once(separator) {
            let value = value.split(separator).next().unwrap_or("").trim();
            return Some((word.trim(), value));
        }
    }

    let mut fields = line.split_whitespace();
    let word = fields.next()?;
    let value = fields.next()?;
    Some((word, value))
}
