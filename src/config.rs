//! TOML configuration for the curation driver.
//!
//! Every field is optional in the file; missing fields take the same defaults
//! as the command line. Command-line flags override the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::checks::DEFAULT_RARE_THRESHOLD;
use crate::curation::OutputFormat;
use crate::dataset::{DEFAULT_DATA_DIR, DEFAULT_URL};
use crate::resources::{FrequencyFormat, ResourcePaths};

/// Dataset file read by the curation driver.
pub const CURATION_FILENAME: &str = "JEOPARDY_QUESTIONS1.json";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_SAMPLE_SIZE: usize = 1000;
pub const DEFAULT_SEED: u64 = 42;
/// Resource directory, relative to the data directory.
pub const RESOURCES_DIR: &str = "resources";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurationConfig {
    pub dataset: DatasetSettings,
    pub curation: CurationSettings,
    pub resources: ResourceSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetSettings {
    pub url: String,
    pub data_dir: PathBuf,
    pub filename: String,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            filename: CURATION_FILENAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurationSettings {
    pub output_dir: PathBuf,
    pub sample_size: usize,
    pub format: OutputFormat,
    pub seed: u64,
    pub rare_threshold: f64,
}

impl Default for CurationSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sample_size: DEFAULT_SAMPLE_SIZE,
            format: OutputFormat::default(),
            seed: DEFAULT_SEED,
            rare_threshold: DEFAULT_RARE_THRESHOLD,
        }
    }
}

/// Resource files; unset paths resolve inside `<data_dir>/resources`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceSettings {
    pub dictionary: Option<PathBuf>,
    pub frequencies: Option<PathBuf>,
    pub frequency_format: FrequencyFormat,
    pub lexicon: Option<PathBuf>,
}

impl CurationConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn resource_paths(&self) -> ResourcePaths {
        let defaults = ResourcePaths::in_dir(self.dataset.data_dir.join(RESOURCES_DIR));
        ResourcePaths {
            dictionary: self
                .resources
                .dictionary
                .clone()
                .unwrap_or(defaults.dictionary),
            frequencies: self
                .resources
                .frequencies
                .clone()
                .unwrap_or(defaults.frequencies),
            frequency_format: self.resources.frequency_format,
            lexicon: self.resources.lexicon.clone().unwrap_or(defaults.lexicon),
        }
    }
}
