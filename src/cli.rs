use std::path::PathBuf;

use clap::Parser;

use crate::config::CurationConfig;
use crate::curation::OutputFormat;
use crate::resources::FrequencyFormat;

/// Curate Jeopardy! questions into NER validation subsets: questions with
/// numbers, non-English words and unusual proper nouns.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file; flags given here take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Raw data directory [default: data]
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Output directory [default: output]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Examples per category [default: 1000]
    #[arg(long)]
    pub sample_size: Option<usize>,

    /// Output format [default: jsonl]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Random seed for sampling [default: 42]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Dataset download URL
    #[arg(long)]
    pub url: Option<String>,

    /// Dataset file name inside the data directory [default: JEOPARDY_QUESTIONS1.json]
    #[arg(long)]
    pub filename: Option<String>,

    /// Global frequency below which a proper noun is unusual [default: 1e-6]
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Hunspell .dic file (with sibling .aff) or plain word list
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Word frequency table
    #[arg(long)]
    pub frequencies: Option<PathBuf>,

    /// Value column of the frequency table: proportion, count or zipf
    #[arg(long)]
    pub frequency_format: Option<FrequencyFormat>,

    /// Brill-format POS lexicon
    #[arg(long)]
    pub lexicon: Option<PathBuf>,
}

impl Cli {
    /// Overrides `config` with every flag given on the command line.
    pub fn apply_to(&self, config: &mut CurationConfig) {
        if let Some(data_dir) = &self.data_dir {
            config.dataset.data_dir = data_dir.clone();
        }
        if let Some(url) = &self.url {
            config.dataset.url = url.clone();
        }
        if let Some(filename) = &self.filename {
            config.dataset.filename = filename.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.curation.output_dir = output_dir.clone();
        }
        if let Some(sample_size) = self.sample_size {
            config.curation.sample_size = sample_size;
        }
        if let Some(format) = self.format {
            config.curation.format = format;
        }
        if let Some(seed) = self.seed {
            config.curation.seed = seed;
        }
        if let Some(threshold) = self.threshold {
            config.curation.rare_threshold = threshold;
        }
        if let Some(dictionary) = &self.dictionary {
            config.resources.dictionary = Some(dictionary.clone());
        }
        if let Some(frequencies) = &self.frequencies {
            config.resources.frequencies = Some(frequencies.clone());
        }
        if let Some(frequency_format) = self.frequency_format {
            config.resources.frequency_format = frequency_format;
        }
        if let Some(lexicon) = &self.lexicon {
            config.resources.lexicon = Some(lexicon.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "jeopardy-curate",
            "--data-dir",
            "/tmp/data",
            "--sample-size",
            "10",
            "--format",
            "json",
            "--frequency-format",
            "zipf",
        ])
        .expect("valid flags");

        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/data")));
        assert_eq!(cli.sample_size, Some(10));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.frequency_format, Some(FrequencyFormat::Zipf));
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["jeopardy-curate", "--format", "csv"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = CurationConfig::from_toml_str(
            "[curation]\nsample_size = 50\nseed = 7\n\n[dataset]\nfilename = \"questions.json\"\n",
        )
        .expect("valid config");
        let cli = Cli {
            sample_size: Some(5),
            threshold: Some(1e-5),
            ..Default::default()
        };

        cli.apply_to(&mut config);

        assert_eq!(config.curation.sample_size, 5);
        assert_eq!(config.curation.seed, 7);
        assert_eq!(config.curation.rare_threshold, 1e-5);
        assert_eq!(config.dataset.filename, "questions.json");
    }
}
