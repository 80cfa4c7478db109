//! Writing sampled questions and the curation summary.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoEnumIterator};

use super::classify::Classification;
use super::sample::Samples;
use crate::dataset::{Dataset, Record};
use crate::models::{Category, CategorySummary, CurationSummary};

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// A single indented JSON array.
    Json,
    /// One compact JSON record per line.
    #[default]
    Jsonl,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }
}

/// Local time formatted for output file names.
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

pub fn sample_file_name(category: Category, timestamp: &str, format: OutputFormat) -> String {
    format!(
        "jeopardy_ner_{}_{}.{}",
        category,
        timestamp,
        format.extension()
    )
}

pub fn summary_file_name(timestamp: &str) -> String {
    format!("curation_summary_{}.json", timestamp)
}

pub fn write_records<W: Write>(records: &[Record], format: OutputFormat, mut writer: W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, records)?;
            writeln!(writer)?;
        }
        OutputFormat::Jsonl => {
            for record in records {
                serde_json::to_writer(&mut writer, record)?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Writes one file per non-empty category and returns their paths.
pub fn save_samples(
    samples: &Samples,
    dataset: &Dataset,
    outdir: &Path,
    format: OutputFormat,
    timestamp: &str,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for (category, indices) in samples {
        if indices.is_empty() {
            continue;
        }

        let records: Vec<Record> = indices
            .iter()
            .filter_map(|&index| dataset.record(index))
            .collect();
        let path = outdir.join(sample_file_name(*category, timestamp, format));
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        write_records(&records, format, BufWriter::new(file))
            .with_context(|| format!("Failed to write {}", path.display()))?;

        println!("Saved {} to {}", records.len(), path.display());
        written.push(path);
    }

    Ok(written)
}

pub fn build_summary(
    dataset: &Dataset,
    classification: &Classification,
    samples: &Samples,
    timestamp: &str,
) -> CurationSummary {
    let total = dataset.len();
    let categories = Category::iter()
        .map(|category| {
            let available = classification.indices(category).len();
            let sampled = samples.get(&category).map_or(0, Vec::len);
            (category, CategorySummary::new(available, sampled, total))
        })
        .collect();

    CurationSummary {
        timestamp: timestamp.to_string(),
        total_questions_analyzed: total,
        categories,
    }
}

pub fn save_summary(
    dataset: &Dataset,
    classification: &Classification,
    samples: &Samples,
    outdir: &Path,
    timestamp: &str,
) -> Result<PathBuf> {
    let summary = build_summary(dataset, classification, samples, timestamp);
    let path = outdir.join(summary_file_name(timestamp));
    let file =
        File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &summary)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer.flush()?;
    Ok(path)
}
