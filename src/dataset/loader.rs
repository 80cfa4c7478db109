//! Locating, downloading and reading the Jeopardy! question dump.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use super::download::download_file;
use super::table::Dataset;

/// Public Google Drive copy of the 200,000+ question dump.
pub const DEFAULT_URL: &str = "https://drive.google.com/uc?id=0BwT5wj_P7BKXb2hfM3d2RHU1ckE";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_FILENAME: &str = "jeopardy_data.json";

/// Loads `data_dir/filename`, downloading it from `url` first when absent.
pub fn load_jeopardy_data(url: &str, data_dir: &Path, filename: &str) -> Result<Dataset> {
    let output = data_dir.join(filename);

    if !data_dir.exists() {
        info!(
            "Data directory {} does not exist. Creating it...",
            data_dir.display()
        );
        fs::create_dir_all(data_dir).with_context(|| {
            format!("Failed to create data directory: {}", data_dir.display())
        })?;
    }

    if !output.exists() {
        info!("File not found at {}. Downloading...", output.display());
        download_file(url, &output)?;
    } else {
        info!(
            "File already exists at {}. Skipping download.",
            output.display()
        );
    }

    info!("Reading JSON file...");
    let dataset = read_dataset(&output)?;
    info!("File read successfully as JSON.");

    DatasetProfile::of(&dataset).report();

    Ok(dataset)
}

pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Dataset::from_json_str(&content)
        .with_context(|| format!("Invalid JSON format in file {}", path.display()))
}

/// Shape, columns and missing-value percentages of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetProfile {
    pub shape: (usize, usize),
    pub columns: Vec<String>,
    pub missing_percentages: Vec<(String, f64)>,
}

impl DatasetProfile {
    pub fn of(dataset: &Dataset) -> Self {
        Self {
            shape: dataset.shape(),
            columns: dataset.columns().to_vec(),
            missing_percentages: dataset.missing_percentages(),
        }
    }

    /// Logs the profile line by line.
    pub fn report(&self) {
        for line in self.to_string().lines().filter(|line| !line.is_empty()) {
            info!("{}", line);
        }
    }
}

impl fmt::Display for DatasetProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shape: {:?}", self.shape)?;
        writeln!(f, "Columns: {:?}", self.columns)?;
        writeln!(f)?;
        writeln!(f, "Percentage of missing values per column:")?;
        let width = self
            .missing_percentages
            .iter()
            .map(|(column, _)| column.chars().count())
            .max()
            .unwrap_or(0);
        for (column, percentage) in &self.missing_percentages {
            writeln!(f, "{:<width$}  {:.2}", column, percentage, width = width)?;
        }
        Ok(())
    }
}
