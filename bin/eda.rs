//! Downloads the Jeopardy! dataset if needed and prints basic statistics.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use serde_json::Value;

use jeopardy_curate::dataset::{
    DEFAULT_DATA_DIR, DEFAULT_FILENAME, DEFAULT_URL, Dataset, load_jeopardy_data,
};
use jeopardy_curate::utils::logging::init_logging;

const HEAD_ROWS: usize = 5;
const MAX_CELL_CHARS: usize = 40;

#[derive(Parser, Debug)]
#[command(author, version, about = "Download and load Jeopardy data", long_about = None)]
struct Args {
    /// Google Drive URL
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// Data directory
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// JSON filename
    #[arg(long, default_value = DEFAULT_FILENAME)]
    filename: String,
}

fn main() {
    init_logging();
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("Failed to load Jeopardy data: {:#}", err);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let dataset = load_jeopardy_data(&args.url, &args.data_dir, &args.filename)?;

    println!("\nFirst {} rows of the data:", HEAD_ROWS);
    print_head(&dataset, HEAD_ROWS);
    println!("\nData loaded! Total questions: {}", dataset.len());
    Ok(())
}

fn print_head(dataset: &Dataset, rows: usize) {
    let columns = dataset.columns();
    let table: Vec<Vec<String>> = dataset
        .head(rows)
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| cell(record.get(column).unwrap_or(&Value::Null)))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            table
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(column.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let index_width = rows.saturating_sub(1).to_string().len();
    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(column, width)| format!("{:<width$}", column, width = *width))
        .collect();
    println!("{:index_width$}  {}", "", header.join("  "), index_width = index_width);

    for (index, row) in table.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(value, width)| format!("{:<width$}", value, width = *width))
            .collect();
        println!("{:<index_width$}  {}", index, cells.join("  "), index_width = index_width);
    }
}

fn cell(value: &Value) -> String {
    let text = match value {
        Value::Null => "None".to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    if text.chars().count() > MAX_CELL_CHARS {
        let truncated: String = text.chars().take(MAX_CELL_CHARS - 3).collect();
        format!("{}...", truncated)
    } else {
        text
    }
}
