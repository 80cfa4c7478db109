//! Sweeps rare-word thresholds over labeled questions and reports the one
//! with the best F1 score.

use std::path::PathBuf;
use std::process;

use anyhow::{Result, bail};
use clap::Parser;
use log::info;

use jeopardy_curate::checks::has_unusual_proper_nouns;
use jeopardy_curate::curation::tuning::{
    ThresholdMetrics, best_threshold, default_thresholds, load_labeled_cases, sweep_thresholds,
};
use jeopardy_curate::resources::{FrequencyFormat, LinguisticResources, ResourcePaths};
use jeopardy_curate::utils::logging::init_logging;

#[derive(Parser, Debug)]
#[command(about = "Find the best unusual proper noun threshold")]
struct Args {
    /// JSON array of {"text": ..., "expected": ...} cases
    #[arg(long)]
    cases: PathBuf,

    /// Directory holding the default resource files
    #[arg(long, default_value = "data/resources")]
    resources_dir: PathBuf,

    #[arg(long)]
    dictionary: Option<PathBuf>,

    #[arg(long)]
    frequencies: Option<PathBuf>,

    #[arg(long)]
    frequency_format: Option<FrequencyFormat>,

    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Threshold to try; repeat for several. Defaults to a 1e-10..1e-2 sweep.
    #[arg(long = "threshold")]
    thresholds: Vec<f64>,
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let mut paths = ResourcePaths::in_dir(&args.resources_dir);
    if let Some(dictionary) = args.dictionary {
        paths.dictionary = dictionary;
    }
    if let Some(frequencies) = args.frequencies {
        paths.frequencies = frequencies;
    }
    if let Some(frequency_format) = args.frequency_format {
        paths.frequency_format = frequency_format;
    }
    if let Some(lexicon) = args.lexicon {
        paths.lexicon = lexicon;
    }

    let resources = LinguisticResources::load(&paths)?;
    let cases = load_labeled_cases(&args.cases)?;
    if cases.is_empty() {
        bail!("No labeled cases in {}", args.cases.display());
    }
    info!("Loaded {} labeled cases", cases.len());

    let thresholds = if args.thresholds.is_empty() {
        default_thresholds()
    } else {
        args.thresholds
    };

    println!("Trying different thresholds to find the best one (by F1 score)...");
    let results = sweep_thresholds(&cases, &thresholds, |text, threshold| {
        has_unusual_proper_nouns(
            text,
            resources.tagger.as_ref(),
            &resources.frequencies,
            threshold,
        )
    });
    for metrics in &results {
        print_metrics_line(metrics);
    }

    if let Some(best) = best_threshold(&results) {
        print_best(&best);
    }
    Ok(())
}

fn print_metrics_line(metrics: &ThresholdMetrics) {
    println!(
        "Threshold: {:.1e} | Acc: {:.3} | Prec: {:.3} | Rec: {:.3} | F1: {:.3} | FP: {} | FN: {}",
        metrics.threshold,
        metrics.accuracy,
        metrics.precision,
        metrics.recall,
        metrics.f1,
        metrics.false_positives,
        metrics.false_negatives
    );
}

fn print_best(best: &ThresholdMetrics) {
    println!("\nBest threshold: {:.1e}", best.threshold);
    println!("  Accuracy:  {:.3}", best.accuracy);
    println!("  Precision: {:.3}", best.precision);
    println!("  Recall:    {:.3}", best.recall);
    println!("  F1:        {:.3}", best.f1);
    println!("  FP:        {}", best.false_positives);
    println!("  FN:        {}", best.false_negatives);
}
