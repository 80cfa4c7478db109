use std::fs;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use jeopardy_curate::cli::Cli;
use jeopardy_curate::config::CurationConfig;
use jeopardy_curate::curation::{
    QuestionClassifier, classify, sample_categories, save_samples, save_summary, timestamp,
};
use jeopardy_curate::dataset::load_jeopardy_data;
use jeopardy_curate::resources::LinguisticResources;
use jeopardy_curate::utils::logging::init_logging;
use jeopardy_curate::utils::progress::create_progress_bar;

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => CurationConfig::load(path)?,
        None => CurationConfig::default(),
    };
    cli.apply_to(&mut config);

    let outdir = &config.curation.output_dir;
    fs::create_dir_all(outdir)
        .with_context(|| format!("Failed to create output directory: {}", outdir.display()))?;

    let dataset = load_jeopardy_data(
        &config.dataset.url,
        &config.dataset.data_dir,
        &config.dataset.filename,
    )?;

    let resources = LinguisticResources::load(&config.resource_paths())?;
    let classifier = QuestionClassifier::new(resources, config.curation.rare_threshold);

    let progress_bar = create_progress_bar(dataset.len(), "Classifying");
    let classification = classify(&dataset, &classifier, &progress_bar);
    progress_bar.finish_and_clear();
    info!(
        "Classified {} questions: {} with numbers, {} with non-English words, {} with unusual proper nouns",
        dataset.len(),
        classification.numbers.len(),
        classification.non_english.len(),
        classification.unusual_proper_nouns.len()
    );

    let mut rng = StdRng::seed_from_u64(config.curation.seed);
    let samples = match sample_categories(&classification, config.curation.sample_size, &mut rng) {
        Ok(samples) => samples,
        Err(err) => {
            eprintln!("{:#}", err);
            process::exit(1);
        }
    };

    let timestamp = timestamp();
    save_samples(
        &samples,
        &dataset,
        outdir,
        config.curation.format,
        &timestamp,
    )?;
    save_summary(&dataset, &classification, &samples, outdir, &timestamp)?;

    println!(
        "\nCuration complete! Check {} for output files.",
        outdir.display()
    );
    Ok(())
}
