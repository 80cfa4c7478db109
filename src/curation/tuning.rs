//! Choosing the rare-word threshold from labeled examples.
//!
//! Each candidate threshold is scored against questions whose expected
//! outcome is known; the threshold with the best F1 score wins.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A text with the expected detector outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledCase {
    pub text: String,
    pub expected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ThresholdMetrics {
    pub threshold: f64,
    pub true_positives: usize,
    pub true_negatives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Powers of ten from 1e-10 to 1e-2 plus intermediate values, ascending.
pub fn default_thresholds() -> Vec<f64> {
    let mut thresholds = vec![1e-10, 1e-9, 1e-8, 1e-7, 1e-6, 1e-5, 1e-4, 1e-3, 1e-2];
    thresholds.extend([5e-7, 1e-6, 5e-6, 1e-5, 5e-5, 1e-4, 5e-4, 1e-3, 5e-3, 1e-2]);
    thresholds.sort_by(f64::total_cmp);
    thresholds.dedup();
    thresholds
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

pub fn evaluate_threshold<F>(cases: &[LabeledCase], threshold: f64, detector: F) -> ThresholdMetrics
where
    F: Fn(&str, f64) -> bool,
{
    let mut metrics = ThresholdMetrics {
        threshold,
        ..Default::default()
    };

    for case in cases {
        match (detector(&case.text, threshold), case.expected) {
            (true, true) => metrics.true_positives += 1,
            (false, false) => metrics.true_negatives += 1,
            (true, false) => metrics.false_positives += 1,
            (false, true) => metrics.false_negatives += 1,
        }
    }

    let total = cases.len();
    metrics.accuracy = ratio(metrics.true_positives + metrics.true_negatives, total);
    metrics.precision = ratio(
        metrics.true_positives,
        metrics.true_positives + metrics.false_positives,
    );
    metrics.recall = ratio(
        metrics.true_positives,
        metrics.true_positives + metrics.false_negatives,
    );
    metrics.f1 = if metrics.precision + metrics.recall == 0.0 {
        0.0
    } else {
        2.0 * metrics.precision * metrics.recall / (metrics.precision + metrics.recall)
    };
    metrics
}

/// Scores every threshold, in the given order.
pub fn sweep_thresholds<F>(cases: &[LabeledCase], thresholds: &[f64], detector: F) -> Vec<ThresholdMetrics>
where
    F: Fn(&str, f64) -> bool,
{
    thresholds
        .iter()
        .map(|&threshold| evaluate_threshold(cases, threshold, &detector))
        .collect()
}

/// The highest-F1 entry; the earliest wins ties. `None` for an empty sweep.
pub fn best_threshold(results: &[ThresholdMetrics]) -> Option<ThresholdMetrics> {
    results.iter().fold(None, |best: Option<ThresholdMetrics>, metrics| match best {
        Some(current) if current.f1 >= metrics.f1 => Some(current),
        _ => Some(*metrics),
    })
}

pub fn find_best_threshold<F>(
    cases: &[LabeledCase],
    thresholds: &[f64],
    detector: F,
) -> Option<ThresholdMetrics>
where
    F: Fn(&str, f64) -> bool,
{
    best_threshold(&sweep_thresholds(cases, thresholds, detector))
}

/// Reads a JSON array of `{"text": ..., "expected": ...}` objects.
pub fn load_labeled_cases(path: &Path) -> Result<Vec<LabeledCase>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read labeled cases: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid labeled cases file: {}", path.display()))
}
