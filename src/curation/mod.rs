//! Classification, sampling and output of curated subsets.

pub mod classify;
#[cfg(test)]
mod classify_test;
pub mod output;
pub mod sample;
pub mod tuning;

pub use classify::{Classification, QuestionClassifier, classify};
pub use output::{OutputFormat, save_samples, save_summary, timestamp};
pub use sample::{Samples, sample_categories, sample_indices};
pub use tuning::{LabeledCase, ThresholdMetrics, find_best_threshold};
