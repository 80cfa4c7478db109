use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Category;

/// Contents of `curation_summary_{timestamp}.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurationSummary {
    pub timestamp: String,
    pub total_questions_analyzed: usize,
    pub categories: BTreeMap<Category, CategorySummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub total_available: usize,
    pub samples_created: usize,
    pub percentage_of_total: f64,
}

impl CategorySummary {
    pub fn new(total_available: usize, samples_created: usize, total_questions: usize) -> Self {
        let percentage_of_total = if total_questions == 0 {
            0.0
        } else {
            total_available as f64 / total_questions as f64 * 100.0
        };
        Self {
            total_available,
            samples_created,
            percentage_of_total,
        }
    }
}
