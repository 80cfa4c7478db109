//! Sorting questions into categories.

use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::checks::{contains_non_english_and_words, contains_number, has_unusual_proper_nouns};
use crate::dataset::Dataset;
use crate::models::Category;
use crate::resources::LinguisticResources;

/// Applies the three checks with a fixed set of resources.
pub struct QuestionClassifier {
    resources: LinguisticResources,
    rare_threshold: f64,
}

impl QuestionClassifier {
    pub fn new(resources: LinguisticResources, rare_threshold: f64) -> Self {
        Self {
            resources,
            rare_threshold,
        }
    }

    pub fn rare_threshold(&self) -> f64 {
        self.rare_threshold
    }

    pub fn resources(&self) -> &LinguisticResources {
        &self.resources
    }

    pub fn matches(&self, category: Category, text: &str) -> bool {
        match category {
            Category::Numbers => contains_number(text),
            Category::NonEnglish => contains_non_english_and_words(text, &self.resources.dictionary),
            Category::UnusualProperNouns => has_unusual_proper_nouns(
                text,
                self.resources.tagger.as_ref(),
                &self.resources.frequencies,
                self.rare_threshold,
            ),
        }
    }

    /// Every category `text` belongs to; none for blank text.
    pub fn categories(&self, text: &str) -> Vec<Category> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        Category::iter()
            .filter(|category| self.matches(*category, text))
            .collect()
    }
}

/// Row indices per category, each list in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub numbers: Vec<usize>,
    pub non_english: Vec<usize>,
    pub unusual_proper_nouns: Vec<usize>,
}

impl Classification {
    pub fn indices(&self, category: Category) -> &[usize] {
        match category {
            Category::Numbers => &self.numbers,
            Category::NonEnglish => &self.non_english,
            Category::UnusualProperNouns => &self.unusual_proper_nouns,
        }
    }

    fn push(&mut self, category: Category, index: usize) {
        match category {
            Category::Numbers => self.numbers.push(index),
            Category::NonEnglish => self.non_english.push(index),
            Category::UnusualProperNouns => self.unusual_proper_nouns.push(index),
        }
    }
}

/// Classifies the question text of every row in parallel.
pub fn classify(
    dataset: &Dataset,
    classifier: &QuestionClassifier,
    progress_bar: &ProgressBar,
) -> Classification {
    let matches: Vec<(usize, Vec<Category>)> = (0..dataset.len())
        .into_par_iter()
        .map(|index| {
            let categories = classifier.categories(&dataset.question_text(index));
            progress_bar.inc(1);
            (index, categories)
        })
        .collect();

    let mut classification = Classification::default();
    for (index, categories) in matches {
        for category in categories {
            classification.push(category, index);
        }
    }
    classification
}
