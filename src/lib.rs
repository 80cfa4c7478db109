pub mod checks;
pub mod cli;
pub mod config;
pub mod curation;
pub mod dataset;
pub mod models;
pub mod resources;
pub mod utils;

pub use checks::{contains_non_english_and_words, contains_number, has_unusual_proper_nouns};
pub use config::CurationConfig;
pub use curation::{Classification, QuestionClassifier, classify};
pub use dataset::{Dataset, load_jeopardy_data};
pub use models::{Category, CurationSummary};
pub use resources::{LinguisticResources, ResourcePaths};
