//! The Jeopardy! question dataset.

pub mod download;
pub mod loader;
pub mod table;
#[cfg(test)]
mod table_test;

pub use loader::{
    DEFAULT_DATA_DIR, DEFAULT_FILENAME, DEFAULT_URL, DatasetProfile, load_jeopardy_data,
};
pub use table::{Dataset, QUESTION_COLUMN, Record};
