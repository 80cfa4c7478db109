//! In-memory table of question records.
//!
//! The dataset is a JSON array of flat objects. Records keep their key order;
//! the column list is the union of all keys in first-seen order, so a record
//! may lack some columns.

use std::borrow::Cow;

use anyhow::{Result, anyhow};
use serde_json::{Map, Value};

/// Column holding the question text.
pub const QUESTION_COLUMN: &str = "question";

pub type Record = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Dataset {
    pub fn new(rows: Vec<Record>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.iter().any(|column| column == key) {
                    columns.push(key.clone());
                }
            }
        }
        Self { columns, rows }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Builds a dataset from a JSON array of objects.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Array(items) = value else {
            return Err(anyhow!(
                "Expected a JSON array of question records, found {}",
                json_type_name(&value)
            ));
        };

        let rows = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                other => Err(anyhow!(
                    "Record {} is not a JSON object (found {})",
                    index,
                    json_type_name(&other)
                )),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(rows))
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// The question text of a row: empty when the row is out of range or the
    /// field is absent or null, stringified when it is not a string.
    pub fn question_text(&self, index: usize) -> Cow<'_, str> {
        match self.rows.get(index).and_then(|row| row.get(QUESTION_COLUMN)) {
            None | Some(Value::Null) => Cow::Borrowed(""),
            Some(Value::String(text)) => Cow::Borrowed(text.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    /// A row with every column present, absent cells filled with `null`.
    pub fn record(&self, index: usize) -> Option<Record> {
        let row = self.rows.get(index)?;
        Some(
            self.columns
                .iter()
                .map(|column| {
                    let value = row.get(column).cloned().unwrap_or(Value::Null);
                    (column.clone(), value)
                })
                .collect(),
        )
    }

    pub fn head(&self, n: usize) -> Vec<Record> {
        (0..n.min(self.len()))
            .filter_map(|index| self.record(index))
            .collect()
    }

    /// Percentage of absent or null cells per column, rounded to 2 decimals.
    pub fn missing_percentages(&self) -> Vec<(String, f64)> {
        self.columns
            .iter()
            .map(|column| {
                let missing = self
                    .rows
                    .iter()
                    .filter(|row| matches!(row.get(column), None | Some(Value::Null)))
                    .count();
                let percentage = if self.rows.is_empty() {
                    0.0
                } else {
                    missing as f64 / self.rows.len() as f64 * 100.0
                };
                (column.clone(), round_to(percentage, 2))
            })
            .collect()
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
