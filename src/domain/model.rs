use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One user entry. Keys keep their input order and unknown fields pass
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.data)
    }
}

/// Why an entry was left out of the artifact. None of these stop the run.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    MissingAge,
    InvalidAge { field: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Position in the normalized input sequence.
    pub index: usize,
    pub name: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            SkipReason::MissingAge => write!(f, "No age field found for user: {}", self.name),
            SkipReason::InvalidAge { field, value } => write!(
                f,
                "Invalid age value for user {} ({} = {})",
                self.name, field, value
            ),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    pub min_age: i64,
    pub input_count: usize,
    pub kept: Vec<Record>,
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub input_count: usize,
    pub kept_count: usize,
    pub skipped_count: usize,
    pub min_age: i64,
    pub output_path: String,
}
