use crate::domain::model::Record;
use crate::domain::ports::Storage;
use crate::utils::error::{FilterError, Result};
use serde_json::Value;

/// Key under which a wrapped document keeps its records.
pub const USERS_KEY: &str = "users";

/// The accepted top-level shapes of an input document.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Sequence(Vec<Record>),
    Wrapped(Vec<Record>),
    Single(Record),
}

impl Document {
    pub fn classify(value: Value, origin: &str) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(Document::Sequence(into_records(items, origin)?)),
            Value::Object(mut obj) => match obj.remove(USERS_KEY) {
                Some(Value::Array(items)) => Ok(Document::Wrapped(into_records(items, origin)?)),
                Some(other) => Err(FilterError::UnsupportedStructure {
                    path: origin.to_string(),
                    found: format!("\"{}\" holds {} instead of an array", USERS_KEY, kind_of(&other)),
                }),
                None => Ok(Document::Single(Record::new(obj))),
            },
            other => Err(FilterError::UnsupportedStructure {
                path: origin.to_string(),
                found: format!("top-level {}", kind_of(&other)),
            }),
        }
    }

    pub fn shape(&self) -> &'static str {
        match self {
            Document::Sequence(_) => "array of records",
            Document::Wrapped(_) => "object with a \"users\" array",
            Document::Single(_) => "single record",
        }
    }

    pub fn into_entries(self) -> Vec<Record> {
        match self {
            Document::Sequence(records) | Document::Wrapped(records) => records,
            Document::Single(record) => vec![record],
        }
    }
}

/// Every entry of a sequence must be a user object; the first one that is
/// not aborts the load.
fn into_records(items: Vec<Value>, origin: &str) -> Result<Vec<Record>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(data) => Ok(Record::new(data)),
            other => Err(FilterError::UnsupportedStructure {
                path: origin.to_string(),
                found: format!("entry #{} is a {}, not a user object", index, kind_of(&other)),
            }),
        })
        .collect()
}

pub fn parse_document(bytes: &[u8], origin: &str) -> Result<Document> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|source| FilterError::MalformedJson {
            path: origin.to_string(),
            source,
        })?;
    Document::classify(value, origin)
}

/// Reads `path` and returns its entries in input order.
pub async fn load_entries<S: Storage>(storage: &S, path: &str) -> Result<Vec<Record>> {
    let bytes = storage.read_file(path).await?;
    let document = parse_document(&bytes, path)?;
    tracing::debug!("{} parsed as {}", path, document.shape());
    Ok(document.into_entries())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
