use crate::utils::error::{FilterError, Result};
use serde_json::Value;
use std::path::Path;

/// Accepted spellings of the minimum-age key, first match wins.
pub const AGE_MINIMUM_KEYS: [&str; 2] = ["ageMinimum", "age_minimum"];

/// Minimum age read from a JSON configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeConfig {
    pub age_minimum: i64,
    /// The spelling the value was found under.
    pub key: &'static str,
}

impl AgeConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let content = match std::fs::read(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FilterError::FileNotFound { path: origin })
            }
            Err(e) => return Err(FilterError::IoError(e)),
        };
        Self::from_json_slice(&content, &origin)
    }

    pub fn from_json_slice(content: &[u8], origin: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_slice(content).map_err(|source| FilterError::MalformedJson {
                path: origin.to_string(),
                source,
            })?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = value.as_object().ok_or_else(|| FilterError::ValidationError {
            message: "configuration must be a JSON object".to_string(),
        })?;

        let (key, raw) = AGE_MINIMUM_KEYS
            .iter()
            .find_map(|&key| match obj.get(key) {
                None | Some(Value::Null) => None,
                Some(raw) => Some((key, raw)),
            })
            .ok_or_else(|| FilterError::MissingConfigError {
                field: AGE_MINIMUM_KEYS.join(" or "),
            })?;

        let age_minimum = truncate_non_negative(raw).ok_or_else(|| {
            FilterError::InvalidConfigValueError {
                field: key.to_string(),
                value: raw.to_string(),
                reason: "must be a non-negative number".to_string(),
            }
        })?;

        Ok(Self { age_minimum, key })
    }
}

fn truncate_non_negative(raw: &Value) -> Option<i64> {
    let n = match raw {
        Value::Number(n) => n,
        _ => return None,
    };
    if let Some(i) = n.as_i64() {
        return (i >= 0).then_some(i);
    }
    let f = n.as_f64()?;
    if f.is_finite() && f >= 0.0 && f < i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}
