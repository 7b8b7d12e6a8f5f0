use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("JSON file not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid JSON format in {path}: {source}")]
    MalformedJson {
        path: String,
        source: serde_json::Error,
    },

    #[error("Unsupported JSON structure in {path}: {found}")]
    UnsupportedStructure { path: String, found: String },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing configuration key: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Structure,
    Output,
    Configuration,
}

impl FilterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FilterError::FileNotFound { .. }
            | FilterError::MalformedJson { .. }
            | FilterError::IoError(_) => ErrorCategory::Input,
            FilterError::UnsupportedStructure { .. } => ErrorCategory::Structure,
            FilterError::WriteError { .. } | FilterError::SerializationError(_) => {
                ErrorCategory::Output
            }
            FilterError::MissingConfigError { .. }
            | FilterError::InvalidConfigValueError { .. }
            | FilterError::ValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FilterError::FileNotFound { .. } => {
                "Check that the path is correct and the file was produced by an earlier step"
            }
            FilterError::MalformedJson { .. } => "Fix the JSON syntax of the input file",
            FilterError::UnsupportedStructure { .. } => {
                "Provide an array of records, an object with a \"users\" array, or a single record object"
            }
            FilterError::WriteError { .. } => {
                "Check that the output directory exists and is writable"
            }
            FilterError::IoError(_) => "Check file permissions and available disk space",
            FilterError::SerializationError(_) => "Inspect the records for unserializable values",
            FilterError::MissingConfigError { .. } => {
                "Add the minimum age to the configuration file"
            }
            FilterError::InvalidConfigValueError { .. } | FilterError::ValidationError { .. } => {
                "Correct the value and run again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not read input: {}", self),
            ErrorCategory::Structure => format!("Input has an unexpected shape: {}", self),
            ErrorCategory::Output => format!("Could not create JSON artifact: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }

    /// Every handled failure maps to the same process status.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
