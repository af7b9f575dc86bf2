//! Error types and exit codes for roadtrip
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including "no route found" for one-shot queries)
//! - 2: Usage error (bad flags/args, invalid configuration)
//! - 3: Data error (missing or malformed dataset, unknown location)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the roadtrip binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - dataset or location problems (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading a dataset or answering a query
#[derive(Error, Debug)]
pub enum RoadtripError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("dataset not found: {path:?}")]
    DatasetNotFound { path: PathBuf },

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("unknown location: {id}")]
    UnknownLocation { id: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl RoadtripError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RoadtripError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a record the loader could not accept
    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        RoadtripError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Create an error for a location absent from the graph
    pub fn unknown_location(id: impl Into<String>) -> Self {
        RoadtripError::UnknownLocation { id: id.into() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RoadtripError::UsageError(_) | RoadtripError::InvalidValue { .. } => ExitCode::Usage,

            RoadtripError::DatasetNotFound { .. }
            | RoadtripError::MalformedRecord { .. }
            | RoadtripError::UnknownLocation { .. } => ExitCode::Data,

            RoadtripError::Io(_)
            | RoadtripError::Csv(_)
            | RoadtripError::Toml(_)
            | RoadtripError::Json(_)
            | RoadtripError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RoadtripError::UsageError(_) => "usage_error",
            RoadtripError::InvalidValue { .. } => "invalid_value",
            RoadtripError::DatasetNotFound { .. } => "dataset_not_found",
            RoadtripError::MalformedRecord { .. } => "malformed_record",
            RoadtripError::UnknownLocation { .. } => "unknown_location",
            RoadtripError::Io(_) => "io_error",
            RoadtripError::Csv(_) => "csv_error",
            RoadtripError::Toml(_) => "toml_error",
            RoadtripError::Json(_) => "json_error",
            RoadtripError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            RoadtripError::MalformedRecord { line, .. } => {
                error_obj["line"] = serde_json::json!(line);
            }
            RoadtripError::UnknownLocation { id } => {
                error_obj["location"] = serde_json::json!(id);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for roadtrip operations
pub type Result<T> = std::result::Result<T, RoadtripError>;
