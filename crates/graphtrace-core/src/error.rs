//! Error types and exit codes for graphtrace
//!
//! The traversal engine itself never fails. Errors come from the
//! surfaces around it: reading graph files, loading configuration and
//! parsing command-line input.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unreadable or malformed graph file)

mod macros;

use thiserror::Error;

/// Exit codes for the graphtrace binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - empty or malformed graph input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur around a traversal run
#[derive(Error, Debug)]
pub enum GraphTraceError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: bfs, dfs, or dijkstra)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("graph input is empty")]
    EmptyGraph,

    #[error("parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphTraceError {
    /// Create an error for a malformed line of graph input
    pub fn parse(line: usize, reason: impl std::fmt::Display) -> Self {
        GraphTraceError::Parse {
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphTraceError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        GraphTraceError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphTraceError::UnknownFormat(_)
            | GraphTraceError::UnknownAlgorithm(_)
            | GraphTraceError::UsageError(_)
            | GraphTraceError::InvalidValue { .. } => ExitCode::Usage,

            GraphTraceError::EmptyGraph
            | GraphTraceError::Parse { .. }
            | GraphTraceError::NotFound { .. } => ExitCode::Data,

            GraphTraceError::Io(_)
            | GraphTraceError::Json(_)
            | GraphTraceError::Toml(_)
            | GraphTraceError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphTraceError::UnknownFormat(_) => "unknown_format",
            GraphTraceError::UnknownAlgorithm(_) => "unknown_algorithm",
            GraphTraceError::UsageError(_) => "usage_error",
            GraphTraceError::InvalidValue { .. } => "invalid_value",
            GraphTraceError::EmptyGraph => "empty_graph",
            GraphTraceError::Parse { .. } => "parse_error",
            GraphTraceError::NotFound { .. } => "not_found",
            GraphTraceError::Io(_) => "io_error",
            GraphTraceError::Json(_) => "json_error",
            GraphTraceError::Toml(_) => "toml_error",
            GraphTraceError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphtrace operations
pub type Result<T> = std::result::Result<T, GraphTraceError>;
