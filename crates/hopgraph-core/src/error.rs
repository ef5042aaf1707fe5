//! Error types and exit codes for hopgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing graph file, malformed edge list, rejected graph input)

mod macros;

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the hopgraph CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing file, malformed edge list (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Rejections reported by the graph store.
///
/// A rejected call leaves the graph exactly as it was. Callers may treat
/// `DuplicateVertex` as a no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<K: fmt::Debug + fmt::Display> {
    #[error("vertex already exists: {0}")]
    DuplicateVertex(K),

    #[error("edge from {0} to itself is not allowed")]
    SelfLoop(K),

    #[error("vertex not in graph: {0}")]
    UnknownVertex(K),
}

impl<K: fmt::Debug + fmt::Display> GraphError<K> {
    /// The key the rejected call named
    pub fn key(&self) -> &K {
        match self {
            GraphError::DuplicateVertex(key)
            | GraphError::SelfLoop(key)
            | GraphError::UnknownVertex(key) => key,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            GraphError::DuplicateVertex(_) => "duplicate_vertex",
            GraphError::SelfLoop(_) => "self_loop",
            GraphError::UnknownVertex(_) => "unknown_vertex",
        }
    }
}

/// Errors that can occur during hopgraph operations
#[derive(Error, Debug)]
pub enum HopgraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("file not found: {path:?}")]
    FileNotFound { path: PathBuf },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("line {line}: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: GraphError<String>,
    },

    #[error(transparent)]
    Graph(#[from] GraphError<String>),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl HopgraphError {
    /// Create a parse error for the given 1-based line number
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        HopgraphError::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, error: impl fmt::Display) -> Self {
        HopgraphError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            HopgraphError::UnknownFormat(_) | HopgraphError::UsageError(_) => ExitCode::Usage,

            HopgraphError::FileNotFound { .. }
            | HopgraphError::Parse { .. }
            | HopgraphError::Rejected { .. }
            | HopgraphError::Graph(_) => ExitCode::Data,

            HopgraphError::Io(_)
            | HopgraphError::Json(_)
            | HopgraphError::Toml(_)
            | HopgraphError::FailedOperation { .. }
            | HopgraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            HopgraphError::UnknownFormat(_) => "unknown_format",
            HopgraphError::UsageError(_) => "usage_error",
            HopgraphError::FileNotFound { .. } => "file_not_found",
            HopgraphError::Parse { .. } => "parse_error",
            HopgraphError::Rejected { source, .. } => source.error_type(),
            HopgraphError::Graph(err) => err.error_type(),
            HopgraphError::Io(_) => "io_error",
            HopgraphError::Json(_) => "json_error",
            HopgraphError::Toml(_) => "toml_error",
            HopgraphError::FailedOperation { .. } => "failed_operation",
            HopgraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            HopgraphError::Parse { line, .. } | HopgraphError::Rejected { line, .. } => {
                error_obj["line"] = serde_json::json!(line);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for hopgraph operations
pub type Result<T> = std::result::Result<T, HopgraphError>;
