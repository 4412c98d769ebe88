//! Error types and exit codes for rutier
//!
//! Exit codes:
//! - 0: Success (including "no route found", which is a result, not an error)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown city, invalid map file, malformed network)

use std::path::PathBuf;

use thiserror::Error;

use crate::graph::network::MalformedGraphError;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error (2)
    Usage = 2,
    /// Data error (3)
    Data = 3,
}

#[derive(Error, Debug)]
pub enum RutierError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("city not on the map: {name}")]
    CityNotFound { name: String },

    #[error("invalid map file {path:?}: {reason}")]
    InvalidMapFile { path: PathBuf, reason: String },

    #[error(transparent)]
    MalformedGraph(#[from] MalformedGraphError),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("search interrupted")]
    Interrupted,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RutierError>;

impl RutierError {
    /// Map this error to the process exit code the CLI reports.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RutierError::UnknownFormat(_) | RutierError::UsageError(_) => ExitCode::Usage,

            RutierError::CityNotFound { .. }
            | RutierError::InvalidMapFile { .. }
            | RutierError::MalformedGraph(_) => ExitCode::Data,

            RutierError::Io(_)
            | RutierError::Json(_)
            | RutierError::Interrupted
            | RutierError::Other(_) => ExitCode::Failure,
        }
    }

    /// Stable identifier for the error kind, used in the JSON envelope.
    pub fn error_type(&self) -> &'static str {
        match self {
            RutierError::UnknownFormat(_) => "unknown_format",
            RutierError::UsageError(_) => "usage",
            RutierError::CityNotFound { .. } => "city_not_found",
            RutierError::InvalidMapFile { .. } => "invalid_map_file",
            RutierError::MalformedGraph(_) => "malformed_graph",
            RutierError::Io(_) => "io",
            RutierError::Json(_) => "json",
            RutierError::Interrupted => "interrupted",
            RutierError::Other(_) => "other",
        }
    }

    /// Machine-readable error envelope for `--format json` consumers.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        })
    }
}
