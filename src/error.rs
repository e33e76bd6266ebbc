//! Error types for the I/O edges of the simulator.
//!
//! Combat itself cannot fail; only loading configuration and writing logs can.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading or validating a battle config or unit roster.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse roster {path}: {source}")]
    Roster {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Failure while writing a battle log to disk.
#[derive(Debug, Error)]
pub enum LogSaveError {
    #[error("failed to serialize battle log: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write battle log to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
