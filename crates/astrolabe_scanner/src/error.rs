//! # Scanner Error Types
//!
//! Generation cannot fail. Everything here is configuration or I/O.

use std::io;
use std::path::PathBuf;

use astrolabe_procedural::ProceduralError;
use thiserror::Error;

/// Errors that can occur while scanning or (de)serializing a catalog.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Worker count below one.
    #[error("worker count must be at least 1, got {0}")]
    InvalidWorkers(usize),

    /// Scan configuration is out of range.
    #[error("invalid scan configuration: {0}")]
    InvalidConfig(String),

    /// Universe configuration or key lookup failed.
    #[error(transparent)]
    Procedural(#[from] ProceduralError),

    /// The output target could not be created or written.
    #[error("cannot write {}: {source}", path.display())]
    Output {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An input file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Input {
        /// Source path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A catalog line is malformed.
    #[error("catalog line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What is wrong with it.
        message: String,
    },

    /// A settings file is not valid TOML for [`crate::Settings`].
    #[error("invalid settings: {0}")]
    Settings(#[from] toml::de::Error),

    /// JSON export failed.
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Any other I/O failure on an already-open stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for scanner operations.
pub type ScanResult<T> = Result<T, ScanError>;
