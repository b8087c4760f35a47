//! Error types for memory snapshot persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while saving or loading a memory snapshot.
#[derive(Error, Debug)]
pub enum MemoryError {
    /// The snapshot file could not be read.
    #[error("Failed to read memory snapshot at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The snapshot file (or its directory) could not be written.
    #[error("Failed to write memory snapshot at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The snapshot file is not a JSON object of string arrays.
    #[error("Failed to parse memory snapshot at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The in-process memory could not be serialized.
    #[error("Failed to serialize memory: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Type alias for Result with MemoryError.
pub type MemoryResult<T> = Result<T, MemoryError>;
