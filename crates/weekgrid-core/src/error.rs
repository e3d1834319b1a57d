//! Core error types for weekgrid-core.
//!
//! This module defines the error hierarchy using thiserror. Each failure
//! class the grid can surface to a user has its own enum so callers can
//! match on what went wrong without string inspection.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for weekgrid-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Rejected input (titles, cell keys, colors)
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Malformed import payload
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Persistence read/write failure
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty titles must go through `remove`, never `set`.
    #[error("Event title must not be empty")]
    EmptyTitle,

    /// Unknown day name
    #[error("Unknown day '{0}' (expected one of sun, mon, tue, wed, thu, fri, sat)")]
    UnknownDay(String),

    /// Time string that is not HH:MM
    #[error("Malformed time '{0}' (expected HH:MM)")]
    MalformedTime(String),

    /// A well-formed time that is not on the 15-minute grid
    #[error("Time '{0}' is not a grid slot (15-minute steps from 00:00 to 24:00)")]
    OffGrid(String),

    /// Cell key that is not `{day}-{HH:MM}`
    #[error("Malformed cell id '{0}' (expected day-HH:MM, e.g. mon-09:00)")]
    MalformedCellId(String),

    /// Color outside the palette
    #[error("Unknown color '{0}'")]
    UnknownColor(String),
}

/// Import errors. The store is left untouched whenever one of these is returned.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Payload is neither the versioned document nor a bare mapping
    #[error("invalid format")]
    InvalidFormat,

    /// Payload is not JSON at all
    #[error("unparsable content: {0}")]
    Json(#[from] serde_json::Error),

    /// A key that is not a valid cell id
    #[error("invalid cell id '{key}': {source}")]
    InvalidKey {
        key: String,
        #[source]
        source: ValidationError,
    },

    /// An entry whose value fails validation
    #[error("invalid entry for '{key}': {source}")]
    InvalidEntry {
        key: String,
        #[source]
        source: ValidationError,
    },

    /// Only `.json` files are accepted
    #[error("unsupported file '{0}': choose a .json file")]
    UnsupportedFile(PathBuf),
}

/// Persistence errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the backing database
    #[error("Failed to open storage at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Storage directory could not be determined or created
    #[error("Storage directory unavailable: {0}")]
    DataDir(String),

    /// Read failed
    #[error("Storage read failed: {0}")]
    ReadFailed(String),

    /// Write failed (quota, lock, availability)
    #[error("Storage write failed: {0}")]
    WriteFailed(String),

    /// Stored payload could not be decoded
    #[error("Stored schedule data is corrupt: {0}")]
    Corrupt(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key not present in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
