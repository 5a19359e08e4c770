//! Error types for settings and catalog loading
//!
//! Navigation itself never fails: degenerate inputs are ignored. Errors only
//! come from the file-backed edges of the crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving carousel settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Autoplay period of zero would spin the timer
    #[error("Autoplay interval must be greater than zero")]
    ZeroInterval,

    /// File watcher could not be created
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors that can occur while reading a featured-path catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// IO error from std::io
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
