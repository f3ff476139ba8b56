//! Error types for roster loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors during roster loading
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse roster TOML in {path}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid roster in {path}: {reason}")]
    InvalidDefinition { path: PathBuf, reason: String },
}
