//! Error types for configuration loading and version resolution.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Metadata file errors (version resolution)
    #[error("cannot read package metadata at {}: {source}", .path.display())]
    MetadataRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("package metadata at {} is not valid JSON: {source}", .path.display())]
    MetadataParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("package metadata at {} has no \"version\" string field", .0.display())]
    MissingVersion(PathBuf),

    // Option validation errors
    #[error("invalid build option: {0}")]
    InvalidValue(String),
}
