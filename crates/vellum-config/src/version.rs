//! Version resolution from package metadata.
//!
//! The version stamped into the distributable profile comes from one of two
//! places: an explicit string supplied by the caller, or the `version` field
//! of `package.json` at the project root. Explicit wins and performs no I/O,
//! so a build with `--version` works in a tree with no metadata at all.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Fixed, package-relative location of the project metadata.
const METADATA_FILE: &str = "package.json";

/// Resolves the effective version for a build.
///
/// # Example
///
/// ```no_run
/// use vellum_config::VersionResolver;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), vellum_config::ConfigError> {
/// let version = VersionResolver::new(".").resolve(None).await?;
/// # Ok(()) }
/// ```
pub struct VersionResolver {
    root: PathBuf,
}

impl VersionResolver {
    /// Create a resolver rooted at the directory containing `package.json`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path of the metadata file this resolver reads.
    pub fn metadata_path(&self) -> PathBuf {
        self.root.join(METADATA_FILE)
    }

    /// Resolve the effective version.
    ///
    /// A non-empty `explicit` value resolves immediately without touching the
    /// filesystem. Otherwise the metadata file is read and its `version`
    /// field returned.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MetadataRead`] when the metadata file is missing or
    ///   unreadable
    /// - [`ConfigError::MetadataParse`] when it is not valid JSON
    /// - [`ConfigError::MissingVersion`] when it lacks a `version` string
    pub async fn resolve(&self, explicit: Option<&str>) -> Result<String> {
        if let Some(version) = explicit.filter(|v| !v.is_empty()) {
            debug!(version, "using explicit version");
            return Ok(version.to_string());
        }

        let path = self.metadata_path();
        let content =
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| ConfigError::MetadataRead {
                    path: path.clone(),
                    source,
                })?;

        let metadata: Value =
            serde_json::from_str(&content).map_err(|source| ConfigError::MetadataParse {
                path: path.clone(),
                source,
            })?;

        let version = metadata
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| ConfigError::MissingVersion(path.clone()))?;

        debug!(version, path = %path.display(), "resolved version from metadata");
        Ok(version.to_string())
    }
}
