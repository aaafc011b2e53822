//! Optimizer capability and its process-backed implementation.
//!
//! The module optimizer is an external collaborator: it accepts a
//! configuration object and asynchronously yields an optimized script plus a
//! source-map string. The [`Optimizer`] trait keeps that boundary explicit —
//! the orchestrator never knows whether it is talking to the real tool or a
//! test double.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::process::Command;
use tracing::debug;

use crate::{Error, Result};
use vellum_config::OptimizerConfig;

/// Artifacts produced by one optimizer invocation.
#[derive(Debug, Clone)]
pub struct OptimizerOutput {
    /// The optimized, merged script.
    pub script: String,
    /// The raw source-map text accompanying it.
    pub source_map: String,
}

/// A module optimizer injected at the build boundary.
#[async_trait]
pub trait Optimizer: Send + Sync {
    /// Run one optimization pass. Invoked exactly once per build.
    async fn optimize(&self, config: &OptimizerConfig) -> Result<OptimizerOutput>;
}

/// Runs the external optimizer executable in a scratch directory.
///
/// The configuration is serialized to JSON, pointed at a scratch output
/// location, and handed to the tool as `<tool> -o <config>`. The optimized
/// bundle and its `.map` sibling are read back into memory; the scratch
/// directory is discarded with the guard.
#[derive(Debug, Clone)]
pub struct ProcessOptimizer {
    tool: PathBuf,
    root: PathBuf,
}

impl ProcessOptimizer {
    /// Default optimizer executable looked up on PATH.
    pub const DEFAULT_TOOL: &'static str = "r.js";

    /// Create an optimizer that runs in `root` (the project directory the
    /// configuration's relative paths resolve against).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            tool: PathBuf::from(Self::DEFAULT_TOOL),
            root: root.into(),
        }
    }

    /// Override the optimizer executable.
    pub fn tool(mut self, tool: impl Into<PathBuf>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Locate the optimizer executable on PATH.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OptimizerNotFound`] when the tool is not installed.
    pub fn locate(&self) -> Result<PathBuf> {
        which::which(&self.tool).map_err(|_| Error::OptimizerNotFound {
            tool: self.tool.display().to_string(),
            hint: format!(
                "Install the optimizer (npm i -g requirejs) or point --optimizer at it; looked for '{}'.",
                self.tool.display()
            ),
        })
    }

    async fn read_artifact(path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|_| Error::OptimizerOutputMissing(path.to_path_buf()))
    }
}

#[async_trait]
impl Optimizer for ProcessOptimizer {
    async fn optimize(&self, config: &OptimizerConfig) -> Result<OptimizerOutput> {
        let tool = self.locate()?;

        let scratch = tempfile::tempdir()?;
        let bundle_path = scratch.path().join("profile.js");
        let map_path = scratch.path().join("profile.js.map");

        // The scratch output location is an adapter concern, so it is
        // injected here rather than modeled in OptimizerConfig.
        let mut build_config = serde_json::to_value(config)?;
        build_config["out"] = Value::String(bundle_path.display().to_string());

        let config_path = scratch.path().join("build.json");
        tokio::fs::write(&config_path, serde_json::to_vec_pretty(&build_config)?).await?;

        debug!(tool = %tool.display(), config = %config_path.display(), "invoking optimizer");
        let output = Command::new(&tool)
            .arg("-o")
            .arg(&config_path)
            .current_dir(&self.root)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::OptimizerFailed {
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        let script = Self::read_artifact(&bundle_path).await?;
        let source_map = Self::read_artifact(&map_path).await?;
        Ok(OptimizerOutput { script, source_map })
    }
}
