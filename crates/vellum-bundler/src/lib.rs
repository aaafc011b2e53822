//! # vellum-bundler
//!
//! Build pipeline for the distributable vellum profile script.
//!
//! The heavy lifting — merging and minifying the AMD dependency graph — is
//! done by an external optimizer behind the [`Optimizer`] trait. This crate
//! orchestrates one build: resolve the version, invoke the optimizer, then
//! post-process its output (banner wrapping, source-map reference rewrite)
//! and write the two final artifacts.
//!
//! ## Quick Start
//!
//! ```no_run
//! use vellum_bundler::{BuildOptions, ProcessOptimizer, build};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), vellum_bundler::Error> {
//! let options = BuildOptions::new("builds/vellum-profile-doc.js").root(".");
//! let optimizer = ProcessOptimizer::new(".");
//! build(options, &optimizer).await?;
//! # Ok(()) }
//! ```

pub mod banner;
pub mod build;
pub mod optimizer;
pub mod postprocess;

// Re-export configuration types for library users
pub use vellum_config::{BuildOptions, ConfigError, OptimizeMode, OptimizerConfig, VersionResolver};

pub use build::build;
pub use optimizer::{Optimizer, OptimizerOutput, ProcessOptimizer};
pub use postprocess::{Finalizer, RewriteResult};

use std::path::PathBuf;

/// Error types for vellum-bundler operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from the configuration layer (options, version resolution).
    #[error(transparent)]
    Config(#[from] vellum_config::ConfigError),

    /// The external optimizer executable could not be located.
    #[error("optimizer '{tool}' not found in PATH")]
    OptimizerNotFound { tool: String, hint: String },

    /// The external optimizer ran and reported failure.
    #[error("optimizer exited with {status}: {stderr}")]
    OptimizerFailed { status: String, stderr: String },

    /// The optimizer reported success but an expected artifact is absent.
    #[error("optimizer did not produce {}", .0.display())]
    OptimizerOutputMissing(PathBuf),

    /// Output path cannot hold the profile script.
    #[error("invalid output path: {0}")]
    InvalidOutputPath(String),

    /// Writing a final artifact failed.
    #[error("write failure: {0}")]
    WriteFailure(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Build configuration could not be serialized for the optimizer.
    #[error("optimizer configuration error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for vellum-bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

impl miette::Diagnostic for Error {
    fn code(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        Some(Box::new(match self {
            Error::Config(_) => "CONFIG_ERROR",
            Error::OptimizerNotFound { .. } => "OPTIMIZER_NOT_FOUND",
            Error::OptimizerFailed { .. } => "OPTIMIZER_FAILED",
            Error::OptimizerOutputMissing(_) => "OPTIMIZER_OUTPUT_MISSING",
            Error::InvalidOutputPath(_) => "INVALID_OUTPUT_PATH",
            Error::WriteFailure(_) => "WRITE_FAILURE",
            Error::Io(_) => "IO_ERROR",
            Error::Json(_) => "JSON_ERROR",
        }))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        match self {
            Error::OptimizerNotFound { hint, .. } => Some(Box::new(hint.clone())),
            Error::OptimizerFailed { .. } => Some(Box::new(
                "Re-run with --verbose to see the full optimizer configuration.".to_string(),
            )),
            Error::InvalidOutputPath(path) => Some(Box::new(format!(
                "The output path '{}' must name a file, e.g. builds/vellum-profile-doc.js.",
                path
            ))),
            Error::WriteFailure(_) => Some(Box::new(
                "Check that the destination directory exists and is writable.".to_string(),
            )),
            _ => None,
        }
    }
}
