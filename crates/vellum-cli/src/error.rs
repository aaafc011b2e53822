//! Error handling for the vellum-build CLI.
//!
//! Command implementations return [`CliError`]; `main` converts the final
//! result into a miette report so failures render with codes and help text.

use std::path::PathBuf;

use miette::Report;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (metadata, invalid options)
    #[error("Configuration error: {0}")]
    Config(#[from] vellum_config::ConfigError),

    /// Build pipeline errors (optimizer, post-processing, writes)
    #[error(transparent)]
    Build(#[from] vellum_bundler::Error),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The profile sources expected by the optimizer are absent
    #[error("profile sources missing: {}", .0.display())]
    MissingProfileSources(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convert CliError to a miette Report.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        // The bundler error carries its own Diagnostic impl (code + help)
        CliError::Build(e) => Report::new(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        CliError::MissingProfileSources(path) => miette::miette!(
            help = "Run from the vellum checkout, or pass --cwd <dir>.",
            "profile sources missing: {} not found",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundler_errors_keep_their_diagnostic_code() {
        let err = CliError::Build(vellum_bundler::Error::InvalidOutputPath("/".to_string()));
        let report = cli_error_to_miette(err);
        assert!(format!("{report:?}").contains("INVALID_OUTPUT_PATH"));
    }

    #[test]
    fn config_errors_render_with_context() {
        let err = CliError::Config(vellum_config::ConfigError::InvalidValue(
            "explicit version must not be empty".to_string(),
        ));
        let report = cli_error_to_miette(err);
        assert!(report.to_string().contains("Configuration error"));
    }
}
