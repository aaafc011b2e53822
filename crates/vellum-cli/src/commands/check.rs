//! Check command implementation.
//!
//! Validates the project without invoking the optimizer: package metadata is
//! readable and versioned, the profile sources exist, and the optimizer tool
//! is reachable on PATH.

use crate::cli::CheckArgs;
use crate::error::{CliError, Result};
use crate::ui;
use vellum_bundler::ProcessOptimizer;
use vellum_config::{VersionResolver, optimizer::MAIN_CONFIG_FILE};

/// Execute the check command.
pub async fn execute(args: CheckArgs) -> Result<()> {
    let version = VersionResolver::new(&args.cwd).resolve(None).await?;
    ui::success(&format!("package metadata ok (vellum {version})"));

    let main_config = args.cwd.join(MAIN_CONFIG_FILE);
    if !main_config.exists() {
        return Err(CliError::MissingProfileSources(main_config));
    }
    ui::success(&format!("profile sources ok ({})", main_config.display()));

    let tool = ProcessOptimizer::new(&args.cwd)
        .tool(&args.optimizer)
        .locate()?;
    ui::success(&format!("optimizer ok ({})", tool.display()));

    Ok(())
}
