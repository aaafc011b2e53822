//! Build orchestration.
//!
//! One build is a strictly sequenced, fire-once operation: resolve the
//! version, fix the build context, run the optimizer, finalize. There is no
//! internal retry or timeout — a caller wanting another attempt invokes
//! [`build`] again in full, re-running the optimizer.

use tracing::info;

use crate::Result;
use crate::optimizer::Optimizer;
use crate::postprocess::Finalizer;
use vellum_config::{BuildOptions, OptimizerConfig, VersionResolver};

/// Build the distributable profile described by `options`.
///
/// Resolves the effective version (explicit, or from package metadata),
/// hands the assembled configuration to `optimizer`, and post-processes the
/// result into the final script and source-map files. The returned future
/// resolves only when both artifacts are on disk.
///
/// # Errors
///
/// Any failure — version resolution, optimizer invocation, artifact writes —
/// aborts the whole build. A missing source-map directive in the optimizer
/// output is the one degradation that only warns.
pub async fn build(options: BuildOptions, optimizer: &dyn Optimizer) -> Result<()> {
    options.validate().map_err(crate::Error::Config)?;

    let version = VersionResolver::new(&options.root)
        .resolve(options.version.as_deref())
        .await?;

    let finalizer = Finalizer::new(&options.out, &version)?;
    let config = OptimizerConfig::from_options(&options);

    info!(
        version = %version,
        out = %finalizer.out().display(),
        optimize = %options.optimize,
        "building profile"
    );

    let output = optimizer.optimize(&config).await?;
    finalizer.finalize(output).await
}
