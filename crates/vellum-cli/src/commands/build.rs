//! Build command implementation.

use std::time::Instant;

use crate::cli::BuildArgs;
use crate::error::Result;
use crate::ui;
use vellum_bundler::{BuildOptions, ProcessOptimizer, postprocess};

/// Execute the build command.
///
/// # Build Process
///
/// 1. Assemble build options from the arguments
/// 2. Run the pipeline: version resolution, optimizer, post-processing
/// 3. Display a build summary with artifact sizes
pub async fn execute(args: BuildArgs) -> Result<()> {
    let start_time = Instant::now();

    tracing::debug!(?args, "build arguments");
    ui::info(&format!("Building profile: {}", args.out.display()));

    let mut options = BuildOptions::new(&args.out)
        .optimize(args.optimize.into())
        .log_level(args.log_level)
        .root(&args.cwd)
        .include(args.include.iter().cloned());
    options.version = args.version.clone();

    let optimizer = ProcessOptimizer::new(&args.cwd).tool(&args.optimizer);

    let spinner = ui::Spinner::new("Running module optimizer...");
    match vellum_bundler::build(options, &optimizer).await {
        Ok(()) => spinner.finish("Profile optimized"),
        Err(e) => {
            spinner.fail("Build failed");
            return Err(e.into());
        }
    }

    print_summary(&args);
    ui::success(&format!(
        "Build completed in {}",
        ui::format_duration(start_time.elapsed())
    ));

    Ok(())
}

/// Report the written artifacts and their sizes.
fn print_summary(args: &BuildArgs) {
    let artifact_line = |label: &str, path: &std::path::Path| {
        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        ui::info(&format!(
            "  {label}: {} ({})",
            path.display(),
            ui::format_size(size)
        ));
    };

    artifact_line("script", &args.out);
    if let Some(map_name) = postprocess::map_filename(&args.out) {
        let map_path = args
            .out
            .parent()
            .unwrap_or_else(|| std::path::Path::new(""))
            .join(map_name);
        artifact_line("map", &map_path);
    }
}
