use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::OptimizeArg;

/// Available vellum-build subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the distributable profile
    ///
    /// Runs the external module optimizer over the profile sources, wraps
    /// the result in the version banner, and writes the script plus its
    /// source map.
    Build(BuildArgs),

    /// Validate the project without building
    ///
    /// Checks that the package metadata, profile sources, and optimizer
    /// tool are all in place.
    Check(CheckArgs),
}

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Destination of the final profile script
    ///
    /// The source map lands next to it, named
    /// <basename-without-.js>.build.js.map. The destination directory must
    /// already exist.
    #[arg(short, long, value_name = "FILE")]
    pub out: PathBuf,

    /// Version to stamp into the banner
    ///
    /// Defaults to the "version" field of package.json at the project root.
    #[arg(long, value_name = "VERSION")]
    pub version: Option<String>,

    /// Minifier passed through to the optimizer
    #[arg(long, value_enum, default_value = "uglify")]
    pub optimize: OptimizeArg,

    /// Project root containing package.json and the js/ profile sources
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub cwd: PathBuf,

    /// Optimizer executable to invoke
    #[arg(long, default_value = "r.js", value_name = "TOOL")]
    pub optimizer: PathBuf,

    /// Optimizer verbosity, passed through unchanged (0 = trace .. 4 = silent)
    #[arg(long, default_value_t = 2, value_name = "LEVEL")]
    pub log_level: u8,

    /// Extra modules to merge into the profile
    #[arg(long = "include", value_name = "MODULE")]
    pub include: Vec<String>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Project root containing package.json and the js/ profile sources
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub cwd: PathBuf,

    /// Optimizer executable to look for
    #[arg(long, default_value = "r.js", value_name = "TOOL")]
    pub optimizer: PathBuf,
}
