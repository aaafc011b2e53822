//! Command-line interface definition for vellum-build.
//!
//! The complete CLI structure, defined with clap v4 derive macros.
//!
//! # Command Structure
//!
//! - `vellum-build build` - Build the distributable profile script
//! - `vellum-build check` - Validate the project without building

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{BuildArgs, CheckArgs, Command};
pub use enums::*;

/// vellum-build - produces the distributable vellum profile
#[derive(Parser, Debug)]
#[command(
    name = "vellum-build",
    version,
    about = "Builds the distributable vellum profile script",
    long_about = "vellum-build merges and minifies the vellum AMD module graph into a single\n\
                  banner-wrapped profile script plus a source map, ready for publication."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
