//! Value enums for CLI arguments.

use clap::ValueEnum;
use vellum_config::OptimizeMode;

/// Minifier selection exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OptimizeArg {
    /// Standard minifier (production default).
    Uglify,
    /// No minification. Keeps the merged profile readable for debugging.
    None,
}

impl From<OptimizeArg> for OptimizeMode {
    fn from(arg: OptimizeArg) -> Self {
        match arg {
            OptimizeArg::Uglify => OptimizeMode::Uglify2,
            OptimizeArg::None => OptimizeMode::None,
        }
    }
}
