//! Configuration model for the external module optimizer.
//!
//! The optimizer is a black box on the other side of a process boundary: it
//! accepts a JSON configuration object and produces an optimized script plus
//! a source map. Everything in [`OptimizerConfig`] is pass-through — the
//! fields carry the optimizer's own semantics and are never reinterpreted
//! here. The scratch output location is an adapter concern and deliberately
//! not part of this model.

use serde::Serialize;

use crate::options::{BuildOptions, OptimizeMode};

/// Module resolution root of the profile sources, relative to the project root.
pub const BASE_URL: &str = "js";

/// Entry module of the distributable profile.
pub const PROFILE_MODULE: &str = "vellum-profile";

/// Shared loader configuration consumed by the optimizer.
pub const MAIN_CONFIG_FILE: &str = "js/vellum-profile.js";

/// Loader shim that is always merged into the profile.
const LOADER_SHIM: &str = "deps/require";

/// Options recognized by the external optimizer.
///
/// Serializes to the camelCase JSON object the optimizer expects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerConfig {
    /// Shared loader configuration locating the dependency graph entry point.
    pub main_config_file: String,

    /// Module resolution root.
    pub base_url: String,

    /// Name of the entry module to optimize.
    pub name: String,

    /// Minifier selection.
    pub optimize: OptimizeMode,

    /// Optimizer verbosity (0 = trace .. 4 = silent).
    pub log_level: u8,

    /// Extra modules to merge into the bundle.
    pub deps: Vec<String>,

    /// Inline text resources into the bundle.
    pub inline_text: bool,

    /// Keep license comments in the minified output. Always off: the
    /// optimizer rejects it in combination with source-map generation, and
    /// the post-processor re-adds the attribution banner itself.
    pub preserve_license_comments: bool,

    /// Emit strict-mode compatible output.
    pub use_strict: bool,

    /// Request a source map alongside the optimized script. Always on.
    pub generate_source_maps: bool,
}

impl OptimizerConfig {
    /// Assemble the optimizer configuration for one profile build.
    pub fn from_options(options: &BuildOptions) -> Self {
        let mut deps = vec![LOADER_SHIM.to_string()];
        deps.extend(options.extra_deps.iter().cloned());

        Self {
            main_config_file: MAIN_CONFIG_FILE.to_string(),
            base_url: BASE_URL.to_string(),
            name: PROFILE_MODULE.to_string(),
            optimize: options.optimize,
            log_level: options.log_level,
            deps,
            inline_text: true,
            preserve_license_comments: false,
            use_strict: true,
            generate_source_maps: true,
        }
    }
}
