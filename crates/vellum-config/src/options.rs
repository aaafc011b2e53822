//! Caller-facing build options.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{ConfigError, Result};

/// Minifier selection passed through to the external optimizer.
///
/// The variants serialize to the identifiers the optimizer understands;
/// they are never reinterpreted on this side of the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizeMode {
    /// Standard minifier (the optimizer's default production setting).
    #[default]
    Uglify2,
    /// No minification. Useful for debugging the generated profile.
    None,
}

impl std::fmt::Display for OptimizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptimizeMode::Uglify2 => write!(f, "uglify2"),
            OptimizeMode::None => write!(f, "none"),
        }
    }
}

/// Configuration for one profile build invocation.
///
/// Use the builder methods for ergonomic construction, or fill the fields
/// directly for full control. Options are immutable once handed to the
/// orchestrator; a retry re-runs the whole build with a fresh value.
///
/// # Examples
///
/// ```
/// use vellum_config::{BuildOptions, OptimizeMode};
///
/// let options = BuildOptions::new("builds/vellum-profile-doc.js")
///     .version("2.7.0")
///     .optimize(OptimizeMode::None);
///
/// assert_eq!(options.version.as_deref(), Some("2.7.0"));
/// ```
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Destination path of the final profile script.
    ///
    /// The source map is always written next to it, named
    /// `<basename-without-.js>.build.js.map`.
    pub out: PathBuf,

    /// Version string stamped into the banner and the runtime property.
    ///
    /// When absent, the version is read from `package.json` at `root`.
    pub version: Option<String>,

    /// Minifier selection (default: [`OptimizeMode::Uglify2`]).
    pub optimize: OptimizeMode,

    /// Optimizer verbosity, passed through unchanged (default: 2).
    pub log_level: u8,

    /// Project root containing `package.json` and the `js/` profile sources
    /// (default: current directory).
    pub root: PathBuf,

    /// Extra modules merged into the profile in addition to the fixed
    /// dependency list.
    pub extra_deps: Vec<String>,
}

impl BuildOptions {
    /// Create options for writing the profile to `out`.
    pub fn new(out: impl Into<PathBuf>) -> Self {
        Self {
            out: out.into(),
            version: None,
            optimize: OptimizeMode::default(),
            log_level: 2,
            root: PathBuf::from("."),
            extra_deps: Vec::new(),
        }
    }

    /// Set an explicit version, skipping metadata resolution.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Select the minifier handed to the optimizer.
    pub fn optimize(mut self, mode: OptimizeMode) -> Self {
        self.optimize = mode;
        self
    }

    /// Set the optimizer's log level (0 = trace .. 4 = silent).
    pub fn log_level(mut self, level: u8) -> Self {
        self.log_level = level;
        self
    }

    /// Set the project root used for metadata and profile sources.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Add extra modules to include in the profile.
    pub fn include<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_deps.extend(deps.into_iter().map(Into::into));
        self
    }

    /// Validate the options before starting a build.
    ///
    /// An empty explicit version is not an error here: version resolution
    /// treats it as absent and falls back to the package metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `out` has no filename
    /// component.
    pub fn validate(&self) -> Result<()> {
        if self.out.file_name().is_none() {
            return Err(ConfigError::InvalidValue(format!(
                "output path has no filename: {}",
                self.out.display()
            )));
        }
        Ok(())
    }
}

/// Resolve a path relative to the project root.
///
/// Absolute paths are returned unchanged.
pub fn resolve_path(path: &Path, root: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_build() {
        let options = BuildOptions::new("builds/vellum-profile-doc.js");
        assert_eq!(options.optimize, OptimizeMode::Uglify2);
        assert_eq!(options.log_level, 2);
        assert!(options.version.is_none());
        assert!(options.extra_deps.is_empty());
        assert_eq!(options.root, PathBuf::from("."));
    }

    #[test]
    fn builder_overrides() {
        let options = BuildOptions::new("out.js")
            .version("3.1.4")
            .optimize(OptimizeMode::None)
            .log_level(0)
            .root("/srv/vellum")
            .include(["plugins/highlight"]);
        assert_eq!(options.version.as_deref(), Some("3.1.4"));
        assert_eq!(options.optimize, OptimizeMode::None);
        assert_eq!(options.log_level, 0);
        assert_eq!(options.root, PathBuf::from("/srv/vellum"));
        assert_eq!(options.extra_deps, vec!["plugins/highlight".to_string()]);
    }

    #[test]
    fn validate_rejects_bare_directory_out() {
        let options = BuildOptions::new("/");
        assert!(matches!(
            options.validate(),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn validate_accepts_empty_explicit_version() {
        // Resolution treats it as absent; not a validation failure.
        let options = BuildOptions::new("out.js").version("");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn optimize_mode_display_matches_optimizer_identifiers() {
        assert_eq!(OptimizeMode::Uglify2.to_string(), "uglify2");
        assert_eq!(OptimizeMode::None.to_string(), "none");
    }

    #[test]
    fn resolve_path_keeps_absolute() {
        let root = Path::new("/srv/vellum");
        assert_eq!(
            resolve_path(Path::new("/tmp/out.js"), root),
            PathBuf::from("/tmp/out.js")
        );
        assert_eq!(
            resolve_path(Path::new("builds/out.js"), root),
            PathBuf::from("/srv/vellum/builds/out.js")
        );
    }
}
