//! Bundle post-processing: source-map reference rewrite and artifact writes.
//!
//! The optimizer writes its bundle into a scratch location, so the
//! `sourceMappingURL` directive it embeds points at a scratch filename. The
//! post-processor rewrites that reference to the final map name, then writes
//! the banner-wrapped script and the raw source map side by side. Both
//! writes must succeed for the build to count as complete; there is no
//! rollback of the sibling on failure.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use path_clean::PathClean;
use regex::Regex;
use tracing::{debug, warn};

use crate::optimizer::OptimizerOutput;
use crate::{Error, Result, banner};

/// Suffix of every generated source-map file.
const MAP_SUFFIX: &str = ".build.js.map";

/// First `//# sourceMappingURL=<name>` directive in the script.
static SOURCE_MAP_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)//# sourceMappingURL=(\S+)").expect("valid directive regex"));

/// Outcome of the source-map reference rewrite.
#[derive(Debug, Clone)]
pub struct RewriteResult {
    /// Script text with the map reference rewritten (or untouched when no
    /// directive was present).
    pub script: String,
    /// Final name of the sibling map file.
    pub map_filename: String,
    /// Whether a `sourceMappingURL` directive was found.
    pub directive_found: bool,
}

/// Derive the sibling map filename for an output path.
///
/// The `.js` extension is stripped before appending the map suffix, so
/// `vellum-profile-doc.js` maps to `vellum-profile-doc.build.js.map`.
/// Returns `None` when the path has no filename component.
pub fn map_filename(out: &Path) -> Option<String> {
    let name = out.file_name()?.to_str()?;
    let stem = name.strip_suffix(".js").unwrap_or(name);
    Some(format!("{stem}{MAP_SUFFIX}"))
}

/// Rewrite the script's source-map reference to `map_filename`.
///
/// The filename captured from the first directive is replaced everywhere it
/// occurs in the text, not just on the directive line. A directive-less
/// script is left untouched and reported with `directive_found: false` — the
/// build continues with a script lacking a usable map reference.
pub fn rewrite_map_reference(script: String, map_filename: &str) -> RewriteResult {
    match SOURCE_MAP_DIRECTIVE
        .captures(&script)
        .and_then(|caps| caps.get(1))
    {
        Some(captured) => {
            let old = captured.as_str().to_string();
            debug!(old = %old, new = %map_filename, "rewriting source map reference");
            RewriteResult {
                script: script.replace(&old, map_filename),
                map_filename: map_filename.to_string(),
                directive_found: true,
            }
        }
        None => {
            warn!("optimized script has no sourceMappingURL directive; leaving it unmodified");
            RewriteResult {
                script,
                map_filename: map_filename.to_string(),
                directive_found: false,
            }
        }
    }
}

/// Writes the final build artifacts for one destination and version.
///
/// Construction fixes the build context (where the script goes, which
/// version gets stamped); [`Finalizer::finalize`] is later handed the actual
/// optimizer artifacts.
#[derive(Debug, Clone)]
pub struct Finalizer {
    out: PathBuf,
    map_path: PathBuf,
    map_filename: String,
    version: String,
}

impl Finalizer {
    /// Fix the destination and version for a build.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOutputPath`] when `out` has no filename
    /// component.
    pub fn new(out: impl Into<PathBuf>, version: impl Into<String>) -> Result<Self> {
        let out = out.into().clean();
        let map_filename = map_filename(&out)
            .ok_or_else(|| Error::InvalidOutputPath(out.display().to_string()))?;
        let map_path = out.parent().unwrap_or(Path::new("")).join(&map_filename);
        Ok(Self {
            out,
            map_path,
            map_filename,
            version: version.into(),
        })
    }

    /// Destination of the final profile script.
    pub fn out(&self) -> &Path {
        &self.out
    }

    /// Destination of the sibling source-map file.
    pub fn map_path(&self) -> &Path {
        &self.map_path
    }

    /// Wrap, rewrite, and write the optimizer artifacts.
    ///
    /// The script and map writes run concurrently; the operation succeeds
    /// only when both complete. Destination directories are not created
    /// here — a missing directory surfaces as a write failure.
    pub async fn finalize(&self, output: OptimizerOutput) -> Result<()> {
        let script = banner::compose(&self.version, &output.script);
        let rewritten = rewrite_map_reference(script, &self.map_filename);

        debug!(
            out = %self.out.display(),
            map = %self.map_path.display(),
            "writing build artifacts"
        );

        let write_script = async {
            tokio::fs::write(&self.out, rewritten.script.as_bytes())
                .await
                .map_err(|e| Error::WriteFailure(format!("{}: {e}", self.out.display())))
        };
        let write_map = async {
            tokio::fs::write(&self.map_path, output.source_map.as_bytes())
                .await
                .map_err(|e| Error::WriteFailure(format!("{}: {e}", self.map_path.display())))
        };
        tokio::try_join!(write_script, write_map)?;

        Ok(())
    }
}
