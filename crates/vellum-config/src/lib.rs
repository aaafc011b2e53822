//! # vellum-config
//!
//! Configuration layer for the vellum profile build pipeline.
//!
//! This crate owns the value types that describe a build: the caller-facing
//! [`BuildOptions`], the serializable [`OptimizerConfig`] handed to the
//! external module optimizer, and the [`VersionResolver`] that determines
//! which version string gets stamped into the distributable profile.
//!
//! ## Example
//!
//! ```no_run
//! use vellum_config::{BuildOptions, OptimizeMode, VersionResolver};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), vellum_config::ConfigError> {
//! let options = BuildOptions::new("builds/vellum-profile-doc.js")
//!     .optimize(OptimizeMode::None)
//!     .log_level(0);
//!
//! let version = VersionResolver::new(&options.root)
//!     .resolve(options.version.as_deref())
//!     .await?;
//! println!("building vellum {version}");
//! # Ok(()) }
//! ```

pub mod error;
pub mod optimizer;
pub mod options;
pub mod version;

// Re-export main types
pub use error::{ConfigError, Result};
pub use optimizer::OptimizerConfig;
pub use options::{BuildOptions, OptimizeMode};
pub use version::VersionResolver;
