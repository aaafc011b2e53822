//! Logging infrastructure for the vellum-build CLI.
//!
//! Structured logging via the `tracing` ecosystem with verbosity flags and
//! `RUST_LOG` support.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Call once at program start, before any logging occurs.
///
/// # Verbosity Levels
///
/// 1. `--verbose`: DEBUG for vellum crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for vellum crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("vellum_bundler=debug,vellum_config=debug,vellum_cli=debug")
    } else if quiet {
        EnvFilter::new("vellum_bundler=error,vellum_config=error,vellum_cli=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("vellum_bundler=info,vellum_config=info,vellum_cli=info")
        })
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // tracing is global and can only be initialized once per process, so
    // these only verify that the filters themselves are well-formed.

    #[test]
    fn verbose_filter_is_valid() {
        let _filter = EnvFilter::new("vellum_bundler=debug,vellum_config=debug,vellum_cli=debug");
    }

    #[test]
    fn quiet_filter_is_valid() {
        let _filter = EnvFilter::new("vellum_bundler=error,vellum_config=error,vellum_cli=error");
    }
}
