//! Final script assembly.
//!
//! The distributable profile is the optimizer's output wrapped in a fixed
//! frame: strict-mode pragma, attribution banner carrying the version, the
//! runtime version property, the optimized body, and the activation
//! statement that boots the profile in the consuming page. The order is
//! load-bearing — the pragma must come first and the activation statement
//! last.

/// Opening pragma of every generated profile.
pub const STRICT_PRAGMA: &str = "\"use strict\";";

/// Trailing statement that triggers loading of the profile module.
pub const ACTIVATION_STATEMENT: &str = "require([\"vellum-profile\"]);";

/// Runtime property the version string is assigned to.
const VERSION_PROPERTY: &str = "window.vellumVersion";

/// Wrap an optimized script body in the distributable frame.
///
/// The version appears twice: once in the banner comment for humans, once
/// as a runtime property for the document pipeline to report.
pub fn compose(version: &str, body: &str) -> String {
    let mut script = String::with_capacity(body.len() + 512);
    script.push_str(STRICT_PRAGMA);
    script.push('\n');
    script.push_str(&format!(
        "/* vellum {version}\n\
         * A production toolchain for technical documents written in readable markup.\n\
         * Usage and license: https://github.com/vellum-doc/vellum\n\
         */\n"
    ));
    script.push_str(&format!("{VERSION_PROPERTY} = \"{version}\";\n"));
    script.push_str(body);
    if !body.ends_with('\n') {
        script.push('\n');
    }
    script.push_str(ACTIVATION_STATEMENT);
    script.push('\n');
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_pragma_and_ends_with_activation() {
        let script = compose("2.7.0", "define('x', [], function () {});");
        assert!(script.starts_with("\"use strict\";\n"));
        assert!(script.trim_end().ends_with(ACTIVATION_STATEMENT));
    }

    #[test]
    fn version_appears_in_banner_and_runtime_property() {
        let script = compose("2.7.0", "// body\n");
        assert!(script.contains("/* vellum 2.7.0"));
        assert!(script.contains("window.vellumVersion = \"2.7.0\";"));
    }

    #[test]
    fn body_is_embedded_verbatim() {
        let body = "define('a',[],function(){return 1;});\n";
        let script = compose("1.0.0", body);
        assert!(script.contains(body));
    }

    #[test]
    fn missing_trailing_newline_does_not_glue_activation_to_body() {
        let script = compose("1.0.0", "var x = 1;");
        assert!(script.contains("var x = 1;\nrequire([\"vellum-profile\"]);"));
    }
}
