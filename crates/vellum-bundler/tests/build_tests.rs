use std::fs;
use std::sync::Mutex;

use async_trait::async_trait;
use tempfile::TempDir;

use vellum_bundler::banner::ACTIVATION_STATEMENT;
use vellum_bundler::{
    BuildOptions, Error, Optimizer, OptimizerConfig, OptimizerOutput, Result, build,
};

/// Scripted optimizer double. Records the configuration it was handed and
/// returns canned artifacts.
struct FakeOptimizer {
    script: String,
    source_map: String,
    seen_config: Mutex<Option<OptimizerConfig>>,
}

impl FakeOptimizer {
    fn new(script: &str, source_map: &str) -> Self {
        Self {
            script: script.to_string(),
            source_map: source_map.to_string(),
            seen_config: Mutex::new(None),
        }
    }
}

#[async_trait]
impl Optimizer for FakeOptimizer {
    async fn optimize(&self, config: &OptimizerConfig) -> Result<OptimizerOutput> {
        *self.seen_config.lock().unwrap() = Some(config.clone());
        Ok(OptimizerOutput {
            script: self.script.clone(),
            source_map: self.source_map.clone(),
        })
    }
}

fn project_with_version(version: &str) -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    fs::write(
        dir.path().join("package.json"),
        format!(r#"{{"name": "vellum", "version": "{version}"}}"#),
    )
    .expect("write package.json");
    dir
}

#[tokio::test]
async fn build_writes_script_and_sibling_map() {
    let project = project_with_version("2.7.0");
    let out_dir = TempDir::new().expect("out dir");
    let out = out_dir.path().join("vellum-profile-doc.js");

    let optimizer = FakeOptimizer::new(
        "define('core',[],function(){});\n//# sourceMappingURL=profile.js.map\n",
        r#"{"version":3,"sources":[]}"#,
    );

    build(
        BuildOptions::new(&out).root(project.path()),
        &optimizer,
    )
    .await
    .expect("build succeeds");

    let script = fs::read_to_string(&out).expect("script written");
    assert!(script.starts_with("\"use strict\";\n"));
    assert!(script.contains("window.vellumVersion = \"2.7.0\";"));
    assert!(script.contains("//# sourceMappingURL=vellum-profile-doc.build.js.map"));
    assert!(!script.contains("profile.js.map\n"));
    assert!(script.trim_end().ends_with(ACTIVATION_STATEMENT));

    let map = fs::read_to_string(out_dir.path().join("vellum-profile-doc.build.js.map"))
        .expect("map written next to the script");
    assert_eq!(map, r#"{"version":3,"sources":[]}"#);
}

#[tokio::test]
async fn explicit_version_builds_without_metadata() {
    // No package.json in this project root at all.
    let project = TempDir::new().expect("project dir");
    let out_dir = TempDir::new().expect("out dir");
    let out = out_dir.path().join("profile.js");

    let optimizer = FakeOptimizer::new("//# sourceMappingURL=x.map\n", "{}");

    build(
        BuildOptions::new(&out)
            .root(project.path())
            .version("9.9.9"),
        &optimizer,
    )
    .await
    .expect("explicit version skips metadata");

    let script = fs::read_to_string(&out).unwrap();
    assert!(script.contains("window.vellumVersion = \"9.9.9\";"));
}

#[tokio::test]
async fn missing_directive_degrades_to_a_warning() {
    let project = project_with_version("1.0.0");
    let out_dir = TempDir::new().expect("out dir");
    let out = out_dir.path().join("profile.js");

    let body = "define('core',[],function(){});\n";
    let optimizer = FakeOptimizer::new(body, "{}");

    build(BuildOptions::new(&out).root(project.path()), &optimizer)
        .await
        .expect("directive-less script still builds");

    // Body embedded byte-identically; only the frame was added.
    let script = fs::read_to_string(&out).unwrap();
    assert!(script.contains(body));
    assert!(!script.contains("sourceMappingURL"));

    // The map is still written; the script just doesn't reference it.
    assert!(out_dir.path().join("profile.build.js.map").exists());
}

#[tokio::test]
async fn captured_map_name_is_replaced_in_the_body_too() {
    let project = project_with_version("1.0.0");
    let out_dir = TempDir::new().expect("out dir");
    let out = out_dir.path().join("profile.js");

    let optimizer = FakeOptimizer::new(
        "var embedded = \"scratch.js.map\";\n//# sourceMappingURL=scratch.js.map\n",
        "{}",
    );

    build(BuildOptions::new(&out).root(project.path()), &optimizer)
        .await
        .unwrap();

    let script = fs::read_to_string(&out).unwrap();
    assert!(script.contains("var embedded = \"profile.build.js.map\";"));
    assert!(!script.contains("scratch.js.map"));
}

#[tokio::test]
async fn missing_destination_directory_fails_the_build() {
    let project = project_with_version("1.0.0");
    let out_dir = TempDir::new().expect("out dir");
    let out = out_dir.path().join("does-not-exist").join("profile.js");

    let optimizer = FakeOptimizer::new("//# sourceMappingURL=x.map\n", "{}");

    let err = build(BuildOptions::new(&out).root(project.path()), &optimizer)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::WriteFailure(_)));
    assert!(!out.exists());
}

#[tokio::test]
async fn orchestrator_always_requests_source_maps() {
    let project = project_with_version("1.0.0");
    let out_dir = TempDir::new().expect("out dir");
    let out = out_dir.path().join("profile.js");

    let optimizer = FakeOptimizer::new("//# sourceMappingURL=x.map\n", "{}");
    build(
        BuildOptions::new(&out)
            .root(project.path())
            .include(["plugins/highlight"]),
        &optimizer,
    )
    .await
    .unwrap();

    let config = optimizer.seen_config.lock().unwrap().take().expect("optimizer invoked");
    assert!(config.generate_source_maps);
    assert_eq!(config.name, "vellum-profile");
    assert_eq!(config.deps, vec!["deps/require", "plugins/highlight"]);
    assert!(!config.preserve_license_comments);
}

#[tokio::test]
async fn missing_metadata_without_explicit_version_fails() {
    let project = TempDir::new().expect("project dir");
    let out_dir = TempDir::new().expect("out dir");
    let out = out_dir.path().join("profile.js");

    let optimizer = FakeOptimizer::new("x", "{}");
    let err = build(BuildOptions::new(&out).root(project.path()), &optimizer)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    // The optimizer must never run when version resolution fails.
    assert!(optimizer.seen_config.lock().unwrap().is_none());
}
