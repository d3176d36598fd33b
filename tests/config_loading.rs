// tests/config_loading.rs

use std::io::Write;

use tempfile::NamedTempFile;

use apibuilder_release::config::load_and_validate;
use apibuilder_release::driver::release_plan;
use apibuilder_release::errors::ReleaseError;
use apibuilder_release_test_utils::builders::ReleaseConfigBuilder;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn empty_release_section_yields_builtin_plan() {
    let file = write_config("[release]\n");
    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.plan(), release_plan());
    assert!(cfg.env().is_empty());
}

#[test]
fn full_file_is_loaded() {
    let file = write_config(
        r#"
[release]
project = "apibuilder-validation"
steps = ["dev tag", "sbt +test", "sbt +publish"]

[env]
SBT_OPTS = "-Xmx2g"
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.project(), "apibuilder-validation");
    assert_eq!(cfg.steps(), ["dev tag", "sbt +test", "sbt +publish"]);
    assert_eq!(cfg.env().get("SBT_OPTS").map(String::as_str), Some("-Xmx2g"));
}

#[test]
fn missing_release_section_is_a_parse_error_naming_the_file() {
    let file = write_config("[env]\nA = \"b\"\n");
    match load_and_validate(file.path()) {
        Err(ReleaseError::ParsePlan { path, .. }) => assert_eq!(path, file.path()),
        other => panic!("Expected ParsePlan, got: {:?}", other),
    }
}

#[test]
fn empty_step_list_is_an_invalid_plan() {
    let file = write_config("[release]\nsteps = []\n");
    match load_and_validate(file.path()) {
        Err(ReleaseError::InvalidPlan(msg)) => assert!(msg.contains("at least one step")),
        other => panic!("Expected InvalidPlan, got: {:?}", other),
    }
}

#[test]
fn empty_project_is_an_invalid_plan() {
    let raw = ReleaseConfigBuilder::new("").step("dev tag").build_raw();
    match apibuilder_release::config::ReleaseConfig::try_from(raw) {
        Err(ReleaseError::InvalidPlan(msg)) => assert!(msg.contains("must not be empty")),
        other => panic!("Expected InvalidPlan, got: {:?}", other),
    }
}

#[test]
fn missing_file_is_a_read_error() {
    match load_and_validate("/nonexistent/Release.toml") {
        Err(err @ ReleaseError::ReadPlan { .. }) => {
            assert!(err.to_string().contains("/nonexistent/Release.toml"));
        }
        other => panic!("Expected ReadPlan, got: {:?}", other),
    }
}

#[test]
fn builder_config_round_trips_into_plan() {
    let cfg = ReleaseConfigBuilder::new("apibuilder-commons")
        .step("dev tag")
        .step("sbt +publish")
        .env("CI", "true")
        .build();
    assert_eq!(cfg.plan(), release_plan());
}
