// tests/error_handling.rs

use std::io::Write;

use tempfile::NamedTempFile;

use certseq::config::load_and_validate;
use certseq::errors::CertseqError;
use certseq::graph::DependencyGraph;

fn plan_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_valid_plan_preserves_item_order() {
    let file = plan_file(
        r#"
[[item]]
name = "B"
tags = ["server"]

[[item]]
name = "A"
depends = ["B"]
"#,
    );

    let plan = load_and_validate(file.path()).unwrap();
    let names: Vec<&str> = plan.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[test]
fn test_unknown_dependency_returns_config_error() {
    let file = plan_file(
        r#"
[[item]]
name = "A"
depends = ["NonExistent"]
"#,
    );

    match load_and_validate(file.path()) {
        Err(CertseqError::ConfigError(msg)) => {
            assert!(msg.contains("unknown dependency"));
            assert!(msg.contains("NonExistent"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_duplicate_name_returns_config_error() {
    let file = plan_file(
        r#"
[[item]]
name = "A"

[[item]]
name = "A"
"#,
    );

    match load_and_validate(file.path()) {
        Err(CertseqError::ConfigError(msg)) => {
            assert!(msg.contains("duplicate item name"));
            assert!(msg.contains("A"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_self_dependency_returns_config_error() {
    let file = plan_file(
        r#"
[[item]]
name = "A"
depends = ["A"]
"#,
    );

    match load_and_validate(file.path()) {
        Err(CertseqError::ConfigError(msg)) => {
            assert!(msg.contains("cannot depend on itself"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_empty_plan_returns_config_error() {
    let file = plan_file("");

    match load_and_validate(file.path()) {
        Err(CertseqError::ConfigError(msg)) => {
            assert!(msg.contains("at least one"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_plan_cycle_is_rejected_at_graph_construction() {
    // References are valid item names, so the loader accepts the plan; the
    // cycle is caught when the items are registered with the graph.
    let file = plan_file(
        r#"
[[item]]
name = "A"
depends = ["B"]

[[item]]
name = "B"
depends = ["A"]
"#,
    );

    let plan = load_and_validate(file.path()).unwrap();

    match DependencyGraph::from_plan(&plan) {
        Err(CertseqError::CycleDetected { item, via }) => {
            assert_eq!(item, "B");
            assert_eq!(via, "A");
        }
        other => panic!("Expected CycleDetected, got: {:?}", other),
    }
}

#[test]
fn test_malformed_toml_returns_toml_error() {
    let file = plan_file("[[item\nname=");

    match load_and_validate(file.path()) {
        Err(CertseqError::TomlError(_)) => {}
        Err(e) => panic!("Expected TomlError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_missing_file_returns_io_error() {
    match load_and_validate("/definitely/not/here/Plan.toml") {
        Err(CertseqError::IoError(_)) => {}
        Err(e) => panic!("Expected IoError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}
