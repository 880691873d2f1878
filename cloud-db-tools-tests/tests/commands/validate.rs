//! Tests for the 'validate' command
//!
//! The validate command checks that every merged resource has connection
//! information.

use cloud_db_tools::validators::{validate_resources, ResourceConfiguration};
use serde_json::json;
use test_utils::{ConfigBuilder, MergedConfig, TestContext, ValidationResult, Validator};

#[test]
fn test_standard_resources_are_valid() {
    let config = ConfigBuilder::standard().build();

    let result = ResourceConfiguration::new(&config.merged).validate();
    assert_eq!(result, ValidationResult::Success);
}

#[test]
fn test_single_missing_connection() {
    let merged = MergedConfig::from_json(json!({
        "resource": {
            "a": { "connection": {} },
            "b": {},
            "c": { "connection": {} },
        }
    }))
    .unwrap();

    let result = validate_resources(&merged);
    assert_eq!(
        result.message(),
        Some("Variable RESOURCE_CONFIGURATION is not configured properly")
    );
    assert_eq!(
        result.suggestion(),
        Some("Add connection information to the following resources: b")
    );
}

#[test]
fn test_missing_connections_from_builder() {
    let config = ConfigBuilder::standard()
        .add_resource_without_connection("archive")
        .add_resource_without_connection("reporting")
        .build();

    let result = ResourceConfiguration::new(&config.merged).validate();
    assert!(!result.is_success());
    assert!(result
        .suggestion()
        .unwrap()
        .ends_with("resources: archive, reporting"));
}

#[test]
fn test_no_resources_is_valid() {
    let config = ConfigBuilder::new().build();
    assert!(validate_resources(&config.merged).is_success());
}

#[test]
fn test_validate_loaded_config_file() {
    let ctx = TestContext::new();
    let path = ctx.create_file(
        "config.toml",
        r#"
[resource.default.connection]
host = "db.internal"

[resource.checkout]
connection = "checkout"

[resource.sales]
engine = "mysql"
"#,
    );

    let config = cloud_db_tools::load_config(&path).unwrap();
    let result = ResourceConfiguration::new(&config.merged).validate();

    assert_eq!(
        result.suggestion(),
        Some("Add connection information to the following resources: sales")
    );
}
