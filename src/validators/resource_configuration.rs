//! Checks that every declared resource carries connection information

use super::{ValidationResult, Validator};
use crate::config::MergedConfig;
use serde_json::Value;

/// Deploy variable holding the resource section
pub const VAR_RESOURCE_CONFIGURATION: &str = "RESOURCE_CONFIGURATION";

/// Validator for the `RESOURCE_CONFIGURATION` variable
pub struct ResourceConfiguration<'a> {
    merged: &'a MergedConfig,
}

impl<'a> ResourceConfiguration<'a> {
    pub fn new(merged: &'a MergedConfig) -> Self {
        Self { merged }
    }
}

impl Validator for ResourceConfiguration<'_> {
    fn validate(&self) -> ValidationResult {
        validate_resources(self.merged)
    }
}

/// Report every resource without a `connection` entry
pub fn validate_resources(merged: &MergedConfig) -> ValidationResult {
    let wrong: Vec<&str> = merged
        .resources()
        .filter(|(_, data)| !has_connection(data))
        .map(|(name, _)| name.as_str())
        .collect();

    if wrong.is_empty() {
        return ValidationResult::success();
    }

    ValidationResult::error(
        format!("Variable {} is not configured properly", VAR_RESOURCE_CONFIGURATION),
        format!(
            "Add connection information to the following resources: {}",
            wrong.join(", ")
        ),
    )
}

// null counts as unset, an empty mapping does not
fn has_connection(data: &Value) -> bool {
    data.get(MergedConfig::KEY_CONNECTION)
        .is_some_and(|c| !c.is_null())
}
