//! Configuration validators
//!
//! A validator inspects configuration and reports a [`ValidationResult`].
//! Failures are values, never errors: the caller decides how to present them.

pub mod resource_configuration;

pub use resource_configuration::{validate_resources, ResourceConfiguration};

use std::fmt;

/// Outcome of a validator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Success,
    Error {
        /// What is wrong
        message: String,
        /// How to fix it
        suggestion: String,
    },
}

impl ValidationResult {
    pub fn success() -> Self {
        Self::Success
    }

    pub fn error(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Error { message, .. } => Some(message.as_str()),
        }
    }

    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Error { suggestion, .. } => Some(suggestion.as_str()),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "Configuration is valid"),
            Self::Error { message, suggestion } => write!(f, "{}\n  {}", message, suggestion),
        }
    }
}

/// Something that can check configuration
pub trait Validator {
    fn validate(&self) -> ValidationResult;
}
