//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: BreakerConfig → Result<(), Vec<ValidationError>>

use std::fmt;

use crate::config::schema::BreakerConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a parsed configuration.
pub fn validate_config(config: &BreakerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let namespace = &config.keys.namespace;
    if namespace.is_empty() {
        errors.push(ValidationError {
            field: "keys.namespace",
            message: "must not be empty".into(),
        });
    } else if let Some(c) = namespace
        .chars()
        .find(|c| matches!(c, ':' | '*' | '?' | '[' | ']' | '\\') || c.is_whitespace())
    {
        errors.push(ValidationError {
            field: "keys.namespace",
            message: format!("contains reserved character {:?}", c),
        });
    }

    if config.logging.filter.trim().is_empty() {
        errors.push(ValidationError {
            field: "logging.filter",
            message: "must not be empty".into(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
