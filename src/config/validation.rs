//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check listener addresses parse
//! - Check logger names can be addressed through the admin API
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("logging.loggers: empty logger name")]
    EmptyLoggerName,

    #[error("logging.loggers: duplicate logger name '{0}'")]
    DuplicateLoggerName(String),

    #[error("logging.loggers: logger name '{0}' contains a reserved character")]
    ReservedCharacter(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "admin.bind_address", &config.admin.bind_address);
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    let mut seen = HashSet::new();
    for name in &config.logging.loggers {
        if name.is_empty() {
            errors.push(ValidationError::EmptyLoggerName);
        } else if name.contains(|c: char| c == ',' || c == '=' || c.is_whitespace()) {
            errors.push(ValidationError::ReservedCharacter(name.clone()));
        } else if !seen.insert(name.as_str()) {
            errors.push(ValidationError::DuplicateLoggerName(name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Log a warning for logger names that `paths=` cannot address.
///
/// Bulk entries split on their first `:`, so such loggers can only be
/// changed with the single-name form. Call after logging is initialized.
pub fn warn_ambiguous_names(config: &AppConfig) {
    for name in config.logging.loggers.iter().filter(|n| n.contains(':')) {
        tracing::warn!(name = %name, "Logger name contains ':'; bulk changes cannot address it");
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}
