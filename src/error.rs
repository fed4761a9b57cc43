//! Errors raised while parsing or applying a log level change.

use thiserror::Error;

/// Message for a request carrying more than one effective parameter.
pub const INVALID_PARAMETER_COUNT: &str = "invalid number of parameters";

/// Message for a bulk entry missing its name or its level.
pub const EMPTY_NAME_OR_LEVEL: &str = "empty logger name or empty logger level";

/// A rejected level change.
///
/// Every variant is request-scoped: a request that fails with any of these
/// leaves every logger exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangeError {
    /// Malformed request shape (parameter count, empty bulk entry halves).
    #[error("{0}")]
    InvalidArgument(&'static str),

    /// Level name outside the fixed vocabulary.
    #[error("unknown logger level '{0}'")]
    InvalidLevel(String),

    /// Logger name not present in the registry.
    #[error("unknown logger name '{0}'")]
    UnknownLogger(String),
}

impl ChangeError {
    /// Short label used for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            ChangeError::InvalidArgument(_) => "invalid_argument",
            ChangeError::InvalidLevel(_) => "invalid_level",
            ChangeError::UnknownLogger(_) => "unknown_logger",
        }
    }
}
