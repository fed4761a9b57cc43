//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the admin
//! service. All types derive Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

use crate::levels::Level;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Admin HTTP listener.
    pub admin: AdminConfig,

    /// Logger registry settings.
    pub logging: LoggingConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Admin endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Bind address (e.g., "127.0.0.1:9901").
    pub bind_address: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:9901".to_string(),
        }
    }
}

/// Which registry backend to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RegistryKind {
    /// Fixed set of loggers declared in `loggers`.
    #[default]
    Static,
    /// Loggers created on demand for every event target.
    Dynamic,
}

impl RegistryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RegistryKind::Static => "static",
            RegistryKind::Dynamic => "dynamic",
        }
    }
}

/// Logger registry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Registry backend.
    pub registry: RegistryKind,

    /// Initial level of every logger, and of targets no logger owns.
    pub default_level: Level,

    /// Logger names registered at startup.
    pub loggers: Vec<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            registry: RegistryKind::Static,
            default_level: Level::Info,
            loggers: [
                "admin",
                "config",
                "connection",
                "http",
                "log_admin",
                "router",
                "runtime",
                "upstream",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log output format.
    pub format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
