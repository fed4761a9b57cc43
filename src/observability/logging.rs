//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Gate every event on the level of the registry logger owning its target
//!
//! # Design Decisions
//! - JSON format for production, text format for development
//! - Callsite interest is never cached, so level changes take effect at once
//! - Audit records bypass the registry so no level change can hide one

use std::sync::Arc;

use tracing::subscriber::Interest;
use tracing::Metadata;
use tracing_subscriber::layer::{Context, Filter, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::Layer;

use crate::config::schema::{LogFormat, ObservabilityConfig};
use crate::registry::LoggerRegistry;

/// Target of level-change audit records. Always recorded.
pub const AUDIT_TARGET: &str = "log_admin::audit";

/// Per-layer filter backed by a [`LoggerRegistry`].
#[derive(Debug, Clone)]
pub struct RegistryFilter {
    registry: Arc<dyn LoggerRegistry>,
}

impl RegistryFilter {
    pub fn new(registry: Arc<dyn LoggerRegistry>) -> Self {
        Self { registry }
    }

    /// Returns true if an event at `level` under `target` should be recorded.
    pub fn would_enable(&self, target: &str, level: &tracing::Level) -> bool {
        if target == AUDIT_TARGET {
            return true;
        }
        self.registry.effective_level(target).allows(level)
    }
}

impl<S> Filter<S> for RegistryFilter {
    fn enabled(&self, metadata: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        self.would_enable(metadata.target(), metadata.level())
    }

    fn callsite_enabled(&self, _metadata: &'static Metadata<'static>) -> Interest {
        Interest::sometimes()
    }
}

/// Install the global subscriber.
pub fn init_logging(
    config: &ObservabilityConfig,
    registry: Arc<dyn LoggerRegistry>,
) -> Result<(), TryInitError> {
    let filter = RegistryFilter::new(registry);

    match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().json().with_filter(filter))
            .try_init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_filter(filter))
            .try_init(),
    }
}
