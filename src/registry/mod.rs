//! Logger registries.
//!
//! # Data Flow
//! ```text
//! LoggingConfig (at startup)
//!     → build() picks one backend
//!     → Arc<dyn LoggerRegistry> shared by the controller and the log filter
//!
//! Level change:
//!     controller → resolve(name) → LoggerHandle → set_level()
//!     controller → set_all_levels()
//!
//! Log event:
//!     RegistryFilter → effective_level(target)
//! ```
//!
//! # Backends
//! - `StaticRegistry`: membership fixed at construction, lock-free reads
//! - `DynamicRegistry`: grows at runtime, handles are `Arc<Logger>`

mod dynamic;
mod logger;
mod static_registry;

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::config::LoggingConfig;
use crate::levels::Level;

pub use crate::config::schema::RegistryKind;
pub use dynamic::DynamicRegistry;
pub use logger::{Logger, LoggerEntry};
pub use static_registry::StaticRegistry;

/// A resolved, mutable reference to a registry logger.
pub enum LoggerHandle<'a> {
    /// Borrowed from a registry whose membership never changes.
    Borrowed(&'a Logger),
    /// Shared ownership; stays valid while the table is modified elsewhere.
    Shared(Arc<Logger>),
}

impl Deref for LoggerHandle<'_> {
    type Target = Logger;

    fn deref(&self) -> &Logger {
        match self {
            LoggerHandle::Borrowed(logger) => logger,
            LoggerHandle::Shared(logger) => logger,
        }
    }
}

impl fmt::Debug for LoggerHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LoggerHandle").field(&self.name()).finish()
    }
}

/// An enumerable collection of named loggers.
pub trait LoggerRegistry: Send + Sync + fmt::Debug {
    /// Which backend this is.
    fn kind(&self) -> RegistryKind;

    /// Snapshot of every logger currently registered.
    fn list_entries(&self) -> Vec<LoggerEntry>;

    /// Look up a logger by exact name.
    fn resolve(&self, name: &str) -> Option<LoggerHandle<'_>>;

    /// Set the level of a previously resolved logger.
    fn set_level(&self, handle: &LoggerHandle<'_>, level: Level) {
        handle.set_level(level);
    }

    /// Set every current logger to `level`.
    fn set_all_levels(&self, level: Level);

    /// Threshold applied to log events emitted under `target`.
    fn effective_level(&self, target: &str) -> Level;
}

/// Build the registry selected by configuration.
pub fn build(config: &LoggingConfig) -> Arc<dyn LoggerRegistry> {
    let names = config.loggers.iter().map(String::as_str);
    match config.registry {
        RegistryKind::Static => Arc::new(StaticRegistry::new(names, config.default_level)),
        RegistryKind::Dynamic => {
            let registry = DynamicRegistry::new(config.default_level);
            for name in names {
                registry.register(name);
            }
            Arc::new(registry)
        }
    }
}
