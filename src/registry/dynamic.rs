//! Registry that grows as new loggers appear at runtime.

use std::sync::Arc;

use dashmap::DashMap;

use crate::levels::Level;
use crate::observability::metrics;
use crate::registry::{Logger, LoggerEntry, LoggerHandle, LoggerRegistry, RegistryKind};

/// Fine-grained loggers keyed by name, created on first use.
///
/// Any thread may register a logger at any time. Resolved handles are
/// `Arc<Logger>`, so they survive concurrent inserts into the table.
#[derive(Debug)]
pub struct DynamicRegistry {
    loggers: DashMap<String, Arc<Logger>>,
    /// Level given to loggers registered after startup.
    default_level: Level,
}

impl DynamicRegistry {
    pub fn new(default_level: Level) -> Self {
        Self {
            loggers: DashMap::new(),
            default_level,
        }
    }

    /// Return the logger named `name`, creating it at the default level.
    pub fn register(&self, name: &str) -> Arc<Logger> {
        // Read path first; only take the shard write lock for new names.
        let existing = self.loggers.get(name).map(|entry| entry.value().clone());
        if let Some(logger) = existing {
            return logger;
        }

        let logger = self
            .loggers
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Logger::new(name, self.default_level)))
            .value()
            .clone();
        metrics::record_logger_count(self.loggers.len());
        logger
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

impl LoggerRegistry for DynamicRegistry {
    fn kind(&self) -> RegistryKind {
        RegistryKind::Dynamic
    }

    fn list_entries(&self) -> Vec<LoggerEntry> {
        let mut entries: Vec<LoggerEntry> =
            self.loggers.iter().map(|entry| entry.value().entry()).collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    fn resolve(&self, name: &str) -> Option<LoggerHandle<'_>> {
        self.loggers
            .get(name)
            .map(|entry| LoggerHandle::Shared(entry.value().clone()))
    }

    fn set_all_levels(&self, level: Level) {
        for entry in self.loggers.iter() {
            entry.value().set_level(level);
        }
    }

    fn effective_level(&self, target: &str) -> Level {
        self.register(target).level()
    }
}
