//! Registry with a fixed set of loggers.

use std::collections::HashMap;

use crate::levels::Level;
use crate::registry::{Logger, LoggerEntry, LoggerHandle, LoggerRegistry, RegistryKind};

/// Loggers created once at startup and never added or removed.
///
/// Reads need no locking; only the per-logger atomics are written.
#[derive(Debug)]
pub struct StaticRegistry {
    loggers: Vec<Logger>,
    index: HashMap<String, usize>,
    /// Threshold for event targets that match no logger.
    fallback: Level,
}

impl StaticRegistry {
    /// Create the registry. Duplicate names keep their first occurrence.
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>, level: Level) -> Self {
        let mut loggers = Vec::new();
        let mut index = HashMap::new();

        for name in names {
            if index.contains_key(name) {
                tracing::warn!(name = %name, "Duplicate logger name ignored");
                continue;
            }
            index.insert(name.to_string(), loggers.len());
            loggers.push(Logger::new(name, level));
        }

        Self {
            loggers,
            index,
            fallback: level,
        }
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }

    /// Logger whose name is the target or its longest `::`-delimited prefix.
    fn owner_of(&self, target: &str) -> Option<&Logger> {
        self.loggers
            .iter()
            .filter(|logger| {
                target
                    .strip_prefix(logger.name())
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
            })
            .max_by_key(|logger| logger.name().len())
    }
}

impl LoggerRegistry for StaticRegistry {
    fn kind(&self) -> RegistryKind {
        RegistryKind::Static
    }

    fn list_entries(&self) -> Vec<LoggerEntry> {
        self.loggers.iter().map(Logger::entry).collect()
    }

    fn resolve(&self, name: &str) -> Option<LoggerHandle<'_>> {
        self.index
            .get(name)
            .map(|&i| LoggerHandle::Borrowed(&self.loggers[i]))
    }

    fn set_all_levels(&self, level: Level) {
        for logger in &self.loggers {
            logger.set_level(level);
        }
    }

    fn effective_level(&self, target: &str) -> Level {
        self.owner_of(target)
            .map(Logger::level)
            .unwrap_or(self.fallback)
    }
}
