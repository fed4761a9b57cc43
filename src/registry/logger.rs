//! A single named logger.

use std::sync::atomic::{AtomicU8, Ordering};

use serde::Serialize;

use crate::levels::Level;

/// A named logger and its current threshold.
///
/// The level lives in an atomic so the logging filter can read it on every
/// event while the admin layer writes it.
#[derive(Debug)]
pub struct Logger {
    name: String,
    level: AtomicU8,
}

impl Logger {
    /// Create a logger at the given level.
    pub fn new(name: impl Into<String>, level: Level) -> Self {
        Self {
            name: name.into(),
            level: AtomicU8::new(level.rank()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current threshold.
    pub fn level(&self) -> Level {
        Level::from(self.level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level.rank(), Ordering::Relaxed);
    }

    /// Point-in-time copy for listings.
    pub fn entry(&self) -> LoggerEntry {
        LoggerEntry {
            name: self.name.clone(),
            level: self.level(),
        }
    }
}

/// Snapshot of a logger's name and level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggerEntry {
    pub name: String,
    pub level: Level,
}
