//! Severity levels and their name/rank tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ChangeError;

/// Generates `Level` together with its rank-ordered name table.
macro_rules! level_table {
    ($($(#[$meta:meta])* $variant:ident => $name:literal),+ $(,)?) => {
        /// Severity threshold of a logger, ordered from most to least verbose.
        #[repr(u8)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Level {
            $($(#[$meta])* $variant),+
        }

        impl Level {
            /// Every level, in rank order.
            pub const ALL: &'static [Level] = &[$(Level::$variant),+];

            const NAMES: &'static [&'static str] = &[$($name),+];
        }
    };
}

level_table! {
    /// Most verbose.
    Trace => "trace",
    Debug => "debug",
    Info => "info",
    Warning => "warning",
    Error => "error",
    /// Stricter than `error`; suppresses every `tracing` event.
    Critical => "critical",
    /// Logger disabled.
    Off => "off",
}

impl Level {
    /// Ordinal position in the vocabulary.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Level::rank`].
    pub fn from_rank(rank: u8) -> Option<Level> {
        Self::ALL.get(rank as usize).copied()
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// Position of a `tracing` event level on this scale.
    pub fn from_tracing(level: &tracing::Level) -> Level {
        if *level == tracing::Level::TRACE {
            Level::Trace
        } else if *level == tracing::Level::DEBUG {
            Level::Debug
        } else if *level == tracing::Level::INFO {
            Level::Info
        } else if *level == tracing::Level::WARN {
            Level::Warning
        } else {
            Level::Error
        }
    }

    /// Returns true if an event at `event` passes this threshold.
    pub fn allows(self, event: &tracing::Level) -> bool {
        self != Level::Off && Level::from_tracing(event) >= self
    }
}

impl From<u8> for Level {
    fn from(rank: u8) -> Self {
        Level::from_rank(rank).unwrap_or(Level::Off)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ChangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::NAMES
            .iter()
            .position(|name| *name == s)
            .and_then(|rank| Level::from_rank(rank as u8))
            .ok_or_else(|| ChangeError::InvalidLevel(s.to_string()))
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse a level name. Matching is exact and case-sensitive.
pub fn parse_level(name: &str) -> Result<Level, ChangeError> {
    name.parse()
}

/// All level names in rank order, for usage and error messages.
pub fn all_level_names() -> &'static [&'static str] {
    Level::NAMES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_name() {
        for (rank, name) in all_level_names().iter().enumerate() {
            let level = parse_level(name).unwrap();
            assert_eq!(level.rank() as usize, rank);
            assert_eq!(level.as_str(), *name);
        }
    }

    #[test]
    fn test_rejects_unknown_names() {
        for bad in ["", "INFO", "warn", "fatal", " info", "info ", "verbose"] {
            assert_eq!(
                parse_level(bad),
                Err(ChangeError::InvalidLevel(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_names_are_rank_ordered() {
        assert_eq!(
            all_level_names(),
            &["trace", "debug", "info", "warning", "error", "critical", "off"]
        );
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Critical < Level::Off);
        assert_eq!(Level::from_rank(7), None);
        assert_eq!(Level::from(42), Level::Off);
    }

    #[test]
    fn test_tracing_thresholds() {
        assert!(Level::Info.allows(&tracing::Level::WARN));
        assert!(Level::Info.allows(&tracing::Level::INFO));
        assert!(!Level::Info.allows(&tracing::Level::DEBUG));
        assert!(Level::Trace.allows(&tracing::Level::TRACE));
        assert!(Level::Error.allows(&tracing::Level::ERROR));
        assert!(!Level::Critical.allows(&tracing::Level::ERROR));
        assert!(!Level::Off.allows(&tracing::Level::ERROR));
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&Level::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let level: Level = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(level, Level::Critical);
        assert!(serde_json::from_str::<Level>("\"loud\"").is_err());
    }
}
