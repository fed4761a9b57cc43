//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (structured fields)
//!     → metrics.rs (counters, gauges)
//!
//! logging.rs:
//!     fmt layer (text or JSON)
//!     → RegistryFilter asks the LoggerRegistry for each event's threshold
//!     → level changes through the admin API apply immediately
//! ```
//!
//! # Design Decisions
//! - The logger registry is the only source of log thresholds
//! - Metrics are cheap (atomic increments) and exported for Prometheus scrape

pub mod logging;
pub mod metrics;
