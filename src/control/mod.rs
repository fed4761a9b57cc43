//! Log level control subsystem.
//!
//! # Data Flow
//! ```text
//! Query parameters
//!     → parser.rs (normalize, classify, parse levels)
//!     → ChangeRequest (NoOp | SetAll | SetNamed)
//!     → applier.rs (resolve all, then apply)
//!     → LoggerRegistry (static or dynamic)
//!     → audit records
//! ```
//!
//! # Design Decisions
//! - Invalid levels are rejected before the registry is consulted
//! - Failed requests leave every logger untouched
//! - No retries; callers resubmit a corrected request

pub mod applier;
pub mod parser;

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::ChangeError;
use crate::levels::Level;
use crate::observability::metrics;
use crate::registry::LoggerRegistry;

pub use applier::apply;
pub use parser::{parse_request, QueryParams};

/// A parsed level change, consumed by a single [`apply`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeRequest {
    /// No parameters supplied.
    NoOp,
    /// Set every logger to this level.
    SetAll(Level),
    /// Set each named logger to its level.
    SetNamed(BTreeMap<String, Level>),
}

/// Entry point used by the admin layer.
#[derive(Debug, Clone)]
pub struct LevelController {
    registry: Arc<dyn LoggerRegistry>,
}

impl LevelController {
    pub fn new(registry: Arc<dyn LoggerRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<dyn LoggerRegistry> {
        &self.registry
    }

    /// Parse and apply a level change.
    pub fn change_levels(&self, params: &QueryParams) -> Result<(), ChangeError> {
        let result = parse_request(params).and_then(|request| apply(request, self.registry.as_ref()));

        if let Err(e) = &result {
            tracing::warn!(error = %e, "Rejected log level change");
            metrics::record_rejection(e.reason());
        }
        result
    }

    /// `(name, level)` for every logger, for status display.
    pub fn list_active_loggers(&self) -> Vec<(String, String)> {
        self.registry
            .list_entries()
            .into_iter()
            .map(|entry| (entry.name, entry.level.to_string()))
            .collect()
    }
}
