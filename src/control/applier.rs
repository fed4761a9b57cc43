//! Validate-then-apply for level changes.
//!
//! # Responsibilities
//! - Resolve every named logger before touching any of them
//! - Apply the new levels and emit one audit record per change
//!
//! # Design Decisions
//! - A request naming an unknown logger changes nothing
//! - No registry lock is held while audit records are emitted
//! - Audit records go to [`AUDIT_TARGET`] and precede the change they describe

use std::collections::BTreeMap;

use crate::control::ChangeRequest;
use crate::error::ChangeError;
use crate::levels::Level;
use crate::observability::logging::AUDIT_TARGET;
use crate::observability::metrics;
use crate::registry::{LoggerHandle, LoggerRegistry};

/// Apply a parsed request to the registry.
pub fn apply(request: ChangeRequest, registry: &dyn LoggerRegistry) -> Result<(), ChangeError> {
    match request {
        ChangeRequest::NoOp => Ok(()),
        ChangeRequest::SetAll(level) => {
            tracing::info!(target: AUDIT_TARGET, new_level = %level, "change all log levels");
            registry.set_all_levels(level);
            metrics::record_level_change("all");
            Ok(())
        }
        ChangeRequest::SetNamed(changes) => apply_named(&changes, registry),
    }
}

fn apply_named(
    changes: &BTreeMap<String, Level>,
    registry: &dyn LoggerRegistry,
) -> Result<(), ChangeError> {
    // Phase 1: resolve everything.
    let resolved: Vec<(LoggerHandle<'_>, Level)> = changes
        .iter()
        .map(|(name, &level)| {
            registry
                .resolve(name)
                .map(|handle| (handle, level))
                .ok_or_else(|| ChangeError::UnknownLogger(name.clone()))
        })
        .collect::<Result<_, _>>()?;

    // Phase 2: mutate.
    for (handle, level) in &resolved {
        tracing::info!(
            target: AUDIT_TARGET,
            name = %handle.name(),
            new_level = %level,
            "change log level"
        );
        registry.set_level(handle, *level);
        metrics::record_level_change("named");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DynamicRegistry, LoggerEntry, StaticRegistry};
    use tracing_test::traced_test;

    fn registries() -> Vec<Box<dyn LoggerRegistry>> {
        let dynamic = DynamicRegistry::new(Level::Info);
        for name in ["a", "b", "c"] {
            dynamic.register(name);
        }
        vec![
            Box::new(StaticRegistry::new(["a", "b", "c"], Level::Info)),
            Box::new(dynamic),
        ]
    }

    fn named(pairs: &[(&str, Level)]) -> ChangeRequest {
        ChangeRequest::SetNamed(pairs.iter().map(|(n, l)| (n.to_string(), *l)).collect())
    }

    fn levels(registry: &dyn LoggerRegistry) -> Vec<(String, Level)> {
        registry
            .list_entries()
            .into_iter()
            .map(|LoggerEntry { name, level }| (name, level))
            .collect()
    }

    #[test]
    fn test_noop_changes_nothing() {
        for registry in registries() {
            let before = levels(registry.as_ref());
            apply(ChangeRequest::NoOp, registry.as_ref()).unwrap();
            assert_eq!(levels(registry.as_ref()), before);
        }
    }

    #[test]
    #[traced_test]
    fn test_set_all() {
        for registry in registries() {
            apply(ChangeRequest::SetAll(Level::Debug), registry.as_ref()).unwrap();
            assert!(registry.list_entries().iter().all(|e| e.level == Level::Debug));
        }
        assert!(logs_contain("change all log levels"));
        assert!(logs_contain(AUDIT_TARGET));
        logs_assert(|lines: &[&str]| {
            match lines.iter().filter(|l| l.contains("change all log levels")).count() {
                2 => Ok(()),
                n => Err(format!("expected one audit record per registry, got {n}")),
            }
        });
    }

    #[test]
    fn test_empty_registry_accepts_set_all() {
        let registry = StaticRegistry::new([], Level::Info);
        assert!(apply(ChangeRequest::SetAll(Level::Off), &registry).is_ok());
    }

    #[test]
    #[traced_test]
    fn test_set_named() {
        for registry in registries() {
            let request = named(&[("a", Level::Trace), ("b", Level::Warning)]);
            apply(request, registry.as_ref()).unwrap();

            let registry = registry.as_ref();
            assert_eq!(registry.resolve("a").unwrap().level(), Level::Trace);
            assert_eq!(registry.resolve("b").unwrap().level(), Level::Warning);
            assert_eq!(registry.resolve("c").unwrap().level(), Level::Info);
        }
        assert!(logs_contain("change log level"));
        assert!(logs_contain("name=a new_level=trace"));
        assert!(logs_contain("name=b new_level=warning"));
    }

    #[test]
    #[traced_test]
    fn test_unknown_logger_changes_nothing() {
        for registry in registries() {
            let before = levels(registry.as_ref());
            let request = named(&[("a", Level::Error), ("b", Level::Error), ("z", Level::Error)]);

            assert_eq!(
                apply(request, registry.as_ref()),
                Err(ChangeError::UnknownLogger("z".into()))
            );
            assert_eq!(levels(registry.as_ref()), before);
        }
        assert!(!logs_contain("change log level"));
    }

    #[test]
    fn test_unknown_logger_resolved_first_in_order() {
        for registry in registries() {
            // "0" sorts before every known name.
            let request = named(&[("0", Level::Error), ("a", Level::Error)]);
            assert_eq!(
                apply(request, registry.as_ref()),
                Err(ChangeError::UnknownLogger("0".into()))
            );
            assert_eq!(registry.resolve("a").unwrap().level(), Level::Info);
        }
    }

    #[test]
    fn test_apply_is_idempotent() {
        for registry in registries() {
            let request = named(&[("a", Level::Critical), ("c", Level::Off)]);
            apply(request.clone(), registry.as_ref()).unwrap();
            let once = levels(registry.as_ref());
            apply(request, registry.as_ref()).unwrap();
            assert_eq!(levels(registry.as_ref()), once);
        }
    }

    #[test]
    fn test_dynamic_registration_during_changes() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(DynamicRegistry::new(Level::Info));
        registry.register("a");

        let writer = {
            let registry = registry.clone();
            thread::spawn(move || {
                for i in 0..500 {
                    registry.register(&format!("late-{i}"));
                }
            })
        };

        for _ in 0..100 {
            apply(named(&[("a", Level::Debug)]), registry.as_ref()).unwrap();
            apply(ChangeRequest::SetAll(Level::Warning), registry.as_ref()).unwrap();
        }
        writer.join().unwrap();

        assert_eq!(registry.len(), 501);
        assert_eq!(registry.resolve("a").unwrap().level(), Level::Warning);
    }
}
