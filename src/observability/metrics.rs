//! Metrics collection and exposition.
//!
//! # Metrics
//! - `log_level_changes_total` (counter): applied changes by scope (`all`, `named`)
//! - `log_level_rejections_total` (counter): rejected requests by reason
//! - `log_registry_loggers` (gauge): loggers known to the dynamic registry

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_level_change(scope: &'static str) {
    metrics::counter!("log_level_changes_total", "scope" => scope).increment(1);
}

pub fn record_rejection(reason: &'static str) {
    metrics::counter!("log_level_rejections_total", "reason" => reason).increment(1);
}

pub fn record_logger_count(count: usize) {
    metrics::gauge!("log_registry_loggers").set(count as f64);
}
