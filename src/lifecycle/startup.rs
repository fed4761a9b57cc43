//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the logger registry selected by configuration
//! - Install logging and metrics on top of it
//! - Bind the admin listener and serve until shutdown

use std::error::Error;
use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::validation::warn_ambiguous_names;
use crate::config::AppConfig;
use crate::control::LevelController;
use crate::http::AdminServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::{logging, metrics};
use crate::registry;

/// Run the admin service until a termination signal arrives.
pub async fn run(config: AppConfig) -> Result<(), Box<dyn Error>> {
    let registry = registry::build(&config.logging);
    logging::init_logging(&config.observability, registry.clone())?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        registry = registry.kind().as_str(),
        loggers = registry.list_entries().len(),
        default_level = %config.logging.default_level,
        "Configuration loaded"
    );
    warn_ambiguous_names(&config);

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.admin.bind_address).await?;

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown);

    let server = AdminServer::new(LevelController::new(registry));
    server.run(listener, shutdown_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
