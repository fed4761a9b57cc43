//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the admin handlers
//! - Wire up the request tracing layer
//! - Serve on a bound listener until shutdown is signalled

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::admin::setup_admin_router;
use crate::control::LevelController;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub controller: LevelController,
}

/// HTTP server for the admin endpoints.
pub struct AdminServer {
    router: Router,
}

impl AdminServer {
    /// Create a new admin server around a level controller.
    pub fn new(controller: LevelController) -> Self {
        let state = AppState { controller };
        let router = setup_admin_router(state).layer(TraceLayer::new_for_http());
        Self { router }
    }

    /// The assembled router, for embedding or testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Admin server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Admin server received shutdown signal");
            })
            .await?;

        tracing::info!("Admin server stopped");
        Ok(())
    }
}
