pub mod handlers;

use axum::{routing::get, Router};

use crate::http::server::AppState;
use self::handlers::*;

pub fn setup_admin_router(state: AppState) -> Router {
    Router::new()
        .route("/logging", get(get_logging).post(post_logging))
        .route("/loggers", get(get_loggers))
        .route("/status", get(get_status))
        .with_state(state)
}
