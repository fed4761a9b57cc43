use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::control::parser::collect_params;
use crate::http::response::{render_error, render_loggers};
use crate::http::server::AppState;
use crate::registry::LoggerEntry;

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub registry: &'static str,
    pub loggers: usize,
}

/// Apply a level change, then list every logger.
pub async fn post_logging(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> (StatusCode, String) {
    let params = collect_params(pairs);
    let mut body = String::new();
    let status = match state.controller.change_levels(&params) {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            render_error(&mut body, &e);
            StatusCode::BAD_REQUEST
        }
    };

    render_loggers(&mut body, &state.controller.list_active_loggers());
    (status, body)
}

/// List every logger without changing anything.
pub async fn get_logging(State(state): State<AppState>) -> String {
    let mut body = String::new();
    render_loggers(&mut body, &state.controller.list_active_loggers());
    body
}

pub async fn get_loggers(State(state): State<AppState>) -> Json<Vec<LoggerEntry>> {
    Json(state.controller.registry().list_entries())
}

pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    let registry = state.controller.registry();
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        registry: registry.kind().as_str(),
        loggers: registry.list_entries().len(),
    })
}
