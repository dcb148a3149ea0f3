use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};

use super::service::EnvironmentMonitor;
use crate::monitors::feeds::FeedError;

/// Router exposing environmental ingestion, status and trend history.
pub fn environment_router(monitor: Arc<EnvironmentMonitor>) -> Router {
    Router::new()
        .route("/api/v1/environment/readings", post(ingest_handler))
        .route("/api/v1/environment/latest", get(latest_handler))
        .route("/api/v1/environment/history", get(history_handler))
        .with_state(monitor)
}

pub(crate) async fn ingest_handler(
    State(monitor): State<Arc<EnvironmentMonitor>>,
    axum::Json(payload): axum::Json<Value>,
) -> Response {
    match monitor.ingest(payload) {
        Ok(status) => (StatusCode::OK, axum::Json(status)).into_response(),
        Err(error) => feed_error_response(error),
    }
}

pub(crate) async fn latest_handler(State(monitor): State<Arc<EnvironmentMonitor>>) -> Response {
    match monitor.latest() {
        Ok(status) => (StatusCode::OK, axum::Json(status)).into_response(),
        Err(error) => feed_error_response(error),
    }
}

pub(crate) async fn history_handler(State(monitor): State<Arc<EnvironmentMonitor>>) -> Response {
    let payload = json!({ "points": monitor.history() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

fn feed_error_response(error: FeedError) -> Response {
    let status = match &error {
        FeedError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        other if other.is_client_error() => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
