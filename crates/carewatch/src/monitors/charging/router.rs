use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};

use super::service::ChargingStation;

/// Router exposing the charging-station node.
pub fn charging_router(station: Arc<ChargingStation>) -> Router {
    Router::new()
        .route("/api/v1/charging/readings", post(ingest_handler))
        .route("/api/v1/charging/latest", get(latest_handler))
        .with_state(station)
}

pub(crate) async fn ingest_handler(
    State(station): State<Arc<ChargingStation>>,
    axum::Json(payload): axum::Json<Value>,
) -> Response {
    let view = station.ingest(payload);
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn latest_handler(State(station): State<Arc<ChargingStation>>) -> Response {
    let view = station.view();
    if view.is_empty() {
        let payload = json!({
            "error": "no data found at /charging",
        });
        return (StatusCode::NOT_FOUND, axum::Json(payload)).into_response();
    }
    (StatusCode::OK, axum::Json(view)).into_response()
}
