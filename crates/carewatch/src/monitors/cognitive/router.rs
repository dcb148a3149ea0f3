use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};

use super::service::ScreeningService;
use crate::monitors::feeds::{snapshot_from_payload, FeedError, SnapshotSource};

/// Router exposing screening and guidance endpoints.
pub fn screening_router<S>(service: Arc<ScreeningService<S>>) -> Router
where
    S: SnapshotSource + 'static,
{
    Router::new()
        .route("/api/v1/screening/evaluate", post(evaluate_handler::<S>))
        .route("/api/v1/screening/latest", get(latest_handler::<S>))
        .route("/api/v1/screening/guidance/:tier", get(guidance_handler::<S>))
        .with_state(service)
}

pub(crate) async fn evaluate_handler<S>(
    State(service): State<Arc<ScreeningService<S>>>,
    axum::Json(payload): axum::Json<Value>,
) -> Response
where
    S: SnapshotSource + 'static,
{
    match snapshot_from_payload(payload) {
        Ok(snapshot) => {
            let report = service.screen_snapshot(&snapshot);
            (StatusCode::OK, axum::Json(report)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn latest_handler<S>(State(service): State<Arc<ScreeningService<S>>>) -> Response
where
    S: SnapshotSource + 'static,
{
    match service.screen() {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => feed_error_response(error),
    }
}

pub(crate) async fn guidance_handler<S>(
    State(service): State<Arc<ScreeningService<S>>>,
    Path(tier): Path<String>,
) -> Response
where
    S: SnapshotSource + 'static,
{
    let bundle = service.guidance(&tier);
    (StatusCode::OK, axum::Json(bundle)).into_response()
}

fn feed_error_response(error: FeedError) -> Response {
    let status = match &error {
        FeedError::Empty => StatusCode::NOT_FOUND,
        FeedError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        other if other.is_client_error() => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
