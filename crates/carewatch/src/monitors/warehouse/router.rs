use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::channels::{AlertFlagStore, Notifier};
use super::domain::WarehouseField;
use super::service::{WarehouseAlertService, WarehouseError};

/// Chat text forwarded from the messaging channel.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub text: String,
}

/// Router exposing warehouse ingestion and operator queries.
pub fn warehouse_router<N, F>(service: Arc<WarehouseAlertService<N, F>>) -> Router
where
    N: Notifier + 'static,
    F: AlertFlagStore + 'static,
{
    Router::new()
        .route("/api/v1/warehouse/readings", post(ingest_handler::<N, F>))
        .route("/api/v1/warehouse/latest", get(latest_handler::<N, F>))
        .route("/api/v1/warehouse/query", post(query_handler::<N, F>))
        .with_state(service)
}

pub(crate) async fn ingest_handler<N, F>(
    State(service): State<Arc<WarehouseAlertService<N, F>>>,
    axum::Json(payload): axum::Json<Value>,
) -> Response
where
    N: Notifier + 'static,
    F: AlertFlagStore + 'static,
{
    match service.ingest(payload) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn latest_handler<N, F>(
    State(service): State<Arc<WarehouseAlertService<N, F>>>,
) -> Response
where
    N: Notifier + 'static,
    F: AlertFlagStore + 'static,
{
    let reading = service.latest();
    let statuses: serde_json::Map<String, Value> = WarehouseField::ALL
        .iter()
        .filter_map(|field| {
            reading
                .status(*field)
                .map(|status| (field.key().to_string(), json!(status)))
        })
        .collect();

    let payload = json!({
        "reading": reading,
        "statuses": statuses,
        "notices": reading.notices(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn query_handler<N, F>(
    State(service): State<Arc<WarehouseAlertService<N, F>>>,
    axum::Json(request): axum::Json<QueryRequest>,
) -> Response
where
    N: Notifier + 'static,
    F: AlertFlagStore + 'static,
{
    match service.answer(&request.text) {
        Ok(reply) => (StatusCode::OK, axum::Json(json!({ "reply": reply }))).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: WarehouseError) -> Response {
    let status = match &error {
        WarehouseError::Feed(_) => StatusCode::BAD_REQUEST,
        WarehouseError::Notify(_) | WarehouseError::FlagStore(_) => StatusCode::BAD_GATEWAY,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
