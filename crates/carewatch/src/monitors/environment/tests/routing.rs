use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::monitors::environment::router::environment_router;
use crate::monitors::environment::service::EnvironmentMonitor;

#[tokio::test]
async fn readings_route_returns_classified_status() {
    let monitor = Arc::new(EnvironmentMonitor::new());

    let response = environment_router(monitor.clone())
        .oneshot(post_json("/api/v1/environment/readings", &node(25.0, 7.8)))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["ph_label"], json!("Alkaline"));
    assert_eq!(body["soil"], json!("DRY"));
    assert_eq!(body["reading"]["temperature_c"], json!(25.0));
    assert_eq!(monitor.history().len(), 1);
}

#[tokio::test]
async fn history_route_lists_samples_oldest_first() {
    let monitor = Arc::new(EnvironmentMonitor::new());
    monitor.ingest(node(21.0, 6.9)).expect("ingest");
    monitor.ingest(node(22.0, 7.1)).expect("ingest");

    let response = environment_router(monitor)
        .oneshot(
            Request::get("/api/v1/environment/history")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["points"][0]["temperature"], json!(21.0));
    assert_eq!(body["points"][1]["ph"], json!(7.1));
    assert_eq!(body["points"][1]["time"], json!("2024-06-02T14:00:00Z"));
}

#[tokio::test]
async fn latest_route_is_unavailable_until_data_arrives() {
    let response = environment_router(Arc::new(EnvironmentMonitor::new()))
        .oneshot(
            Request::get("/api/v1/environment/latest")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], json!("telemetry source unavailable: no environment readings yet"));
}

#[tokio::test]
async fn readings_route_rejects_scalars() {
    let response = environment_router(Arc::new(EnvironmentMonitor::new()))
        .oneshot(post_json("/api/v1/environment/readings", &json!("6.8")))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
