use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::monitors::charging::router::charging_router;
use crate::monitors::charging::service::ChargingStation;

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("encode body")))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request")
}

async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body bytes");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn pushed_collection_is_served_as_latest_with_charts() {
    let station = Arc::new(ChargingStation::new());
    let router = charging_router(station);

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/charging/readings",
            &json!({
                "1717336800000": {"current": 1.5, "voltage": "230", "relay": 1},
                "1717336860000": {"current": 1.75, "voltage": "228.5", "relay": 0},
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(get("/api/v1/charging/latest"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["latest"]["voltage"], json!("228.5"));
    assert_eq!(body["current"], json!(1.75));
    assert_eq!(body["voltage"], json!(228.5));
    assert_eq!(body["charts"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["charts"][1]["labels"][0], json!("2024-06-02 14:00:00 UTC"));
}

#[tokio::test]
async fn latest_is_not_found_until_data_arrives() {
    let response = charging_router(Arc::new(ChargingStation::new()))
        .oneshot(get("/api/v1/charging/latest"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn null_clears_the_mirrored_node() {
    let station = Arc::new(ChargingStation::new());
    station.ingest(json!({"current": 3}));
    assert!(!station.view().is_empty());

    let response = charging_router(station.clone())
        .oneshot(post_json("/api/v1/charging/readings", &Value::Null))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(station.view().is_empty());
}

#[tokio::test]
async fn scalars_are_kept_under_value() {
    let station = Arc::new(ChargingStation::new());

    let response = charging_router(station.clone())
        .oneshot(post_json("/api/v1/charging/readings", &json!(12.5)))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["latest"], json!({"value": 12.5}));
    assert!(body["charts"].as_array().is_some_and(Vec::is_empty));
}
