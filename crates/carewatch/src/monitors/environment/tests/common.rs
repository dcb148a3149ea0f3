use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::{json, Value};

pub(super) fn node(temperature: f64, ph: f64) -> Value {
    json!({
        "DHT_Status": "OK",
        "Temp_C": temperature,
        "Humidity_Pct": "58",
        "Soil_Digital": 0,
        "Soil_IsDry": true,
        "Soil_IsWet": false,
        "Relay_On": false,
        "pH_Raw": 1890,
        "pH_Value": ph,
        "Last_Update_ms": 1717336800000u64
    })
}

pub(super) fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("encode body")))
        .expect("request")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body bytes");
    serde_json::from_slice(&bytes).expect("json body")
}
