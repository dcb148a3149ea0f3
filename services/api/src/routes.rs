use crate::infra::{AppState, LatestSnapshotCache};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use carewatch::error::AppError;
use carewatch::monitors::charging::{charging_router, ChargingStation};
use carewatch::monitors::cognitive::{screening_router, ScreeningReport, ScreeningService};
use carewatch::monitors::environment::{environment_router, EnvironmentMonitor};
use carewatch::monitors::feeds::snapshot_from_payload;
use carewatch::monitors::warehouse::{
    warehouse_router, AlertFlagStore, Notifier, WarehouseAlertService,
};
use serde_json::{json, Value};
use std::sync::Arc;

pub(crate) type CachedScreening = ScreeningService<LatestSnapshotCache>;

/// Live readings shared between the ingest route and the screening service.
#[derive(Clone)]
pub(crate) struct VitalsFeed {
    pub(crate) cache: Arc<LatestSnapshotCache>,
    pub(crate) screening: Arc<CachedScreening>,
}

/// Site monitors that only record and present their nodes.
#[derive(Clone, Default)]
pub(crate) struct SiteMonitors {
    pub(crate) environment: Arc<EnvironmentMonitor>,
    pub(crate) charging: Arc<ChargingStation>,
}

pub(crate) fn with_monitoring_routes<N, F>(
    feed: VitalsFeed,
    warehouse: Arc<WarehouseAlertService<N, F>>,
    site: SiteMonitors,
) -> axum::Router
where
    N: Notifier + 'static,
    F: AlertFlagStore + 'static,
{
    screening_router(feed.screening.clone())
        .merge(warehouse_router(warehouse))
        .merge(environment_router(site.environment))
        .merge(charging_router(site.charging))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/screening/readings",
            axum::routing::post(record_reading_endpoint),
        )
        .layer(Extension(feed))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Stores a pushed vitals node as the latest reading and screens it.
pub(crate) async fn record_reading_endpoint(
    Extension(feed): Extension<VitalsFeed>,
    Json(payload): Json<Value>,
) -> Result<Json<ScreeningReport>, AppError> {
    let snapshot = snapshot_from_payload(payload)?;
    let report = feed.screening.screen_snapshot(&snapshot);
    feed.cache.store(snapshot);
    Ok(Json(report))
}
