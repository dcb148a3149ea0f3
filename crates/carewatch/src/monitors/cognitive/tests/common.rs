use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::monitors::clock::FixedClock;
use crate::monitors::cognitive::domain::SensorSnapshot;
use crate::monitors::cognitive::evaluation::RiskEvaluator;
use crate::monitors::cognitive::service::ScreeningService;
use crate::monitors::feeds::{FeedError, SnapshotSource, StaticSnapshotSource};

pub(super) fn evaluated_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn evaluator() -> RiskEvaluator {
    RiskEvaluator::reference().with_clock(Arc::new(FixedClock(evaluated_at())))
}

/// Every reading sits inside its risk band.
pub(super) fn all_bands_snapshot() -> SensorSnapshot {
    SensorSnapshot {
        heart_rate: 70.0,
        spo2: 94.0,
        blood_pressure: "120/80".to_string(),
        angle: 0.10,
        acceleration: 0.75,
        energy: 5.0,
        temperature: 36.5,
        humidity: 60.0,
    }
}

/// No reading sits inside its risk band.
pub(super) fn clear_snapshot() -> SensorSnapshot {
    SensorSnapshot {
        heart_rate: 105.0,
        spo2: 98.0,
        blood_pressure: "118/76".to_string(),
        angle: 0.5,
        acceleration: 1.2,
        energy: 9.0,
        temperature: 37.0,
        humidity: 40.0,
    }
}

/// Healthy resting vitals. A 75 BPM heart rate still falls in the 55-90 band.
pub(super) fn resting_snapshot() -> SensorSnapshot {
    SensorSnapshot {
        heart_rate: 75.0,
        ..clear_snapshot()
    }
}

pub(super) fn static_service(snapshot: SensorSnapshot) -> Arc<ScreeningService<StaticSnapshotSource>> {
    Arc::new(ScreeningService::new(
        Arc::new(StaticSnapshotSource::new(snapshot)),
        evaluator(),
    ))
}

pub(super) struct OfflineSource;

impl SnapshotSource for OfflineSource {
    fn latest(&self) -> Result<SensorSnapshot, FeedError> {
        Err(FeedError::Unavailable("vitals node unreachable".to_string()))
    }
}

pub(super) struct EmptySource;

impl SnapshotSource for EmptySource {
    fn latest(&self) -> Result<SensorSnapshot, FeedError> {
        Err(FeedError::Empty)
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body bytes");
    serde_json::from_slice(&bytes).expect("json body")
}
