use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::domain::{EnvironmentReading, PhLabel, SoilCondition};
use super::history::{HistoryPoint, ReadingHistory};
use crate::monitors::feeds::{kind_of, FeedError, RecordSet};

/// Latest reading with its derived classifications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentStatus {
    pub reading: EnvironmentReading,
    pub ph_label: Option<PhLabel>,
    pub soil: SoilCondition,
    pub relay: &'static str,
}

impl From<EnvironmentReading> for EnvironmentStatus {
    fn from(reading: EnvironmentReading) -> Self {
        Self {
            ph_label: reading.ph_label(),
            soil: reading.soil_condition(),
            relay: if reading.relay_on { "ON" } else { "OFF" },
            reading,
        }
    }
}

#[derive(Debug, Default)]
struct MonitorState {
    latest: Option<EnvironmentReading>,
    history: ReadingHistory,
}

/// Subscriber to the environmental node that keeps the latest reading and a rolling history.
#[derive(Debug, Default)]
pub struct EnvironmentMonitor {
    state: Mutex<MonitorState>,
}

impl EnvironmentMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(MonitorState {
                latest: None,
                history: ReadingHistory::new(capacity),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, MonitorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Ingest a raw node. A timestamped collection contributes only its latest record.
    pub fn ingest(&self, payload: Value) -> Result<EnvironmentStatus, FeedError> {
        match &payload {
            Value::Null => return Err(FeedError::Empty),
            Value::Object(_) => {}
            other => return Err(FeedError::UnexpectedShape(kind_of(other))),
        }

        let records = RecordSet::from_value(payload);
        if records.is_empty() {
            return Err(FeedError::Empty);
        }

        Ok(self.observe(EnvironmentReading::from_record(&records.latest)))
    }

    pub fn observe(&self, reading: EnvironmentReading) -> EnvironmentStatus {
        let samples = {
            let mut state = self.state();
            state.history.push(HistoryPoint::from(&reading));
            state.latest = Some(reading.clone());
            state.history.len()
        };

        let status = EnvironmentStatus::from(reading);
        debug!(
            ph = ?status.ph_label,
            soil = ?status.soil,
            samples,
            "environment reading recorded"
        );
        status
    }

    pub fn latest(&self) -> Result<EnvironmentStatus, FeedError> {
        self.state()
            .latest
            .clone()
            .map(EnvironmentStatus::from)
            .ok_or_else(|| FeedError::Unavailable("no environment readings yet".to_string()))
    }

    /// Samples oldest first.
    pub fn history(&self) -> Vec<HistoryPoint> {
        self.state().history.points()
    }
}
