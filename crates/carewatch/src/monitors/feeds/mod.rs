//! Normalization of untyped realtime-database payloads.
//!
//! Devices publish loosely typed JSON: numbers arrive as numbers or strings,
//! fields go missing, and a node can hold either one record or a
//! timestamped collection of them. Everything here turns that into typed
//! values before any scoring or alerting runs.

mod mapping;
mod normalizer;
mod parser;
mod records;

pub use mapping::{snapshot_from_payload, snapshot_from_record, snapshot_from_value, VitalsPayload};
pub use normalizer::{field_text, to_number};
pub use parser::{parse_snapshot_history, HistoryEntry};
pub use records::{RecordSet, SeriesPoint};

pub(crate) use mapping::kind_of;

use crate::monitors::cognitive::domain::SensorSnapshot;

/// Telemetry collaborator supplying the most recent vitals.
pub trait SnapshotSource: Send + Sync {
    fn latest(&self) -> Result<SensorSnapshot, FeedError>;
}

/// Source that always returns the same snapshot.
#[derive(Debug, Clone)]
pub struct StaticSnapshotSource {
    snapshot: SensorSnapshot,
}

impl StaticSnapshotSource {
    pub fn new(snapshot: SensorSnapshot) -> Self {
        Self { snapshot }
    }
}

impl SnapshotSource for StaticSnapshotSource {
    fn latest(&self) -> Result<SensorSnapshot, FeedError> {
        Ok(self.snapshot.clone())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("telemetry payload is empty")]
    Empty,
    #[error("expected an object of readings, found {0}")]
    UnexpectedShape(&'static str),
    #[error("invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid history CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to read telemetry: {0}")]
    Io(#[from] std::io::Error),
    #[error("telemetry source unavailable: {0}")]
    Unavailable(String),
}

impl FeedError {
    /// Errors caused by the caller's payload rather than the source.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            FeedError::Empty
                | FeedError::UnexpectedShape(_)
                | FeedError::Json(_)
                | FeedError::Csv(_)
        )
    }
}
