use std::sync::{PoisonError, RwLock};

use serde_json::Value;
use tracing::debug;

use super::domain::ChargingView;
use crate::monitors::feeds::RecordSet;

/// Mirror of the station's database node.
#[derive(Debug, Default)]
pub struct ChargingStation {
    records: RwLock<RecordSet>,
}

impl ChargingStation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the mirrored node. `null` clears it; a scalar becomes a single `value` field.
    pub fn ingest(&self, payload: Value) -> ChargingView {
        let records = RecordSet::from_value(payload);
        let view = ChargingView::from_records(&records);
        *self.records.write().unwrap_or_else(PoisonError::into_inner) = records;

        debug!(
            fields = view.latest.len(),
            charts = view.charts.len(),
            "charging node updated"
        );
        view
    }

    pub fn view(&self) -> ChargingView {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        ChargingView::from_records(&records)
    }
}
