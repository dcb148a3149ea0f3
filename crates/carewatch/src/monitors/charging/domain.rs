use chrono::{TimeZone, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::monitors::feeds::{to_number, RecordSet, SeriesPoint};

/// Field treated as a switch rather than a metric.
const RELAY: &str = "relay";

/// Chart-ready history of one field. Non-numeric samples are gaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub field: String,
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
}

impl ChartSeries {
    pub fn from_points(field: &str, points: &[SeriesPoint]) -> Self {
        Self {
            field: field.to_string(),
            title: format!("{} - Historical Data", field.to_uppercase()),
            labels: points.iter().map(|point| point_label(&point.key)).collect(),
            values: points.iter().map(|point| to_number(&point.value)).collect(),
        }
    }
}

/// Latest station record plus charts for every metric with history.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChargingView {
    pub latest: Map<String, Value>,
    pub current: Option<f64>,
    pub voltage: Option<f64>,
    pub charts: Vec<ChartSeries>,
}

impl ChargingView {
    pub fn from_records(records: &RecordSet) -> Self {
        let charts = records
            .series
            .iter()
            .filter(|(field, _)| !field.eq_ignore_ascii_case(RELAY))
            .map(|(field, points)| ChartSeries::from_points(field, points))
            .collect();

        Self {
            latest: records.latest.clone(),
            current: records.get("current").and_then(to_number),
            voltage: records.get("voltage").and_then(to_number),
            charts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.latest.is_empty()
    }
}

/// Numeric collection keys are epoch milliseconds; anything else is shown as-is.
fn point_label(key: &str) -> String {
    key.parse::<i64>()
        .ok()
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
        .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| key.to_string())
}
