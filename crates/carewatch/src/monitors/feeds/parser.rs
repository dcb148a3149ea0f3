use std::io::Read;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::FeedError;
use crate::monitors::cognitive::domain::{SensorSnapshot, EMPTY_BLOOD_PRESSURE};

/// One replayed row of a vitals history export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub recorded_at: Option<DateTime<Utc>>,
    pub snapshot: SensorSnapshot,
}

/// Reads `hr,spo2,bp,angle,accel,eng,temp,hum[,recorded_at]` rows. Blank cells become `0`.
pub fn parse_snapshot_history<R: Read>(reader: R) -> Result<Vec<HistoryEntry>, FeedError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut entries = Vec::new();

    for row in csv_reader.deserialize::<HistoryRow>() {
        let row = row?;
        entries.push(row.into_entry());
    }

    Ok(entries)
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    #[serde(default, deserialize_with = "lenient_number")]
    hr: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    spo2: f64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    bp: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    angle: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    accel: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    eng: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    temp: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    hum: f64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    recorded_at: Option<String>,
}

impl HistoryRow {
    fn into_entry(self) -> HistoryEntry {
        HistoryEntry {
            recorded_at: self.recorded_at.as_deref().and_then(parse_timestamp),
            snapshot: SensorSnapshot {
                heart_rate: self.hr,
                spo2: self.spo2,
                blood_pressure: self
                    .bp
                    .unwrap_or_else(|| EMPTY_BLOOD_PRESSURE.to_string()),
                angle: self.angle,
                acceleration: self.accel,
                energy: self.eng,
                temperature: self.temp,
                humidity: self.hum,
            },
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = empty_string_as_none(deserializer)?;
    Ok(opt
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0))
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}
