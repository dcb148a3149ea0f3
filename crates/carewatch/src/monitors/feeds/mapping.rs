use serde_json::{Map, Value};

use super::normalizer::{field_text, is_blank, to_number};
use super::records::RecordSet;
use super::FeedError;
use crate::monitors::cognitive::domain::{SensorSnapshot, EMPTY_BLOOD_PRESSURE};

/// Database keys of the wearable vitals node.
pub struct VitalsPayload;

impl VitalsPayload {
    pub const HEART_RATE: &'static str = "1_HR";
    pub const SPO2: &'static str = "2_SPO2";
    pub const BLOOD_PRESSURE: &'static str = "3_BP";
    pub const ANGLE: &'static str = "4_Angle";
    pub const ACCELERATION: &'static str = "5_Accel";
    pub const ENERGY: &'static str = "6_ENG";
    pub const TEMPERATURE: &'static str = "7_Temp";
    pub const HUMIDITY: &'static str = "8_Hum";

    pub const KEYS: [&'static str; 8] = [
        Self::HEART_RATE,
        Self::SPO2,
        Self::BLOOD_PRESSURE,
        Self::ANGLE,
        Self::ACCELERATION,
        Self::ENERGY,
        Self::TEMPERATURE,
        Self::HUMIDITY,
    ];

    /// True when the object carries at least one vitals key.
    pub fn matches(record: &Map<String, Value>) -> bool {
        Self::KEYS.iter().any(|key| record.contains_key(*key))
    }
}

fn number_or_zero(record: &Map<String, Value>, key: &str) -> f64 {
    record.get(key).and_then(to_number).unwrap_or(0.0)
}

/// Builds a snapshot from one vitals record. Missing or non-numeric readings become `0`.
pub fn snapshot_from_record(record: &Map<String, Value>) -> SensorSnapshot {
    let blood_pressure = record
        .get(VitalsPayload::BLOOD_PRESSURE)
        .filter(|value| !is_blank(value))
        .and_then(field_text)
        .unwrap_or_else(|| EMPTY_BLOOD_PRESSURE.to_string());

    SensorSnapshot {
        heart_rate: number_or_zero(record, VitalsPayload::HEART_RATE),
        spo2: number_or_zero(record, VitalsPayload::SPO2),
        blood_pressure,
        angle: number_or_zero(record, VitalsPayload::ANGLE),
        acceleration: number_or_zero(record, VitalsPayload::ACCELERATION),
        energy: number_or_zero(record, VitalsPayload::ENERGY),
        temperature: number_or_zero(record, VitalsPayload::TEMPERATURE),
        humidity: number_or_zero(record, VitalsPayload::HUMIDITY),
    }
}

/// Normalizes a raw vitals node, flat or timestamped, into a snapshot.
pub fn snapshot_from_value(value: Value) -> Result<SensorSnapshot, FeedError> {
    match value {
        Value::Null => Err(FeedError::Empty),
        Value::Object(_) => {
            let records = RecordSet::from_value(value);
            if records.is_empty() {
                return Err(FeedError::Empty);
            }
            Ok(snapshot_from_record(&records.latest))
        }
        other => Err(FeedError::UnexpectedShape(kind_of(&other))),
    }
}

/// Accepts either the raw vitals node or an already typed snapshot object.
pub fn snapshot_from_payload(value: Value) -> Result<SensorSnapshot, FeedError> {
    let Value::Object(map) = &value else {
        return Err(match value {
            Value::Null => FeedError::Empty,
            other => FeedError::UnexpectedShape(kind_of(&other)),
        });
    };

    let raw_node = VitalsPayload::matches(map) || map.values().next().is_some_and(Value::is_object);
    if raw_node {
        snapshot_from_value(value)
    } else {
        Ok(serde_json::from_value(value)?)
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
