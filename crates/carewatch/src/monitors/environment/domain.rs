use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::monitors::feeds::{field_text, to_number};

const DHT_STATUS: &str = "DHT_Status";
const TEMPERATURE: &str = "Temp_C";
const HUMIDITY: &str = "Humidity_Pct";
const SOIL_DIGITAL: &str = "Soil_Digital";
const SOIL_IS_DRY: &str = "Soil_IsDry";
const SOIL_IS_WET: &str = "Soil_IsWet";
const RELAY_ON: &str = "Relay_On";
const PH_RAW: &str = "pH_Raw";
const PH_VALUE: &str = "pH_Value";
const LAST_UPDATE_MS: &str = "Last_Update_ms";

/// Acidity band of a pH value, split at exactly 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhLabel {
    Acidic,
    Neutral,
    Alkaline,
}

impl PhLabel {
    pub fn classify(ph: f64) -> Self {
        if ph < 7.0 {
            PhLabel::Acidic
        } else if ph > 7.0 {
            PhLabel::Alkaline
        } else {
            PhLabel::Neutral
        }
    }
}

/// Soil condition derived from the moisture sensor's dry and wet outputs. Dry wins when both are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SoilCondition {
    Dry,
    Wet,
    Normal,
}

impl SoilCondition {
    pub fn from_flags(is_dry: bool, is_wet: bool) -> Self {
        match (is_dry, is_wet) {
            (true, _) => SoilCondition::Dry,
            (false, true) => SoilCondition::Wet,
            (false, false) => SoilCondition::Normal,
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            SoilCondition::Dry => "🏜️",
            SoilCondition::Wet => "💦",
            SoilCondition::Normal => "🌿",
        }
    }
}

/// One record from the environmental node. Missing numeric fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentReading {
    pub dht_status: Option<String>,
    pub temperature_c: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub soil_digital: Option<f64>,
    pub soil_is_dry: bool,
    pub soil_is_wet: bool,
    pub relay_on: bool,
    pub ph_raw: Option<f64>,
    pub ph_value: Option<f64>,
    pub last_update_ms: Option<i64>,
}

impl EnvironmentReading {
    pub fn from_record(record: &Map<String, Value>) -> Self {
        let number = |key: &str| record.get(key).and_then(to_number);
        let flag = |key: &str| record.get(key).is_some_and(is_set);
        Self {
            dht_status: record.get(DHT_STATUS).and_then(field_text),
            temperature_c: number(TEMPERATURE),
            humidity_pct: number(HUMIDITY),
            soil_digital: number(SOIL_DIGITAL),
            soil_is_dry: flag(SOIL_IS_DRY),
            soil_is_wet: flag(SOIL_IS_WET),
            relay_on: flag(RELAY_ON),
            ph_raw: number(PH_RAW),
            ph_value: number(PH_VALUE),
            last_update_ms: number(LAST_UPDATE_MS).map(|ms| ms as i64),
        }
    }

    pub fn ph_label(&self) -> Option<PhLabel> {
        self.ph_value.map(PhLabel::classify)
    }

    pub fn soil_condition(&self) -> SoilCondition {
        SoilCondition::from_flags(self.soil_is_dry, self.soil_is_wet)
    }

    /// Device update time. A zero or out-of-range stamp means "not reported".
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.last_update_ms
            .filter(|ms| *ms != 0)
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }
}

/// Switch outputs arrive as booleans, `0`/`1`, or `"true"`/`"false"`.
fn is_set(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => matches!(text.trim().to_ascii_lowercase().as_str(), "true" | "1" | "on"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn ph_splits_at_seven() {
        assert_eq!(PhLabel::classify(6.99), PhLabel::Acidic);
        assert_eq!(PhLabel::classify(7.0), PhLabel::Neutral);
        assert_eq!(PhLabel::classify(7.01), PhLabel::Alkaline);
        assert_eq!(PhLabel::classify(0.0), PhLabel::Acidic);
    }

    #[test]
    fn dry_soil_takes_precedence_over_wet() {
        assert_eq!(SoilCondition::from_flags(true, true), SoilCondition::Dry);
        assert_eq!(SoilCondition::from_flags(false, true), SoilCondition::Wet);
        assert_eq!(SoilCondition::from_flags(false, false), SoilCondition::Normal);
        assert_eq!(serde_json::to_value(SoilCondition::Wet).expect("serialize"), json!("WET"));
    }

    #[test]
    fn record_fields_are_typed() {
        let reading = EnvironmentReading::from_record(&record(json!({
            "DHT_Status": "OK",
            "Temp_C": "24.5",
            "Humidity_Pct": 61,
            "Soil_Digital": 1,
            "Soil_IsDry": false,
            "Soil_IsWet": "true",
            "Relay_On": 1,
            "pH_Raw": 2048,
            "pH_Value": 7.4,
            "Last_Update_ms": 1717336800000u64
        })));

        assert_eq!(reading.dht_status.as_deref(), Some("OK"));
        assert_eq!(reading.temperature_c, Some(24.5));
        assert_eq!(reading.humidity_pct, Some(61.0));
        assert!(reading.soil_is_wet);
        assert!(!reading.soil_is_dry);
        assert!(reading.relay_on);
        assert_eq!(reading.ph_label(), Some(PhLabel::Alkaline));
        assert_eq!(reading.soil_condition(), SoilCondition::Wet);
        assert_eq!(
            reading.updated_at().map(|at| at.to_rfc3339()),
            Some("2024-06-02T14:00:00+00:00".to_string())
        );
    }

    #[test]
    fn missing_fields_stay_unset() {
        let reading = EnvironmentReading::from_record(&record(json!({"Temp_C": "n/a", "Last_Update_ms": 0})));

        assert_eq!(reading.temperature_c, None);
        assert_eq!(reading.ph_label(), None);
        assert_eq!(reading.soil_condition(), SoilCondition::Normal);
        assert!(!reading.relay_on);
        assert_eq!(reading.updated_at(), None);
    }
}
