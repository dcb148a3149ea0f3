use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::monitors::feeds::{field_text, to_number};

/// Fields published by the warehouse controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WarehouseField {
    Dispenser,
    Door,
    Fan,
    Gas,
    Humidity,
    Pin,
    Temperature,
    Weight1,
    Weight2,
    Alert,
}

impl WarehouseField {
    pub const ALL: [WarehouseField; 10] = [
        WarehouseField::Dispenser,
        WarehouseField::Door,
        WarehouseField::Fan,
        WarehouseField::Gas,
        WarehouseField::Humidity,
        WarehouseField::Pin,
        WarehouseField::Temperature,
        WarehouseField::Weight1,
        WarehouseField::Weight2,
        WarehouseField::Alert,
    ];

    /// Key used in the database node.
    pub const fn key(self) -> &'static str {
        match self {
            WarehouseField::Dispenser => "Dispenser",
            WarehouseField::Door => "Door",
            WarehouseField::Fan => "Fan",
            WarehouseField::Gas => "Gas",
            WarehouseField::Humidity => "Humidity",
            WarehouseField::Pin => "Pin",
            WarehouseField::Temperature => "Temperature",
            WarehouseField::Weight1 => "Weight1",
            WarehouseField::Weight2 => "Weight2",
            WarehouseField::Alert => "Alert",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            WarehouseField::Dispenser => "💧",
            WarehouseField::Door => "🚪",
            WarehouseField::Fan => "🌀",
            WarehouseField::Gas => "🔥",
            WarehouseField::Humidity => "💨",
            WarehouseField::Pin => "🔐",
            WarehouseField::Temperature => "🌡️",
            WarehouseField::Weight1 | WarehouseField::Weight2 => "⚖️",
            WarehouseField::Alert => "📊",
        }
    }

    /// Case-insensitive lookup of an operator query. `dispensor` is accepted.
    pub fn from_query(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "dispenser" | "dispensor" => Some(WarehouseField::Dispenser),
            "door" => Some(WarehouseField::Door),
            "fan" => Some(WarehouseField::Fan),
            "gas" => Some(WarehouseField::Gas),
            "humidity" => Some(WarehouseField::Humidity),
            "pin" => Some(WarehouseField::Pin),
            "temperature" => Some(WarehouseField::Temperature),
            "weight1" => Some(WarehouseField::Weight1),
            "weight2" => Some(WarehouseField::Weight2),
            "alert" => Some(WarehouseField::Alert),
            _ => None,
        }
    }

    /// Human rendering of a raw value: units for measurements, words for switches.
    pub fn format(self, value: &str) -> String {
        match self {
            WarehouseField::Temperature => format!("{value}°C"),
            WarehouseField::Humidity => format!("{value}%"),
            WarehouseField::Weight1 | WarehouseField::Weight2 => format!("{value} kg"),
            WarehouseField::Door => switch_label(value, "Closed", "Open"),
            WarehouseField::Fan | WarehouseField::Dispenser => switch_label(value, "OFF", "ON"),
            WarehouseField::Gas | WarehouseField::Pin | WarehouseField::Alert => value.to_string(),
        }
    }
}

fn switch_label(value: &str, off: &str, on: &str) -> String {
    let label = if value == "0" { off } else { on };
    label.to_string()
}

/// Latest warehouse record with every value kept as display text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseReading {
    pub dispenser: Option<String>,
    pub door: Option<String>,
    pub fan: Option<String>,
    pub gas: Option<String>,
    pub humidity: Option<String>,
    pub pin: Option<String>,
    pub temperature: Option<String>,
    pub weight1: Option<String>,
    pub weight2: Option<String>,
    pub alert: Option<String>,
}

impl WarehouseReading {
    pub fn from_record(record: &Map<String, Value>) -> Self {
        let text = |field: WarehouseField| record.get(field.key()).and_then(field_text);
        Self {
            dispenser: text(WarehouseField::Dispenser),
            door: text(WarehouseField::Door),
            fan: text(WarehouseField::Fan),
            gas: text(WarehouseField::Gas),
            humidity: text(WarehouseField::Humidity),
            pin: text(WarehouseField::Pin),
            temperature: text(WarehouseField::Temperature),
            weight1: text(WarehouseField::Weight1),
            weight2: text(WarehouseField::Weight2),
            alert: text(WarehouseField::Alert),
        }
    }

    pub fn get(&self, field: WarehouseField) -> Option<&str> {
        let value = match field {
            WarehouseField::Dispenser => &self.dispenser,
            WarehouseField::Door => &self.door,
            WarehouseField::Fan => &self.fan,
            WarehouseField::Gas => &self.gas,
            WarehouseField::Humidity => &self.humidity,
            WarehouseField::Pin => &self.pin,
            WarehouseField::Temperature => &self.temperature,
            WarehouseField::Weight1 => &self.weight1,
            WarehouseField::Weight2 => &self.weight2,
            WarehouseField::Alert => &self.alert,
        };
        value.as_deref()
    }

    fn is(&self, field: WarehouseField, expected: &str) -> bool {
        self.get(field) == Some(expected)
    }

    /// Operator notices raised by this reading, in display order.
    pub fn notices(&self) -> Vec<Notice> {
        let mut notices = Vec::new();
        if self.is(WarehouseField::Gas, "1") {
            notices.push(Notice::error("🔥 GAS LEAK DETECTED! Immediate attention required!"));
        }
        if self.is(WarehouseField::Door, "2") {
            notices.push(Notice::error("⚠️ Pressed Wrong Pattern!"));
        }
        if self.is(WarehouseField::Fan, "1") {
            notices.push(Notice::success("🌀 Fan is ON"));
        }
        if self.is(WarehouseField::Door, "1") {
            notices.push(Notice::info("🚪 Door is ON"));
        }
        notices
    }

    /// Dashboard status of a field, `None` when the field has no value.
    pub fn status(&self, field: WarehouseField) -> Option<FieldStatus> {
        let value = self.get(field)?;
        let number = to_number(&Value::String(value.to_string()));
        let status = match field {
            WarehouseField::Door if value == "0" => FieldStatus::Closed,
            WarehouseField::Door => FieldStatus::Open,
            WarehouseField::Fan | WarehouseField::Dispenser if value == "0" => FieldStatus::Off,
            WarehouseField::Fan | WarehouseField::Dispenser => FieldStatus::On,
            WarehouseField::Temperature => banded(number, 15.0, 35.0),
            WarehouseField::Humidity => banded(number, 30.0, 70.0),
            WarehouseField::Gas => match number {
                Some(level) if level > 100.0 => FieldStatus::Danger,
                _ => FieldStatus::Safe,
            },
            WarehouseField::Pin
            | WarehouseField::Weight1
            | WarehouseField::Weight2
            | WarehouseField::Alert => FieldStatus::Normal,
        };
        Some(status)
    }
}

fn banded(value: Option<f64>, low: f64, high: f64) -> FieldStatus {
    match value {
        Some(v) if v > high => FieldStatus::High,
        Some(v) if v < low => FieldStatus::Low,
        _ => FieldStatus::Normal,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    Open,
    Closed,
    On,
    Off,
    Low,
    Normal,
    High,
    Safe,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeSeverity {
    Error,
    Success,
    Info,
}

/// Short operator-facing toast raised by a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub message: &'static str,
}

impl Notice {
    const fn error(message: &'static str) -> Self {
        Self {
            severity: NoticeSeverity::Error,
            message,
        }
    }

    const fn success(message: &'static str) -> Self {
        Self {
            severity: NoticeSeverity::Success,
            message,
        }
    }

    const fn info(message: &'static str) -> Self {
        Self {
            severity: NoticeSeverity::Info,
            message,
        }
    }
}
