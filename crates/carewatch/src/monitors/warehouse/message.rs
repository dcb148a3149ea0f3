use chrono::{DateTime, Utc};

use super::domain::{WarehouseField, WarehouseReading};

const MISSING: &str = "N/A";

fn time_label(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn raw(reading: &WarehouseReading, field: WarehouseField) -> String {
    reading.get(field).unwrap_or(MISSING).to_string()
}

fn formatted(reading: &WarehouseReading, field: WarehouseField) -> String {
    reading
        .get(field)
        .map(|value| field.format(value))
        .unwrap_or_else(|| MISSING.to_string())
}

fn measured(reading: &WarehouseReading, field: WarehouseField, unit: &str) -> String {
    reading
        .get(field)
        .map(|value| format!("{value}{unit}"))
        .unwrap_or_else(|| MISSING.to_string())
}

/// Notification sent when the dispenser activates.
pub fn alert_message(reading: &WarehouseReading, at: DateTime<Utc>) -> String {
    use WarehouseField::*;

    let lines = [
        format!("{} Dispenser: {}", Dispenser.icon(), raw(reading, Dispenser)),
        format!("{} Door: {}", Door.icon(), raw(reading, Door)),
        format!("{} Fan: {}", Fan.icon(), raw(reading, Fan)),
        format!("{} Gas: {}", Gas.icon(), raw(reading, Gas)),
        format!("{} Humidity: {}", Humidity.icon(), measured(reading, Humidity, "%")),
        format!("{} Pin: {}", Pin.icon(), raw(reading, Pin)),
        format!(
            "{} Temperature: {}",
            Temperature.icon(),
            measured(reading, Temperature, "°C")
        ),
        format!("{} Weight1: {}", Weight1.icon(), measured(reading, Weight1, " kg")),
        format!("{} Weight2: {}", Weight2.icon(), measured(reading, Weight2, " kg")),
    ];

    format!(
        "🏭 WareHouse Data Alert\n\n{}\n\n⏰ Time: {}",
        lines.join("\n"),
        time_label(at)
    )
}

/// Full snapshot sent for `all` and `/start`.
pub fn snapshot_message(reading: &WarehouseReading, at: DateTime<Utc>) -> String {
    let lines: Vec<String> = WarehouseField::ALL
        .iter()
        .filter(|field| **field != WarehouseField::Alert)
        .map(|field| {
            let value = match field {
                WarehouseField::Gas | WarehouseField::Pin => raw(reading, *field),
                _ => formatted(reading, *field),
            };
            format!("{} {}: {}", field.icon(), field.key(), value)
        })
        .collect();

    format!(
        "🏭 WareHouse Data\n\n{}\n\n⏰ {}\n\nType field name (e.g., \"Dispensor\", \"Gas\", \"Fan\") to get specific value.",
        lines.join("\n"),
        time_label(at)
    )
}

/// Reply to an operator's chat query.
pub fn query_reply(reading: &WarehouseReading, text: &str, at: DateTime<Utc>) -> String {
    let text = text.trim();

    if let Some(field) = WarehouseField::from_query(text) {
        if let Some(value) = reading.get(field) {
            return format!("{} {}: {}", field.icon(), field.key(), field.format(value));
        }
    }

    if text.eq_ignore_ascii_case("all") || text == "/start" {
        return snapshot_message(reading, at);
    }

    format!(
        "❓ Unknown field \"{text}\". Try: Dispensor, Gas, Fan, Temperature, Humidity, Door, Pin, Weight1, Weight2, or type \"all\" for all data."
    )
}
