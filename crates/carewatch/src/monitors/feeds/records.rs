use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use super::normalizer::to_number;

/// One historical value of a field. `value` is numeric whenever the raw value parses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub key: String,
    pub value: Value,
}

/// A database node collapsed into its latest record plus per-field history.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordSet {
    pub latest: Map<String, Value>,
    pub series: BTreeMap<String, Vec<SeriesPoint>>,
}

impl RecordSet {
    /// Interprets a node value.
    ///
    /// An object whose first child is itself an object is a timestamped
    /// collection: children are visited in key order and the last one is the
    /// latest record. Any other object is a single record with no history, a
    /// scalar becomes `{"value": scalar}`, and `null` is empty.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::default(),
            Value::Object(map) => {
                let is_collection = map.values().next().is_some_and(Value::is_object);
                if is_collection {
                    Self::from_collection(map)
                } else {
                    Self {
                        latest: map,
                        series: BTreeMap::new(),
                    }
                }
            }
            scalar => {
                let mut latest = Map::new();
                latest.insert("value".to_string(), scalar);
                Self {
                    latest,
                    series: BTreeMap::new(),
                }
            }
        }
    }

    fn from_collection(map: Map<String, Value>) -> Self {
        let mut entries: Vec<(String, Value)> = map.into_iter().collect();
        entries.sort_by(|(left, _), (right, _)| left.cmp(right));

        let mut series: BTreeMap<String, Vec<SeriesPoint>> = BTreeMap::new();
        for (key, record) in &entries {
            let Value::Object(fields) = record else {
                continue;
            };
            for (field, raw) in fields {
                let value = to_number(raw)
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or_else(|| raw.clone());
                series.entry(field.clone()).or_default().push(SeriesPoint {
                    key: key.clone(),
                    value,
                });
            }
        }

        let latest = match entries.pop() {
            Some((_, Value::Object(fields))) => fields,
            _ => Map::new(),
        };

        Self { latest, series }
    }

    pub fn is_empty(&self) -> bool {
        self.latest.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.latest.get(field)
    }

    /// Numeric points of a field's history, skipping values that do not parse.
    pub fn numeric_series(&self, field: &str) -> Vec<f64> {
        self.series
            .get(field)
            .map(|points| points.iter().filter_map(|point| to_number(&point.value)).collect())
            .unwrap_or_default()
    }
}
