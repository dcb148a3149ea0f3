use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::EnvironmentReading;

/// Readings kept for trend charts.
pub const HISTORY_CAPACITY: usize = 20;

/// Chart sample taken from one reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPoint {
    pub time: Option<DateTime<Utc>>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub soil_moisture: Option<f64>,
    pub ph: Option<f64>,
    pub ph_raw: Option<f64>,
}

impl From<&EnvironmentReading> for HistoryPoint {
    fn from(reading: &EnvironmentReading) -> Self {
        Self {
            time: reading.updated_at(),
            temperature: reading.temperature_c,
            humidity: reading.humidity_pct,
            soil_moisture: reading.soil_digital,
            ph: reading.ph_value,
            ph_raw: reading.ph_raw,
        }
    }
}

/// Fixed-size window of the most recent samples, oldest first.
#[derive(Debug, Clone)]
pub struct ReadingHistory {
    capacity: usize,
    points: VecDeque<HistoryPoint>,
}

impl Default for ReadingHistory {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

impl ReadingHistory {
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            points: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, point: HistoryPoint) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn points(&self) -> Vec<HistoryPoint> {
        self.points.iter().cloned().collect()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(temperature: f64) -> HistoryPoint {
        HistoryPoint::from(&EnvironmentReading {
            temperature_c: Some(temperature),
            ..EnvironmentReading::default()
        })
    }

    #[test]
    fn oldest_samples_fall_out_of_the_window() {
        let mut history = ReadingHistory::default();
        for step in 0..25u8 {
            history.push(sample(f64::from(step)));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        let temperatures: Vec<Option<f64>> = history
            .points()
            .iter()
            .map(|point| point.temperature)
            .collect();
        assert_eq!(temperatures.first(), Some(&Some(5.0)));
        assert_eq!(temperatures.last(), Some(&Some(24.0)));
    }

    #[test]
    fn zero_capacity_still_keeps_the_latest_sample() {
        let mut history = ReadingHistory::new(0);
        history.push(sample(20.0));
        history.push(sample(21.0));

        assert_eq!(history.capacity(), 1);
        assert_eq!(history.points()[0].temperature, Some(21.0));
    }
}
