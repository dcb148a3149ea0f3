//! Sensor feed normalization, cognitive risk screening, warehouse alerting,
//! and site environment and charging monitors.

pub mod config;
pub mod error;
pub mod monitors;
pub mod telemetry;
