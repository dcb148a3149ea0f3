//! Charging-station power metrics.
//!
//! The station writes an open-ended set of fields, either as one record or as
//! a timestamped collection. Nothing is assumed about the field names beyond
//! `current` and `voltage`, which drive the waveform amplitude, and `relay`,
//! which is a switch and never charted.

pub mod domain;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{ChargingView, ChartSeries};
pub use router::charging_router;
pub use service::ChargingStation;
