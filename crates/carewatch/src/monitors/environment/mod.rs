//! Soil and climate monitoring for the FPGA environmental node.
//!
//! The node publishes one flat record per update. Each record is typed into
//! an [`EnvironmentReading`], classified (pH band, soil condition) and kept
//! in a bounded rolling [`ReadingHistory`] for trend charts.

pub mod domain;
pub mod history;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{EnvironmentReading, PhLabel, SoilCondition};
pub use history::{HistoryPoint, ReadingHistory, HISTORY_CAPACITY};
pub use router::environment_router;
pub use service::{EnvironmentMonitor, EnvironmentStatus};
