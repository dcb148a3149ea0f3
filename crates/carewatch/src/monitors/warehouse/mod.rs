//! Warehouse security telemetry alerting.
//!
//! Runs independently of cognitive screening. Each reading goes through the
//! [`DispenserWatcher`], which decides whether to notify operators and what
//! to write back to the remote `Alert` flag; the service performs those side
//! effects through the [`Notifier`] and [`AlertFlagStore`] collaborators.

pub mod channels;
pub mod domain;
pub mod message;
pub mod router;
pub mod service;
pub mod watcher;

#[cfg(test)]
mod tests;

pub use channels::{AlertFlagStore, FlagStoreError, Notifier, NotifyError, OutboundMessage};
pub use domain::{FieldStatus, Notice, NoticeSeverity, WarehouseField, WarehouseReading};
pub use message::{alert_message, query_reply, snapshot_message};
pub use router::warehouse_router;
pub use service::{WarehouseAlertService, WarehouseError, WatchReport};
pub use watcher::{AlertFlag, DispenserWatcher, WatchOutcome};
