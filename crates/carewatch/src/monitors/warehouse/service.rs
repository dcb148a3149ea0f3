use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::channels::{AlertFlagStore, FlagStoreError, Notifier, NotifyError, OutboundMessage};
use super::domain::WarehouseReading;
use super::message::{alert_message, query_reply};
use super::watcher::{DispenserWatcher, WatchOutcome};
use crate::monitors::clock::{Clock, SystemClock};
use crate::monitors::feeds::{kind_of, FeedError, RecordSet};

/// Result of ingesting one warehouse payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchReport {
    pub reading: WarehouseReading,
    pub outcome: WatchOutcome,
}

#[derive(Debug, Default)]
struct WatchState {
    watcher: DispenserWatcher,
    latest: WarehouseReading,
}

/// Independent subscriber to warehouse telemetry that drives alert delivery.
pub struct WarehouseAlertService<N, F> {
    notifier: Arc<N>,
    flags: Arc<F>,
    destination: String,
    clock: Arc<dyn Clock>,
    state: Mutex<WatchState>,
}

impl<N, F> WarehouseAlertService<N, F>
where
    N: Notifier + 'static,
    F: AlertFlagStore + 'static,
{
    pub fn new(notifier: Arc<N>, flags: Arc<F>, destination: impl Into<String>) -> Self {
        Self {
            notifier,
            flags,
            destination: destination.into(),
            clock: Arc::new(SystemClock),
            state: Mutex::new(WatchState::default()),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    fn state(&self) -> MutexGuard<'_, WatchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Ingest a raw warehouse node, flat or timestamped.
    pub fn ingest(&self, payload: Value) -> Result<WatchReport, WarehouseError> {
        match &payload {
            Value::Null => return Err(FeedError::Empty.into()),
            Value::Object(_) => {}
            other => return Err(FeedError::UnexpectedShape(kind_of(other)).into()),
        }

        let records = RecordSet::from_value(payload);
        if records.is_empty() {
            return Err(FeedError::Empty.into());
        }

        let reading = WarehouseReading::from_record(&records.latest);
        self.observe(reading)
    }

    /// Run the watcher over a typed reading and perform its side effects.
    pub fn observe(&self, reading: WarehouseReading) -> Result<WatchReport, WarehouseError> {
        let (previous, outcome) = {
            let mut state = self.state();
            let previous = state.watcher.previous().map(str::to_string);
            let outcome = state.watcher.observe(&reading);
            state.latest = reading.clone();
            (previous, outcome)
        };

        if outcome.dispenser_changed {
            debug!(
                from = previous.as_deref().unwrap_or("none"),
                to = reading.dispenser.as_deref().unwrap_or("none"),
                "dispenser changed"
            );
        }

        for notice in &outcome.notices {
            info!(severity = ?notice.severity, notice = notice.message, "warehouse notice");
        }

        let delivery = if outcome.notify {
            let text = alert_message(&reading, self.clock.now());
            match self.deliver(text) {
                Ok(()) => {
                    info!(destination = %self.destination, "dispenser alert sent");
                    Ok(())
                }
                Err(error) => {
                    warn!(%error, "dispenser alert delivery failed");
                    Err(error)
                }
            }
        } else {
            Ok(())
        };

        // The flag mirrors the dispenser regardless of delivery.
        if let Some(flag) = outcome.alert_flag {
            self.flags.set_alert(flag).map_err(|error| {
                warn!(%error, ?flag, "alert flag write-back failed");
                error
            })?;
        }

        delivery?;
        Ok(WatchReport { reading, outcome })
    }

    /// Answer an operator query from the latest reading and send the reply.
    pub fn answer(&self, text: &str) -> Result<String, WarehouseError> {
        let reading = self.latest();
        let reply = query_reply(&reading, text, self.clock.now());
        self.deliver(reply.clone())?;
        Ok(reply)
    }

    pub fn latest(&self) -> WarehouseReading {
        self.state().latest.clone()
    }

    fn deliver(&self, text: String) -> Result<(), NotifyError> {
        self.notifier.send(OutboundMessage {
            destination: self.destination.clone(),
            text,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WarehouseError {
    #[error(transparent)]
    Feed(#[from] FeedError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
    #[error(transparent)]
    FlagStore(#[from] FlagStoreError),
}
