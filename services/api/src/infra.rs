use carewatch::monitors::cognitive::SensorSnapshot;
use carewatch::monitors::feeds::{FeedError, SnapshotSource};
use carewatch::monitors::warehouse::{
    AlertFlag, AlertFlagStore, FlagStoreError, Notifier, NotifyError, OutboundMessage,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Most recent vitals pushed by the wearable bridge.
#[derive(Default)]
pub(crate) struct LatestSnapshotCache {
    latest: RwLock<Option<SensorSnapshot>>,
}

impl LatestSnapshotCache {
    pub(crate) fn store(&self, snapshot: SensorSnapshot) {
        let mut guard = self.latest.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(snapshot);
    }
}

impl SnapshotSource for LatestSnapshotCache {
    fn latest(&self) -> Result<SensorSnapshot, FeedError> {
        let guard = self.latest.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .clone()
            .ok_or_else(|| FeedError::Unavailable("no vitals received yet".to_string()))
    }
}

/// Chat transport stand-in: every message is logged and kept for inspection.
#[derive(Default, Clone)]
pub(crate) struct LoggingNotifier {
    sent: Arc<Mutex<Vec<OutboundMessage>>>,
}

impl Notifier for LoggingNotifier {
    fn send(&self, message: OutboundMessage) -> Result<(), NotifyError> {
        if message.destination.trim().is_empty() {
            return Err(NotifyError::Rejected("no destination configured".to_string()));
        }
        info!(
            destination = %message.destination,
            text = %message.text,
            "outbound chat message"
        );
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
        Ok(())
    }
}

impl LoggingNotifier {
    pub(crate) fn messages(&self) -> Vec<OutboundMessage> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// In-process mirror of the remote `Alert` field.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAlertFlags {
    current: Arc<Mutex<Option<AlertFlag>>>,
}

impl AlertFlagStore for InMemoryAlertFlags {
    fn set_alert(&self, flag: AlertFlag) -> Result<(), FlagStoreError> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(flag);
        Ok(())
    }
}

impl InMemoryAlertFlags {
    pub(crate) fn current(&self) -> Option<AlertFlag> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
