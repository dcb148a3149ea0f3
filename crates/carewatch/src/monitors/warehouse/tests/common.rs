use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::monitors::clock::FixedClock;
use crate::monitors::warehouse::channels::{
    AlertFlagStore, FlagStoreError, Notifier, NotifyError, OutboundMessage,
};
use crate::monitors::warehouse::service::WarehouseAlertService;
use crate::monitors::warehouse::watcher::AlertFlag;

#[derive(Default)]
pub(super) struct RecordingNotifier {
    pub(super) sent: Mutex<Vec<OutboundMessage>>,
}

impl RecordingNotifier {
    pub(super) fn messages(&self) -> Vec<OutboundMessage> {
        self.sent.lock().expect("notifier mutex").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn send(&self, message: OutboundMessage) -> Result<(), NotifyError> {
        self.sent.lock().expect("notifier mutex").push(message);
        Ok(())
    }
}

pub(super) struct OfflineNotifier;

impl Notifier for OfflineNotifier {
    fn send(&self, _message: OutboundMessage) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("bot api timeout".to_string()))
    }
}

#[derive(Default)]
pub(super) struct RecordingFlags {
    pub(super) writes: Mutex<Vec<AlertFlag>>,
}

impl RecordingFlags {
    pub(super) fn writes(&self) -> Vec<AlertFlag> {
        self.writes.lock().expect("flag mutex").clone()
    }
}

impl AlertFlagStore for RecordingFlags {
    fn set_alert(&self, flag: AlertFlag) -> Result<(), FlagStoreError> {
        self.writes.lock().expect("flag mutex").push(flag);
        Ok(())
    }
}

pub(super) struct ReadOnlyFlags;

impl AlertFlagStore for ReadOnlyFlags {
    fn set_alert(&self, _flag: AlertFlag) -> Result<(), FlagStoreError> {
        Err(FlagStoreError::Unavailable("permission denied".to_string()))
    }
}

pub(super) type RecordingService = WarehouseAlertService<RecordingNotifier, RecordingFlags>;

pub(super) fn build_service() -> (Arc<RecordingService>, Arc<RecordingNotifier>, Arc<RecordingFlags>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let flags = Arc::new(RecordingFlags::default());
    let clock = FixedClock(
        Utc.with_ymd_and_hms(2025, 6, 2, 14, 5, 9)
            .single()
            .expect("valid timestamp"),
    );
    let service = WarehouseAlertService::new(notifier.clone(), flags.clone(), "ops-chat")
        .with_clock(Arc::new(clock));
    (Arc::new(service), notifier, flags)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body bytes");
    serde_json::from_slice(&bytes).expect("json body")
}
