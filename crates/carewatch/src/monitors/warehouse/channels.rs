use serde::{Deserialize, Serialize};

use super::watcher::AlertFlag;

/// Text message addressed to a messaging-channel destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub destination: String,
    pub text: String,
}

/// Outbound messaging channel (chat bot, e-mail relay, ...).
pub trait Notifier: Send + Sync {
    fn send(&self, message: OutboundMessage) -> Result<(), NotifyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
    #[error("notification rejected: {0}")]
    Rejected(String),
}

/// Write-back of the `Alert` flag to the realtime database.
pub trait AlertFlagStore: Send + Sync {
    fn set_alert(&self, flag: AlertFlag) -> Result<(), FlagStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FlagStoreError {
    #[error("alert flag store unavailable: {0}")]
    Unavailable(String),
}
