use serde::{Deserialize, Serialize};

use super::domain::{Notice, WarehouseReading};

/// Value mirrored into the remote `Alert` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertFlag {
    Cleared,
    Raised,
}

impl AlertFlag {
    pub const fn value(self) -> u8 {
        match self {
            AlertFlag::Cleared => 0,
            AlertFlag::Raised => 1,
        }
    }
}

/// What the watcher decided for one reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchOutcome {
    pub dispenser_changed: bool,
    /// Flag write-back to perform, if any.
    pub alert_flag: Option<AlertFlag>,
    /// Whether the alert notification should be sent for this reading.
    pub notify: bool,
    pub notices: Vec<Notice>,
}

/// Tracks dispenser transitions and the one-shot notification latch.
///
/// A dispenser activation (`1` or `2`) raises the alert flag on every change
/// but only notifies once until the dispenser returns to `0`, which clears
/// the latch and the flag.
#[derive(Debug, Default, Clone)]
pub struct DispenserWatcher {
    previous: Option<String>,
    notified: bool,
}

impl DispenserWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, reading: &WarehouseReading) -> WatchOutcome {
        let current = reading.dispenser.clone();
        let dispenser_changed = current != self.previous;
        let mut alert_flag = None;
        let mut notify = false;

        if dispenser_changed {
            match current.as_deref() {
                Some("1") | Some("2") => {
                    notify = !self.notified;
                    self.notified = true;
                    alert_flag = Some(AlertFlag::Raised);
                }
                Some("0") => {
                    self.notified = false;
                    alert_flag = Some(AlertFlag::Cleared);
                }
                _ => {}
            }
            self.previous = current;
        } else if current.as_deref() == Some("0") && reading.alert.as_deref() != Some("0") {
            // Remote flag drifted while the dispenser stayed idle.
            alert_flag = Some(AlertFlag::Cleared);
        }

        WatchOutcome {
            dispenser_changed,
            alert_flag,
            notify,
            notices: reading.notices(),
        }
    }

    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    pub fn is_latched(&self) -> bool {
        self.notified
    }
}
