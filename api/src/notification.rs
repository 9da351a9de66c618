//! Shared notification types that cross the server-function boundary.

use serde::Deserialize;
use serde::Serialize;

/// Identifier handed back for every scheduled notification.
///
/// Ids are unique within a server process and strictly increasing, so
/// two presses of the trigger button are always two distinct
/// notifications.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Content of a local notification.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    /// The canned reminder the home screen's trigger button schedules.
    pub fn reminder() -> Self {
        Self {
            title: "PocketBank".to_string(),
            body: "You have a new notification.".to_string(),
        }
    }
}
