use serde::{Deserialize, Serialize};

/// A single entry of the console's notification feed.
///
/// Notifications are created by the backend (seeded defaults or fetched from
/// the API) and handed to the shell in insertion order. Once created, the
/// identity of a notification never changes; the shell only ever flips its
/// read flag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Notification {
    /// Unique, immutable identifier of the notification within the feed.
    pub id: u64,
    /// The text content to display to the user.
    pub text: String,
    /// Whether the user has already read this notification.
    pub is_read: bool,
}

impl Notification {
    /// Creates an unread notification with the given id and text.
    pub fn unread(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_read: false,
        }
    }

    /// Creates an already-read notification with the given id and text.
    pub fn read(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_read: true,
        }
    }
}
