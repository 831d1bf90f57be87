//! Notification domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use verdant_core::{NotificationId, UserId};

/// An inbox notification. Created unread by the broadcast fan-out and
/// mutated once (the read flag) by its owner.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification ID.
    pub id: NotificationId,
    /// Owning user.
    pub user_id: UserId,
    /// Human-readable message.
    pub message: String,
    /// Whether the owner has marked it read.
    pub read: bool,
    /// Creation time, serialized as epoch milliseconds for the UI.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}
