//! User domain types.
//!
//! Identity is issued by the external auth layer; this type mirrors its user
//! record so ownership checks and the notification fan-out can enumerate it.

use chrono::{DateTime, Utc};

use verdant_core::UserId;

/// A marketplace user.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}
