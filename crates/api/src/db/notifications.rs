//! Notification repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use verdant_core::{NotificationId, UserId};

use super::RepositoryError;
use crate::models::Notification;

/// Internal row type for notification queries.
#[derive(Debug, sqlx::FromRow)]
struct NotificationRow {
    id: i32,
    user_id: i32,
    message: String,
    read: bool,
    created_at: DateTime<Utc>,
}

impl From<NotificationRow> for Notification {
    fn from(row: NotificationRow) -> Self {
        Self {
            id: NotificationId::new(row.id),
            user_id: UserId::new(row.user_id),
            message: row.message,
            read: row.read,
            created_at: row.created_at,
        }
    }
}

/// Repository for notification database operations.
pub struct NotificationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> NotificationRepository<'a> {
    /// Create a new notification repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a user's notifications, newest first.
    ///
    /// `id DESC` breaks `created_at` ties, so the order is a strict total
    /// order with insertion order as the stable secondary key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Notification>, RepositoryError> {
        let rows = sqlx::query_as::<_, NotificationRow>(
            r"
            SELECT id, user_id, message, read, created_at
            FROM market.notification
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(user_id.as_i32())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Mark a notification read, scoped to its owner.
    ///
    /// The single guarded UPDATE means "absent" and "owned by someone else"
    /// both come back as `NotFound`; callers cannot probe for existence.
    /// Marking an already-read notification succeeds silently.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row matches.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn mark_read(
        &self,
        id: NotificationId,
        user_id: UserId,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE market.notification
            SET read = true
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(id.as_i32())
        .bind(user_id.as_i32())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Insert an unread notification for a user.
    ///
    /// Used by the broadcast worker; one insert per recipient.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(
        &self,
        user_id: UserId,
        message: &str,
        created_at: DateTime<Utc>,
    ) -> Result<NotificationId, RepositoryError> {
        let (id,): (i32,) = sqlx::query_as(
            r"
            INSERT INTO market.notification (user_id, message, read, created_at)
            VALUES ($1, $2, false, $3)
            RETURNING id
            ",
        )
        .bind(user_id.as_i32())
        .bind(message)
        .bind(created_at)
        .fetch_one(self.pool)
        .await?;

        Ok(NotificationId::new(id))
    }
}
