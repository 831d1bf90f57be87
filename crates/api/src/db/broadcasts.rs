//! Database operations for new-product broadcasts (durable fan-out queue).
//!
//! A broadcast row is enqueued when a vendor lists a product and consumed by
//! the resident worker in `services::broadcast`. The row carries its own
//! delivered/failed ledger, so a partial fan-out is visible after the fact.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use verdant_core::{BroadcastId, ProductId};

use super::RepositoryError;

/// Status of a broadcast fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "broadcast_status", rename_all = "lowercase")]
pub enum BroadcastStatus {
    Queued,
    Running,
    Completed,
    Failed,
}

/// A queued or finished new-product broadcast.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Broadcast {
    /// Primary key.
    pub id: i32,
    /// Product that triggered the fan-out.
    pub product_id: i32,
    /// Product name captured at enqueue time.
    pub product_name: String,
    /// Current status.
    pub status: BroadcastStatus,
    /// Recipients delivered so far.
    pub delivered: i32,
    /// Recipients that exhausted their retries.
    pub failed: i32,
    /// When the broadcast was enqueued.
    pub enqueued_at: DateTime<Utc>,
    /// When a worker claimed it.
    pub started_at: Option<DateTime<Utc>>,
    /// When the fan-out finished.
    pub finished_at: Option<DateTime<Utc>>,
}

impl Broadcast {
    /// Typed broadcast ID.
    #[must_use]
    pub const fn broadcast_id(&self) -> BroadcastId {
        BroadcastId::new(self.id)
    }
}

/// Repository for broadcast queue operations.
pub struct BroadcastRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BroadcastRepository<'a> {
    /// Create a new broadcast repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Enqueue a fan-out for a freshly listed product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn enqueue(
        &self,
        product_id: ProductId,
        product_name: &str,
    ) -> Result<BroadcastId, RepositoryError> {
        let (id,): (i32,) = sqlx::query_as(
            r"
            INSERT INTO market.broadcast (product_id, product_name)
            VALUES ($1, $2)
            RETURNING id
            ",
        )
        .bind(product_id.as_i32())
        .bind(product_name)
        .fetch_one(self.pool)
        .await?;

        Ok(BroadcastId::new(id))
    }

    /// Claim the oldest queued broadcast, marking it running.
    ///
    /// `FOR UPDATE SKIP LOCKED` makes the claim safe under concurrent
    /// workers: each queued row is handed to at most one of them.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn claim_next(&self) -> Result<Option<Broadcast>, RepositoryError> {
        let row = sqlx::query_as::<_, Broadcast>(
            r"
            UPDATE market.broadcast
            SET status = 'running', started_at = now()
            WHERE id = (
                SELECT id FROM market.broadcast
                WHERE status = 'queued'
                ORDER BY id
                LIMIT 1
                FOR UPDATE SKIP LOCKED
            )
            RETURNING id, product_id, product_name, status, delivered, failed,
                      enqueued_at, started_at, finished_at
            ",
        )
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Record the outcome of a fan-out run.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn finish(
        &self,
        id: BroadcastId,
        status: BroadcastStatus,
        delivered: i32,
        failed: i32,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            UPDATE market.broadcast
            SET status = $2, delivered = $3, failed = $4, finished_at = now()
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .bind(status)
        .bind(delivered)
        .bind(failed)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_status_eq() {
        assert_eq!(BroadcastStatus::Queued, BroadcastStatus::Queued);
        assert_ne!(BroadcastStatus::Queued, BroadcastStatus::Running);
        assert_ne!(BroadcastStatus::Completed, BroadcastStatus::Failed);
    }

    #[test]
    fn test_broadcast_status_debug() {
        let status = BroadcastStatus::Running;
        assert!(format!("{status:?}").contains("Running"));
    }
}
