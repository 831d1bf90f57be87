//! New-product notification fan-out worker.
//!
//! Listing a product enqueues a durable `market.broadcast` row and nudges
//! this worker; the HTTP response never waits for deliveries. The worker:
//!
//! 1. claims the oldest queued broadcast (skip-locked, so concurrent workers
//!    never double-deliver),
//! 2. enumerates all user ids and inserts one unread notification per user,
//!    with bounded concurrency and per-recipient retry,
//! 3. writes delivered/failed counts back to the broadcast row.
//!
//! Queued rows survive a crash; the drain on startup resumes them.

use std::time::Duration;

use chrono::Utc;
use futures::{StreamExt, stream};
use sqlx::PgPool;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

use verdant_core::UserId;

use crate::db::broadcasts::{Broadcast, BroadcastStatus};
use crate::db::{BroadcastRepository, NotificationRepository, UserRepository};

/// Concurrent in-flight deliveries per broadcast.
const DELIVERY_CONCURRENCY: usize = 8;
/// Attempts per recipient before writing the failure to the ledger.
const DELIVERY_ATTEMPTS: u32 = 3;
/// Pause between attempts for one recipient.
const RETRY_BACKOFF: Duration = Duration::from_millis(50);
/// Fallback poll interval in case a wakeup is ever missed.
const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Format the inbox message for a newly listed product.
#[must_use]
pub fn new_product_message(product_name: &str) -> String {
    format!("New product available: {product_name}")
}

/// Resident worker draining the broadcast queue.
pub struct BroadcastWorker {
    pool: PgPool,
    wakeup: watch::Receiver<()>,
}

impl BroadcastWorker {
    /// Create a worker over the given pool and wakeup channel.
    #[must_use]
    pub const fn new(pool: PgPool, wakeup: watch::Receiver<()>) -> Self {
        Self { pool, wakeup }
    }

    /// Spawn the worker onto the runtime.
    pub fn spawn(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Run until every wakeup sender is dropped.
    async fn run(mut self) {
        info!("Broadcast worker started");
        loop {
            // Drain first so broadcasts queued before startup (or while a
            // previous run crashed) are picked up without a wakeup.
            self.drain().await;

            tokio::select! {
                changed = self.wakeup.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                () = tokio::time::sleep(POLL_INTERVAL) => {}
            }
        }
        info!("Broadcast worker stopped");
    }

    /// Process queued broadcasts until the queue is empty.
    async fn drain(&self) {
        loop {
            match BroadcastRepository::new(&self.pool).claim_next().await {
                Ok(Some(broadcast)) => self.run_broadcast(broadcast).await,
                Ok(None) => break,
                Err(e) => {
                    error!(error = %e, "Failed to claim broadcast, backing off");
                    tokio::time::sleep(POLL_INTERVAL).await;
                    break;
                }
            }
        }
    }

    /// Fan a single broadcast out to every user.
    #[instrument(skip(self, broadcast), fields(broadcast_id = broadcast.id, product = %broadcast.product_name))]
    async fn run_broadcast(&self, broadcast: Broadcast) {
        let recipients = match UserRepository::new(&self.pool).list_ids().await {
            Ok(ids) => ids,
            Err(e) => {
                error!(error = %e, "Failed to enumerate recipients");
                self.record_outcome(&broadcast, BroadcastStatus::Failed, 0, 0)
                    .await;
                return;
            }
        };

        let message = new_product_message(&broadcast.product_name);
        let total = recipients.len();

        let delivered = stream::iter(recipients)
            .map(|user_id| {
                let pool = self.pool.clone();
                let message = message.clone();
                async move { deliver(&pool, user_id, &message).await }
            })
            .buffer_unordered(DELIVERY_CONCURRENCY)
            .filter(|ok| std::future::ready(*ok))
            .count()
            .await;

        let failed = total - delivered;
        let status = if delivered == 0 && total > 0 {
            BroadcastStatus::Failed
        } else {
            BroadcastStatus::Completed
        };

        info!(total, delivered, failed, "Broadcast finished");
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        self.record_outcome(&broadcast, status, delivered as i32, failed as i32)
            .await;
    }

    /// Write the run's outcome to the broadcast ledger.
    async fn record_outcome(
        &self,
        broadcast: &Broadcast,
        status: BroadcastStatus,
        delivered: i32,
        failed: i32,
    ) {
        if let Err(e) = BroadcastRepository::new(&self.pool)
            .finish(broadcast.broadcast_id(), status, delivered, failed)
            .await
        {
            error!(error = %e, "Failed to record broadcast outcome");
        }
    }
}

/// Insert one recipient's notification, retrying transient failures.
async fn deliver(pool: &PgPool, user_id: UserId, message: &str) -> bool {
    for attempt in 1..=DELIVERY_ATTEMPTS {
        match NotificationRepository::new(pool)
            .insert(user_id, message, Utc::now())
            .await
        {
            Ok(_) => {
                debug!(%user_id, attempt, "Notification delivered");
                return true;
            }
            Err(e) if attempt < DELIVERY_ATTEMPTS => {
                warn!(%user_id, attempt, error = %e, "Delivery failed, retrying");
                tokio::time::sleep(RETRY_BACKOFF).await;
            }
            Err(e) => {
                error!(%user_id, error = %e, "Delivery failed, giving up");
            }
        }
    }
    false
}
