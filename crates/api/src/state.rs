//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::watch;

use crate::config::MarketConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: MarketConfig,
    pool: PgPool,
    broadcast_tx: watch::Sender<()>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Marketplace configuration
    /// * `pool` - `PostgreSQL` connection pool
    /// * `broadcast_tx` - Wakeup channel for the broadcast worker
    #[must_use]
    pub fn new(config: MarketConfig, pool: PgPool, broadcast_tx: watch::Sender<()>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                broadcast_tx,
            }),
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &MarketConfig {
        &self.inner.config
    }

    /// Get the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Wake the broadcast worker to pick up newly queued fan-outs.
    ///
    /// A send failure means the worker has shut down; queued rows are then
    /// picked up on the next startup scan, so the error is ignored.
    pub fn wake_broadcast_worker(&self) {
        let _ = self.inner.broadcast_tx.send(());
    }
}
