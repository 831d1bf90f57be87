//! Database operations for the marketplace `PostgreSQL`.
//!
//! # Schema: `market`
//!
//! ## Tables
//!
//! - `user` - Identity records mirrored from the external auth layer
//! - `vendor` - Vendor profiles (unique per user)
//! - `product` - Catalog products
//! - `cart_item` - Per-user cart line items
//! - `notification` - Per-user inbox
//! - `broadcast` - Durable new-product fan-out queue and ledger
//!
//! All queries use the runtime query API (`sqlx::query_as` with `FromRow`
//! row types), so the workspace builds without a live database.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p verdant-cli -- migrate
//! ```

pub mod broadcasts;
pub mod cart;
pub mod notifications;
pub mod products;
pub mod users;
pub mod vendors;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use broadcasts::BroadcastRepository;
pub use cart::CartRepository;
pub use notifications::NotificationRepository;
pub use products::ProductRepository;
pub use users::UserRepository;
pub use vendors::VendorRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique owning user on vendors).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
