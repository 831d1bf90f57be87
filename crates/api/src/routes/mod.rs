//! HTTP route handlers for the marketplace API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Liveness check
//! GET  /health/ready            - Readiness check (verifies database)
//!
//! # Vendors
//! GET  /vendors                 - List all vendors (no auth)
//! GET  /vendors/me              - Caller's vendor profile or null
//! POST /vendors                 - Register a vendor profile (one per user)
//!
//! # Catalog
//! GET  /products                - List products with resolved vendors
//! POST /products                - Add a product (vendors only, queues fan-out)
//!
//! # Cart
//! GET  /cart                    - Caller's cart with resolved products
//! POST /cart                    - Add a line item
//!
//! # Notifications
//! GET  /notifications           - Caller's inbox, newest first
//! POST /notifications/{id}/read - Mark one notification read
//! ```

pub mod cart;
pub mod notifications;
pub mod products;
pub mod vendors;

use axum::Router;

use crate::state::AppState;

/// Build the combined application router.
#[must_use]
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(vendors::router())
        .merge(products::router())
        .merge(cart::router())
        .merge(notifications::router())
}
