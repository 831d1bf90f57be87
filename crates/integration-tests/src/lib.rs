//! Integration tests for Verdant Market.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p verdant-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `api_errors` - Error taxonomy and HTTP status mapping
//! - `broadcast_queue` - Fan-out queue statuses and message format
//! - `notification_ordering` - Inbox ordering invariants
//! - `wire_format` - JSON shapes consumed by the UI
//!
//! Tests here run against the library crates without a database or a
//! running server; everything that needs live `PostgreSQL` goes through
//! `verdant-cli migrate` + manual verification for now.

use chrono::{DateTime, Utc};

use verdant_api::models::{Notification, Nutrition, Product};
use verdant_core::{NotificationId, ProductId, UserId, VendorId};

/// Build a product with plausible defaults for wire-shape tests.
#[must_use]
pub fn sample_product(id: i32) -> Product {
    Product {
        id: ProductId::new(id),
        name: "Rainbow Chard".to_string(),
        description: "Freshly cut, colorful stems".to_string(),
        price: 3.49,
        category: "Vegetables".to_string(),
        images: vec!["https://img.verdant.market/chard.jpg".to_string()],
        stock: 12,
        is_new: true,
        vendor_id: VendorId::new(1),
        unit: "bunch".to_string(),
        nutrition: Some(Nutrition {
            calories: 19.0,
            protein: 1.8,
            carbs: 3.7,
            fat: 0.2,
        }),
        origin: "Valley City".to_string(),
        organic: true,
        created_at: ts(1_700_000_000),
    }
}

/// Build a notification owned by `user_id` at the given epoch second.
#[must_use]
pub fn sample_notification(id: i32, user_id: i32, epoch_secs: i64) -> Notification {
    Notification {
        id: NotificationId::new(id),
        user_id: UserId::new(user_id),
        message: "New product available: Rainbow Chard".to_string(),
        read: false,
        created_at: ts(epoch_secs),
    }
}

/// Epoch-second timestamp helper.
///
/// # Panics
///
/// Panics when the timestamp is out of range; test inputs are fixed, so
/// this cannot happen in practice.
#[must_use]
pub fn ts(epoch_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(epoch_secs, 0).expect("valid timestamp")
}
