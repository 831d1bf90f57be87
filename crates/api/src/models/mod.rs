//! Domain models for the marketplace.
//!
//! These types represent domain objects separate from database row types.
//! Wire-facing structs serialize as camelCase JSON for the UI.

pub mod cart;
pub mod notification;
pub mod product;
pub mod user;
pub mod vendor;

pub use cart::{CartItem, CartItemWithProduct};
pub use notification::Notification;
pub use product::{Nutrition, Product, ProductWithVendor};
pub use user::User;
pub use vendor::Vendor;
