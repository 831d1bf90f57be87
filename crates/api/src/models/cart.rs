//! Cart domain types.

use serde::Serialize;

use verdant_core::{CartItemId, ProductId, UserId};

use super::product::Product;

/// A line item in a user's cart.
///
/// There is no uniqueness constraint on (user, product): adding the same
/// product twice creates two rows rather than incrementing quantity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Unique cart item ID.
    pub id: CartItemId,
    /// Owning user.
    pub user_id: UserId,
    /// Referenced product. May dangle; resolution yields `null`.
    pub product_id: ProductId,
    /// Requested quantity. Not validated against stock.
    pub quantity: i32,
}

/// A cart item joined with its resolved product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemWithProduct {
    #[serde(flatten)]
    pub item: CartItem,
    pub product: Option<Product>,
}
