//! Cart handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};

use verdant_core::{CartItemId, ProductId};

use crate::db::CartRepository;
use crate::error::AppError;
use crate::middleware::{CurrentUser, RequireUser};
use crate::models::CartItemWithProduct;
use crate::state::AppState;

/// Build the cart router.
pub fn router() -> Router<AppState> {
    Router::new().route("/cart", get(get_cart).post(add_to_cart))
}

/// Request for adding a line item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub quantity: i32,
}

/// Response carrying a newly created record's identifier.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: CartItemId,
}

/// Add a line item to the caller's cart.
///
/// No validation that the product exists, that quantity is positive, or
/// that stock suffices; each call inserts a fresh row.
///
/// # Errors
///
/// Returns 401 when unauthenticated or 500 if the insert fails.
pub async fn add_to_cart(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    Json(body): Json<AddToCartRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = CartRepository::new(state.pool())
        .add(user.id, body.product_id, body.quantity)
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Get the caller's cart, each row joined with its resolved product.
///
/// Responds with an empty array when unauthenticated; never an error.
/// Prices and stock are not re-validated at read time.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn get_cart(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<CartItemWithProduct>>, AppError> {
    let Some(user) = user else {
        return Ok(Json(Vec::new()));
    };

    let items = CartRepository::new(state.pool())
        .list_with_products(user.id)
        .await?;
    Ok(Json(items))
}
