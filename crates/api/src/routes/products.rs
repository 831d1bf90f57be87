//! Catalog handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};

use verdant_core::ProductId;

use crate::db::products::{CreateProduct, ProductRepository};
use crate::db::{BroadcastRepository, VendorRepository};
use crate::error::AppError;
use crate::middleware::RequireUser;
use crate::models::{Nutrition, ProductWithVendor};
use crate::state::AppState;

/// Build the products router.
pub fn router() -> Router<AppState> {
    Router::new().route("/products", get(list).post(add))
}

/// Request for listing a product.
///
/// `isNew` is intentionally not accepted; it is forced true at creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub images: Vec<String>,
    pub stock: i32,
    pub unit: String,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
    pub origin: String,
    pub organic: bool,
}

/// Response carrying a newly created record's identifier.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: ProductId,
}

/// List every product joined with its resolved vendor.
///
/// Unbounded and unfiltered; category filtering lives in the UI only.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductWithVendor>>, AppError> {
    let products = ProductRepository::new(state.pool())
        .list_with_vendors()
        .await?;
    Ok(Json(products))
}

/// Add a product to the catalog.
///
/// Vendors only. On success the new-product broadcast is queued for the
/// resident worker; the response does not wait for the fan-out, so it may
/// still be pending when the caller observes success.
///
/// # Errors
///
/// Returns 401 when unauthenticated, 403 when the caller has no vendor
/// profile, or 500 if a database operation fails.
pub async fn add(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    Json(body): Json<AddProductRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let vendor = VendorRepository::new(state.pool())
        .get_by_user(user.id)
        .await?
        .ok_or_else(|| AppError::Forbidden("must be a vendor to add products".to_string()))?;

    let product = ProductRepository::new(state.pool())
        .create(CreateProduct {
            name: &body.name,
            description: &body.description,
            price: body.price,
            category: &body.category,
            images: &body.images,
            stock: body.stock,
            vendor_id: vendor.id,
            unit: &body.unit,
            nutrition: body.nutrition,
            origin: &body.origin,
            organic: body.organic,
        })
        .await?;

    BroadcastRepository::new(state.pool())
        .enqueue(product.id, &product.name)
        .await?;
    state.wake_broadcast_worker();

    tracing::info!(product_id = %product.id, vendor_id = %vendor.id, "Product listed");
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: product.id })))
}
