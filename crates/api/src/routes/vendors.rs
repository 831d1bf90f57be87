//! Vendor directory handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};

use verdant_core::VendorId;

use crate::db::vendors::{CreateVendor, VendorRepository};
use crate::error::AppError;
use crate::middleware::{CurrentUser, RequireUser};
use crate::models::Vendor;
use crate::state::AppState;

/// Rating assigned to a freshly registered vendor.
const INITIAL_RATING: f64 = 5.0;

/// Build the vendors router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/vendors", get(list).post(register))
        .route("/vendors/me", get(my_profile))
}

/// Request for registering a vendor profile.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub description: String,
    pub logo: String,
    pub address: String,
}

/// Response carrying a newly created record's identifier.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: VendorId,
}

/// List every vendor. No auth, no pagination.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Vendor>>, AppError> {
    let vendors = VendorRepository::new(state.pool()).list_all().await?;
    Ok(Json(vendors))
}

/// Get the caller's vendor profile.
///
/// Responds `null` when unauthenticated or when no profile exists; absence
/// is not an error.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn my_profile(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Option<Vendor>>, AppError> {
    let Some(user) = user else {
        return Ok(Json(None));
    };

    let vendor = VendorRepository::new(state.pool())
        .get_by_user(user.id)
        .await?;
    Ok(Json(vendor))
}

/// Register a vendor profile for the caller.
///
/// New vendors start with rating 5.0 and unverified.
///
/// # Errors
///
/// Returns 401 when unauthenticated, 409 when the caller already owns a
/// vendor, or 500 if the database operation fails.
pub async fn register(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let vendor = VendorRepository::new(state.pool())
        .create(CreateVendor {
            name: &body.name,
            description: &body.description,
            logo: &body.logo,
            address: &body.address,
            user_id: user.id,
            rating: INITIAL_RATING,
            is_verified: false,
        })
        .await?;

    tracing::info!(vendor_id = %vendor.id, user_id = %user.id, "Vendor registered");
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: vendor.id })))
}
