//! Integration tests for the API error taxonomy.
//!
//! These verify the status mapping contract the UI depends on: every
//! handler failure lands on one of 400/401/403/404/409/500, and internal
//! detail never leaks into a client-facing body.

use axum::http::StatusCode;
use axum::response::IntoResponse;

use verdant_api::db::RepositoryError;
use verdant_api::error::AppError;

fn status_of(err: AppError) -> StatusCode {
    err.into_response().status()
}

// =============================================================================
// Status Mapping
// =============================================================================

#[test]
fn test_unauthenticated_is_401() {
    assert_eq!(status_of(AppError::Unauthenticated), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_non_vendor_add_is_403() {
    // Identity present but role missing gets Forbidden, not Unauthorized
    let err = AppError::Forbidden("must be a vendor to add products".to_string());
    assert_eq!(status_of(err), StatusCode::FORBIDDEN);
}

#[test]
fn test_duplicate_registration_is_409() {
    let err = AppError::Conflict("user is already a vendor".to_string());
    assert_eq!(status_of(err), StatusCode::CONFLICT);
}

#[test]
fn test_missing_or_foreign_notification_is_404() {
    // "absent" and "owned by someone else" share one variant, so the two
    // cases are indistinguishable on the wire
    let err = AppError::NotFound("notification not found".to_string());
    assert_eq!(status_of(err), StatusCode::NOT_FOUND);
}

#[test]
fn test_database_errors_are_500() {
    let err = AppError::Database(RepositoryError::DataCorruption("bad row".to_string()));
    assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Repository Error Conversion
// =============================================================================

#[test]
fn test_repo_conflict_becomes_conflict() {
    // The vendor unique index surfaces as RepositoryError::Conflict; it must
    // reach the caller as 409, not as a generic database failure
    let err = AppError::from(RepositoryError::Conflict("user is already a vendor".to_string()));
    assert_eq!(status_of(err), StatusCode::CONFLICT);
}

#[test]
fn test_repo_not_found_becomes_404() {
    let err = AppError::from(RepositoryError::NotFound);
    assert_eq!(status_of(err), StatusCode::NOT_FOUND);
}

#[test]
fn test_repo_corruption_becomes_500() {
    let err = AppError::from(RepositoryError::DataCorruption("invalid row".to_string()));
    assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Message Hygiene
// =============================================================================

#[test]
fn test_client_facing_messages() {
    assert_eq!(AppError::Unauthenticated.to_string(), "Not authenticated");
    assert_eq!(
        AppError::Forbidden("must be a vendor to add products".to_string()).to_string(),
        "Forbidden: must be a vendor to add products"
    );
    assert_eq!(
        AppError::Conflict("user is already a vendor".to_string()).to_string(),
        "Conflict: user is already a vendor"
    );
}
