//! Notification inbox handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use verdant_core::NotificationId;

use crate::db::NotificationRepository;
use crate::error::AppError;
use crate::middleware::{CurrentUser, RequireUser};
use crate::models::Notification;
use crate::state::AppState;

/// Build the notifications router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(list))
        .route("/notifications/{id}/read", post(mark_as_read))
}

/// List the caller's notifications, newest first.
///
/// Responds with an empty array when unauthenticated; never an error.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn list(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let Some(user) = user else {
        return Ok(Json(Vec::new()));
    };

    let notifications = NotificationRepository::new(state.pool())
        .list_for_user(user.id)
        .await?;
    Ok(Json(notifications))
}

/// Mark one of the caller's notifications read. Idempotent.
///
/// An id that does not resolve and an id owned by another user both come
/// back 404; the two cases are deliberately indistinguishable.
///
/// # Errors
///
/// Returns 401 when unauthenticated, 404 when no owned notification
/// matches, or 500 if the update fails.
pub async fn mark_as_read(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    Path(id): Path<NotificationId>,
) -> Result<StatusCode, AppError> {
    NotificationRepository::new(state.pool())
        .mark_read(id, user.id)
        .await
        .map_err(|e| match e {
            crate::db::RepositoryError::NotFound => {
                AppError::NotFound("notification not found".to_string())
            }
            other => other.into(),
        })?;

    Ok(StatusCode::NO_CONTENT)
}
