//! Authentication extractors.
//!
//! Identity is issued and validated by the external auth layer; the fronting
//! proxy forwards the authenticated principal as an `x-user-id` header. This
//! module turns that header into "current caller identity or none": the id
//! is resolved against the user table, so a forged id for a nonexistent user
//! is treated as anonymous.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};

use verdant_core::UserId;

use crate::db::UserRepository;
use crate::models::User;
use crate::state::AppState;

/// Header set by the fronting auth layer after validating the session.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor that requires an authenticated caller.
///
/// Rejects with 401 when no valid identity is present.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireUser(user): RequireUser,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.name)
/// }
/// ```
pub struct RequireUser(pub User);

/// Error returned when authentication is required but absent.
pub enum AuthRejection {
    /// No caller identity.
    Unauthenticated,
    /// Identity lookup failed.
    Internal,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, "Not authenticated").into_response()
            }
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = header_user_id(parts).ok_or(AuthRejection::Unauthenticated)?;

        let user = UserRepository::new(state.pool())
            .get_by_id(user_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Identity lookup failed");
                AuthRejection::Internal
            })?;

        user.map(Self).ok_or(AuthRejection::Unauthenticated)
    }
}

/// Extractor that optionally resolves the current caller.
///
/// Unlike [`RequireUser`], this never rejects: an absent or unresolvable
/// identity yields `None`, which personalized reads treat as an empty view.
pub struct CurrentUser(pub Option<User>);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(user_id) = header_user_id(parts) else {
            return Ok(Self(None));
        };

        let user = match UserRepository::new(state.pool()).get_by_id(user_id).await {
            Ok(user) => user,
            Err(e) => {
                // Degrade to anonymous; personalized reads never fail on
                // missing identity.
                tracing::warn!(error = %e, "Identity lookup failed, treating as anonymous");
                None
            }
        };

        Ok(Self(user))
    }
}

/// Parse the caller's user id from the identity header, if present.
fn header_user_id(parts: &Parts) -> Option<UserId> {
    parts
        .headers
        .get(USER_ID_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<i32>()
        .ok()
        .map(UserId::new)
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    fn parts_with_header(value: &str) -> Parts {
        let request = Request::builder()
            .header(USER_ID_HEADER, value)
            .body(())
            .expect("build request");
        request.into_parts().0
    }

    #[test]
    fn test_header_user_id_parses() {
        let parts = parts_with_header("42");
        assert_eq!(header_user_id(&parts), Some(UserId::new(42)));
    }

    #[test]
    fn test_header_user_id_trims_whitespace() {
        let parts = parts_with_header(" 7 ");
        assert_eq!(header_user_id(&parts), Some(UserId::new(7)));
    }

    #[test]
    fn test_header_user_id_rejects_garbage() {
        assert_eq!(header_user_id(&parts_with_header("abc")), None);
        assert_eq!(header_user_id(&parts_with_header("")), None);
    }

    #[test]
    fn test_header_user_id_absent() {
        let request = Request::builder().body(()).expect("build request");
        let (parts, ()) = request.into_parts();
        assert_eq!(header_user_id(&parts), None);
    }

    #[test]
    fn test_extractors_expose_full_user_record() {
        // Handlers destructure the extractors and read profile fields
        // directly; this pins that contract.
        fn required(RequireUser(user): RequireUser) -> String {
            user.email
        }
        fn optional(CurrentUser(user): CurrentUser) -> Option<String> {
            user.map(|u| u.email)
        }
        let _: fn(RequireUser) -> String = required;
        let _: fn(CurrentUser) -> Option<String> = optional;
    }
}
