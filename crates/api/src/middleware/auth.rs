//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use rateboard_core::error::CoreError;
use rateboard_core::gate::CallerIdentity;
use rateboard_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Caller resolved from the `Authorization: Bearer <token>` header.
///
/// Rejects with 401 unless the header holds a token that passes
/// [`validate_token`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Token subject.
    pub user_id: DbId,
}

impl AuthUser {
    /// The identity handed to the authorization gate.
    pub fn caller(&self) -> CallerIdentity {
        CallerIdentity {
            user_id: self.user_id,
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser { user_id: claims.sub })
    }
}
