//! HTTP error envelope.
//!
//! Every failure leaves the server as `{"error": <message>, "code": <CODE>}`.
//! Domain failures arrive as [`CoreError`]; body extraction failures arrive as
//! [`JsonRejection`] through [`crate::extract::AppJson`].

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rateboard_core::error::CoreError;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The body could not be read as JSON at all (missing content type,
    /// unreadable bytes).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Wire shape of an error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Core(CoreError::NotFound { .. }) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Core(CoreError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            AppError::Core(CoreError::Unauthorized(_)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
            }
            AppError::Core(CoreError::Forbidden(_)) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            AppError::Core(CoreError::Internal(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                format!("{entity} with id {id} not found")
            }
            AppError::Core(
                CoreError::Validation(msg)
                | CoreError::Unauthorized(msg)
                | CoreError::Forbidden(msg)
                | CoreError::Internal(msg),
            ) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),
        }
    }
}

/// Malformed JSON, or JSON that does not fit [`PricingUpdate`] (missing
/// package fields, unknown keys, wrong types), is a validation failure. A
/// missing content type or an unreadable body is a plain bad request.
///
/// [`PricingUpdate`]: rateboard_core::pricing::PricingUpdate
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match &rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                AppError::Core(CoreError::Validation(rejection.body_text()))
            }
            _ => AppError::BadRequest(rejection.body_text()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let error = self.message();

        if status.is_server_error() {
            tracing::error!(%error, "Request failed with internal error");
        }

        (status, Json(ErrorBody { error, code })).into_response()
    }
}
