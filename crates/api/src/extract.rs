//! Request extractors whose rejections use the [`AppError`] envelope.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with rejections mapped through `From<JsonRejection> for AppError`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
