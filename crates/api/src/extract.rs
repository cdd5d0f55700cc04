//! Request extractors whose rejections use the [`AppError`] JSON format.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`] that reports malformed bodies as
/// `400 BAD_REQUEST` with the standard error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Drop-in replacement for [`axum::extract::Query`] with the same rejection
/// envelope as [`ApiJson`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
