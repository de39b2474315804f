//! Request handlers for the three views.
//!
//! Each submodule renders one view. Studio API failures are logged and
//! turned into on-page notices; only malformed requests reach [`AppError`].

pub mod editor;
pub mod portal;
pub mod questionnaire;

use axum::http::Uri;

use crate::error::AppError;

/// Fallback for every unmatched path.
pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::NotFound(uri.path().to_string())
}
