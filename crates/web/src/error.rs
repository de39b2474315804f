use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use songcraft_core::error::CoreError;

use crate::views;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to render a consistent HTML error page.
/// Studio API failures never reach this type: views catch them and show a
/// notice instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `songcraft_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// No view is mounted at the requested path.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status and the message safe to show to the user.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Core(CoreError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                format!("Nothing lives at {path}"),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        tracing::debug!(status = status.as_u16(), %message, "Rendering error page");
        (status, Html(views::error_page(status, &message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400_with_message() {
        let err = AppError::Core(CoreError::Validation("Invalid step number 9".into()));
        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Invalid step number 9");
    }

    #[test]
    fn not_found_names_the_path() {
        let (status, message) = AppError::NotFound("/admin".into()).status_and_message();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(message.contains("/admin"));
    }
}
