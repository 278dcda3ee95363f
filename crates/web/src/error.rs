//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers should return
//! `Result<T, AppError>`.

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;
use crate::uploads::UploadError;

/// Application-level error type for the web crate.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bill creation attempted before the business profile is set up.
    #[error("business profile not configured")]
    MissingBusinessProfile,

    /// Storage accessor failed (corrupt document or I/O).
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Upload was rejected or failed.
    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    /// Request body exceeded the configured size cap.
    #[error("payload too large")]
    PayloadTooLarge,

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge
        } else {
            Self::BadRequest(err.body_text())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Setup flow: send the user to settings instead of erroring.
        if matches!(self, Self::MissingBusinessProfile) {
            return Redirect::to("/settings").into_response();
        }

        // Capture server errors to Sentry
        if matches!(
            self,
            Self::Store(_) | Self::Internal(_) | Self::Upload(UploadError::Io { .. })
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::MissingBusinessProfile => StatusCode::SEE_OTHER,
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upload(err) => match err {
                UploadError::InvalidFileType | UploadError::NoFileProvided => {
                    StatusCode::BAD_REQUEST
                }
                UploadError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Store(_) | Self::Internal(_) | Self::Upload(UploadError::Io { .. }) => {
                "Internal server error".to_string()
            }
            Self::Upload(UploadError::InvalidFileType) => "File type not allowed".to_string(),
            Self::Upload(UploadError::NoFileProvided) => "No file provided".to_string(),
            Self::PayloadTooLarge => "Payload too large".to_string(),
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::BadRequest("invalid payload".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid payload");
    }

    #[test]
    fn test_missing_profile_redirects_to_settings() {
        let response = AppError::MissingBusinessProfile.into_response();
        assert!(response.status().is_redirection());
        assert_eq!(
            response
                .headers()
                .get(axum::http::header::LOCATION)
                .and_then(|v| v.to_str().ok()),
            Some("/settings")
        );
    }

    #[test]
    fn test_upload_errors_are_bad_requests() {
        assert_eq!(
            status_of(AppError::Upload(UploadError::InvalidFileType)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::Upload(UploadError::NoFileProvided)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_server_errors_are_500() {
        assert_eq!(
            status_of(AppError::Internal("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
