//! Upload API route handlers.

use axum::{Json, extract::Multipart, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::uploads::UploadError;

/// Response for a stored signature upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub filepath: String,
}

/// Upload a signature image.
///
/// POST /api/upload-signature
///
/// Expects a multipart body with a file field named `signature`. Returns the
/// public path the create form embeds into the bill payload.
#[instrument(skip(state, multipart))]
pub async fn upload_signature(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    while let Some(field) = multipart.next_field().await.map_err(AppError::from)? {
        if field.name() != Some("signature") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(UploadError::NoFileProvided.into());
        }
        let bytes = field.bytes().await.map_err(AppError::from)?;

        let filepath = state.uploads().save(&filename, &bytes)?;
        return Ok(Json(UploadResponse {
            message: "Upload successful".to_string(),
            filepath,
        }));
    }

    Err(UploadError::NoFileProvided.into())
}
