use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_upload_document::{UploadDocument, UploadResponse};
use serde_json::json;

use crate::routes::AppState;
use crate::usecases::u501_upload_document::UploadError;

/// GET /
pub async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Quiz backend is alive" }))
}

/// POST /upload
pub async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, UploadError> {
    let mut multipart = multipart.map_err(|e| UploadError::Multipart(e.body_text()))?;

    match state.upload.receive(&mut multipart).await {
        Ok(resp) => {
            tracing::info!("{}: {} processed", UploadDocument::full_name(), resp.filename);
            Ok(Json(resp))
        }
        Err(e) => {
            if e.status().is_server_error() {
                tracing::error!("{} failed: {}", UploadDocument::full_name(), e);
            } else {
                tracing::warn!("{} rejected: {}", UploadDocument::full_name(), e);
            }
            Err(e)
        }
    }
}
