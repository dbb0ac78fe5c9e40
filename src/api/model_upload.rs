//! POST /upload-model - replace the model artifact

use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
};
use tracing::{debug, error, info};

use crate::api::multipart::{FileField, take_file};
use crate::api::state::AppState;
use crate::api::types::{ApiError, ModelUploadResponse};
use crate::infrastructure::observability::record_model_upload;

const NO_MODEL_FILE: &str = "No model file provided";
const UPLOAD_ERROR: &str = "Error uploading model";

/// POST /upload-model
pub async fn upload_model(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ModelUploadResponse>, ApiError> {
    let mut multipart = multipart.map_err(|e| {
        debug!(error = %e, "Model upload without a multipart body");
        ApiError::bad_request(NO_MODEL_FILE)
    })?;

    let policy = state.policy.clone();
    let invalid_type = format!(
        "Invalid model file format. Please upload a .{} file",
        policy.model_extension
    );
    let field = FileField {
        name: "model",
        missing_message: NO_MODEL_FILE,
        invalid_type_message: &invalid_type,
    };

    let upload = take_file(
        &mut multipart,
        &field,
        policy.max_body_size,
        |name| policy.accepts_model(name),
    )
    .await?;

    let status = state
        .model_store
        .install(upload.contents)
        .await
        .map_err(|e| {
            record_model_upload(false);
            error!(error = %e, "Error uploading model");
            ApiError::internal(UPLOAD_ERROR)
        })?;

    record_model_upload(true);
    info!(
        filename = %upload.filename,
        path = %status.path.display(),
        bytes = status.size_bytes.unwrap_or_default(),
        "Model artifact replaced"
    );

    Ok(Json(ModelUploadResponse::uploaded()))
}
