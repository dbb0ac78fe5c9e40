//! POST /upload - analyze an uploaded X-ray image

use std::time::Instant;

use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
};
use tracing::{debug, error, info};

use crate::api::multipart::{FileField, take_file};
use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::AnalysisResult;
use crate::infrastructure::observability::record_analysis;

const NO_FILE_PART: &str = "No file part";
const INVALID_FILE_TYPE: &str = "Invalid file type";
const PROCESSING_ERROR: &str = "Error processing upload";

const IMAGE_FIELD: FileField<'static> = FileField {
    name: "file",
    missing_message: NO_FILE_PART,
    invalid_type_message: INVALID_FILE_TYPE,
};

/// POST /upload
pub async fn upload_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let mut multipart = multipart.map_err(|e| {
        debug!(error = %e, "Upload without a multipart body");
        ApiError::bad_request(NO_FILE_PART)
    })?;

    let policy = state.policy.clone();
    let upload = take_file(
        &mut multipart,
        &IMAGE_FIELD,
        policy.max_body_size,
        |name| policy.accepts_image(name),
    )
    .await?;

    debug!(filename = %upload.filename, bytes = upload.contents.len(), "Received image upload");

    let started = Instant::now();

    let scratch_file = state.scratch.persist(&upload).await.map_err(|e| {
        error!(error = %e, "Error processing upload");
        ApiError::internal(PROCESSING_ERROR)
    })?;

    let analysis = state.analyzer.analyze(scratch_file.path()).await;
    scratch_file.remove().await;

    let result = analysis.map_err(|e| {
        error!(error = %e, "Error processing upload");
        ApiError::internal(PROCESSING_ERROR)
    })?;

    record_analysis(result.result, started.elapsed());
    info!(
        result = %result.result,
        confidence = result.confidence,
        duration_ms = %started.elapsed().as_millis(),
        "Analysis complete"
    );

    Ok(Json(result))
}
