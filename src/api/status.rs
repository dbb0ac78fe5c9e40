//! GET /api/status - machine-readable model and upload status

use axum::{Json, extract::State};

use crate::api::state::AppState;
use crate::api::types::{ApiError, StatusResponse};

/// GET /api/status
pub async fn service_status(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    let model = state.model_store.status().await?;

    Ok(Json(StatusResponse {
        model_ready: model.ready,
        model_path: model.path.display().to_string(),
        model_size_bytes: model.size_bytes,
        model_updated_at: model.modified_at,
        max_upload_bytes: state.policy.max_body_size,
        allowed_extensions: state.policy.allowed_extensions.clone(),
    }))
}
