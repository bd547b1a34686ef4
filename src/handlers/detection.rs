//! Detection handlers

use axum::{extract::State, Json};
use validator::Validate;

use crate::{AppState, AppResult};
use crate::logic::{severity, upload};
use crate::models::{DetectResponse, UploadRequest};

/// Validate an upload, run the simulated classifier, record the result
pub async fn detect(
    State(state): State<AppState>,
    Json(req): Json<UploadRequest>,
) -> AppResult<Json<DetectResponse>> {
    req.validate()?;

    if let Err(e) = upload::validate_file(&req.content_type, req.size_bytes, state.config.max_upload_bytes) {
        tracing::info!("Upload '{}' rejected: {}", req.file_name, e);
        return Err(e.into());
    }
    state.content_validator.check(&req.file_name).await?;

    let result = state.detector.detect(&req.image_ref).await;
    state.history.record(result.clone())?;

    tracing::info!(
        "Detected {} on {} ({:.0}%) for '{}'",
        result.disease,
        result.affected_crop,
        result.confidence * 100.0,
        req.file_name
    );

    let colors = severity::colors_for(result.severity);
    Ok(Json(DetectResponse { result, colors }))
}
