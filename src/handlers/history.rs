//! History handlers

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{AppState, AppResult, AppError};
use crate::models::{DetectionReport, DetectionResult, HistoryQuery, HistoryResponse, HistoryStats};

/// List history, newest first, optionally filtered by `?q=`
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<HistoryResponse> {
    let items = state.history.list(query.q.as_deref());
    Json(HistoryResponse {
        total: items.len(),
        stats: HistoryStats::from_entries(&items),
        items,
    })
}

/// Get single detection
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DetectionResult>> {
    let result = state.history
        .get(&id)
        .ok_or_else(|| AppError::NotFound("Detection not found".to_string()))?;

    Ok(Json(result))
}

/// Summary over `?q=`-filtered history
pub async fn stats(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<HistoryStats> {
    Json(state.history.stats(query.q.as_deref()))
}

/// Downloadable report for a detection, served as `disease-report-<id>.json`
pub async fn report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let result = state.history
        .get(&id)
        .ok_or_else(|| AppError::NotFound("Detection not found".to_string()))?;

    let disposition = format!("attachment; filename=\"disease-report-{}.json\"", result.id);
    Ok((
        [(header::CONTENT_DISPOSITION, disposition)],
        Json(DetectionReport::from(&result)),
    ))
}

/// Clear all history
pub async fn clear(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.history.clear()?;
    tracing::info!("Detection history cleared");
    Ok(StatusCode::NO_CONTENT)
}
