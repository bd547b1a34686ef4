//! Knowledge base handlers

use axum::{extract::{Path, Query}, Json};
use serde::Deserialize;

use crate::{AppResult, AppError};
use crate::logic::{knowledge, severity};
use crate::models::{DiseaseRecord, SeverityColors};

#[derive(Debug, Deserialize, Default)]
pub struct DiseaseQuery {
    pub q: Option<String>,
}

/// List catalog, optionally filtered by `?q=`
pub async fn list(Query(query): Query<DiseaseQuery>) -> Json<Vec<&'static DiseaseRecord>> {
    Json(knowledge::search(query.q.as_deref().unwrap_or("")))
}

/// Get a disease by name
pub async fn get(Path(name): Path<String>) -> AppResult<Json<&'static DiseaseRecord>> {
    let record = knowledge::find_by_name(&name)
        .ok_or_else(|| AppError::NotFound(format!("Disease '{}' not found", name)))?;

    Ok(Json(record))
}

/// Badge colors for a severity label; unknown labels get the fallback
pub async fn colors(Path(label): Path<String>) -> Json<SeverityColors> {
    Json(severity::colors_for_label(&label))
}
