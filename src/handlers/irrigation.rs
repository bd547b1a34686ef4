//! Irrigation dashboard handlers

use axum::{extract::{Path, State}, Json};
use serde::Serialize;

use crate::{AppState, AppResult, AppError};
use crate::models::{IrrigationSnapshot, IrrigationZone};

#[derive(Debug, Serialize)]
pub struct SystemToggleResponse {
    pub system_active: bool,
}

pub async fn snapshot(State(state): State<AppState>) -> Json<IrrigationSnapshot> {
    Json(state.irrigation.lock().snapshot())
}

pub async fn toggle_system(State(state): State<AppState>) -> Json<SystemToggleResponse> {
    let system_active = state.irrigation.lock().toggle_system();
    tracing::info!("Irrigation system {}", if system_active { "resumed" } else { "paused" });
    Json(SystemToggleResponse { system_active })
}

pub async fn toggle_zone(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<IrrigationZone>> {
    let zone = state.irrigation
        .lock()
        .toggle_zone(id)
        .ok_or_else(|| AppError::NotFound(format!("Zone {} not found", id)))?;

    tracing::info!("Zone {} ({}) is now {:?}", zone.id, zone.name, zone.status);
    Ok(Json(zone))
}
