//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::logic::history::HistoryError;
use crate::logic::upload::UploadError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    // Resource errors
    #[error("{0}")]
    NotFound(String),

    // Validation errors
    #[error("{0}")]
    ValidationError(String),

    // Upload errors
    #[error(transparent)]
    Upload(#[from] UploadError),

    // Storage errors
    #[error("{0}")]
    StorageError(String),

    // Generic errors
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, error_message) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, message.as_str()),
            AppError::ValidationError(_) => (StatusCode::BAD_REQUEST, message.as_str()),
            AppError::Upload(UploadError::UnsupportedFileType(_)) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, message.as_str())
            }
            AppError::Upload(UploadError::FileTooLarge { .. }) => {
                (StatusCode::PAYLOAD_TOO_LARGE, message.as_str())
            }
            AppError::Upload(UploadError::NotACropImage) => {
                (StatusCode::UNPROCESSABLE_ENTITY, message.as_str())
            }
            AppError::StorageError(msg) => {
                tracing::error!("Storage error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Storage error occurred")
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<HistoryError> for AppError {
    fn from(err: HistoryError) -> Self {
        AppError::StorageError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
