use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Design not found")]
    DesignNotFound,

    #[error("Schedule not found")]
    ScheduleNotFound,

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, details) = match self {
            AppError::Storage(ref e) => {
                tracing::error!("Storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage error".to_string(),
                    Some(e.to_string()),
                )
            }
            AppError::TaskJoin(ref e) => {
                tracing::error!("Task join error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(e.to_string()),
                )
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(msg.clone()),
                )
            }
            AppError::MissingFields(_) => (StatusCode::BAD_REQUEST, self.to_string(), None),
            AppError::InvalidBody(ref msg) => (
                StatusCode::BAD_REQUEST,
                "Invalid request body".to_string(),
                Some(msg.clone()),
            ),
            AppError::InvalidInput(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::DesignNotFound => (StatusCode::NOT_FOUND, self.to_string(), None),
            AppError::ScheduleNotFound => (StatusCode::NOT_FOUND, self.to_string(), None),
        };

        let body = match details {
            Some(details) => json!({ "error": error_message, "details": details }),
            None => json!({ "error": error_message }),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
