//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("question {0} does not exist")]
    UnknownQuestion(i64),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("no questions left in category {0}")]
    QuizExhausted(i64),
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_)
            | AppError::UnknownQuestion(_)
            | AppError::QuizExhausted(_)
            | AppError::Db(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Wire shape shared by every failed request.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl ErrorBody {
    pub fn for_status(status: StatusCode) -> Self {
        ErrorBody {
            success: false,
            error: status.as_u16(),
            message: message_for(status),
        }
    }
}

/// Fixed client-facing message per status; causes only go to the log.
pub fn message_for(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad Request",
        StatusCode::NOT_FOUND => "Resource Not Found",
        StatusCode::METHOD_NOT_ALLOWED => "Method Not Allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable",
        StatusCode::INTERNAL_SERVER_ERROR => "Internal Server Error",
        other => other.canonical_reason().unwrap_or("Error"),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Db(e) => tracing::error!(error = %e, "persistence failure"),
            AppError::Internal(msg) => tracing::error!(error = %msg, "internal failure"),
            other => tracing::debug!(error = %other, status = status.as_u16(), "request rejected"),
        }
        (status, Json(ErrorBody::for_status(status))).into_response()
    }
}
