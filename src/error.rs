use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub const SEARCH_FAILED_MESSAGE: &str = "검색 중 오류가 발생했습니다.";
pub const CHAT_FAILED_MESSAGE: &str = "채팅 처리 중 오류가 발생했습니다.";

/// Errors surfaced to HTTP clients.
///
/// Downstream outages never reach this type; they are absorbed by the
/// search fallback and the chat apology string.
#[derive(Debug, Error)]
pub enum AppError {
    /// Body did not match the expected JSON shape. Keeps the status axum
    /// picked for the rejection (400, 415 or 422).
    #[error("{message}")]
    InvalidRequest { status: StatusCode, message: String },

    #[error("{0}")]
    Internal(&'static str),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest { status, .. } => *status,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidRequest { .. } => "INVALID_REQUEST",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.error_code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}
