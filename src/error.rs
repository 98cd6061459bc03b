use crate::models::responses::ErrorResponse;
use crate::services::books::BookServiceError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::error;

pub const INVALID_PAYLOAD: &str =
    "Invalid payload. Expect { title: string, author: string, available: boolean }";
pub const INVALID_ID: &str = "Invalid id.";
pub const NOT_FOUND: &str = "Book not found.";

pub const READ_FAILED: &str = "Failed to read books file.";
pub const CREATE_FAILED: &str = "Failed to add book.";
pub const UPDATE_FAILED: &str = "Failed to update book.";
pub const DELETE_FAILED: &str = "Failed to delete book.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("Book not found.")]
    NotFound,
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// Maps a service failure, logging storage detail instead of returning it.
    pub fn from_service(err: BookServiceError, failure: &'static str) -> Self {
        match err {
            BookServiceError::NotFound(_) => ApiError::NotFound,
            e @ (BookServiceError::Storage(_) | BookServiceError::IdsExhausted(_)) => {
                error!("{}: {}", failure, e);
                ApiError::Internal(failure)
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
