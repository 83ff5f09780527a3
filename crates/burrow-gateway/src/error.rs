use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use burrow_core::{ShortenerError, StorageError};
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// `POST /shorten` without a usable `url` field.
    MissingUrl,
    /// The request body could not be decoded.
    InvalidBody(String),
    /// The URL stored for this hash cannot be sent as a `Location` header.
    InvalidLocation(String),
    Shortener(ShortenerError),
}

impl From<ShortenerError> for AppError {
    fn from(value: ShortenerError) -> Self {
        Self::Shortener(value)
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingUrl | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidLocation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Shortener(ShortenerError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Shortener(ShortenerError::HashSpaceExhausted(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::Shortener(ShortenerError::Storage(
                StorageError::Unavailable(_) | StorageError::Timeout(_),
            )) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Shortener(ShortenerError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::MissingUrl => "url is required".to_string(),
            AppError::InvalidBody(message) => format!("invalid request body: {message}"),
            AppError::InvalidLocation(hash) => {
                format!("stored url for {hash} is not a valid redirect target")
            }
            AppError::Shortener(e) => e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = ?self, "request failed");
        }

        let body = ErrorResponse {
            error: self.message(),
            code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
