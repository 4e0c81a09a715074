//! Application error type shared by every layer.
//!
//! Each variant maps onto exactly one HTTP status; the response body is always
//! `{"error": "<message>"}` so the browser form can display it as-is.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors surfaced by the link cloner.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing, malformed or non-http(s) destination URL.
    #[error("{0}")]
    InvalidUrl(String),

    /// Any other rejected input (bad JSON, length limits, Host header).
    #[error("{0}")]
    Validation(String),

    /// Every identifier candidate collided with an existing record.
    #[error("failed to generate unique id after {attempts} attempts")]
    IdGenerationExhausted { attempts: usize },

    #[error("{0}")]
    NotFound(String),

    /// Storage or rendering failure.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::InvalidUrl(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::IdGenerationExhausted { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Internal(message) => tracing::error!("Internal error: {}", message),
            AppError::IdGenerationExhausted { attempts } => {
                tracing::warn!("Identifier space exhausted after {} attempts", attempts)
            }
            _ => tracing::debug!("Request rejected ({}): {}", status, self),
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        let fields: Vec<String> = e
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();

        AppError::bad_request(format!("invalid fields: {}", fields.join(", ")))
    }
}

/// Maps a database error into an [`AppError::Internal`].
///
/// The raw driver message is logged but never sent to the client.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    tracing::error!("Database error: {}", e);
    AppError::internal("Database error")
}
