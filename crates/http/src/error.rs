//! Error handling for the bookstore HTTP layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

/// Application error types that map to plain-text HTTP responses
#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {message}")]
    NotFound { message: String },

    /// Duplicate resource. Rendered as 400, which is what registration clients expect.
    #[error("conflict: {message}")]
    Conflict { message: String },

    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("bad request: {message}")]
    BadRequest { message: String },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// HTTP status this error is rendered with
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text body sent to the client
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound { message }
            | AppError::Conflict { message }
            | AppError::Unauthorized { message }
            | AppError::BadRequest { message } => message.clone(),
            // Only the outermost context is shown to clients.
            AppError::Internal(e) => e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4();
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(
                error_id = %error_id,
                status_code = %status.as_u16(),
                error = ?self,
                "Request error"
            );
        } else {
            tracing::warn!(
                error_id = %error_id,
                status_code = %status.as_u16(),
                %message,
                "Request rejected"
            );
        }

        (status, message).into_response()
    }
}

/// Result alias for handlers
pub type AppResult<T> = Result<T, AppError>;
