/**
 * Backend Error Types
 *
 * This module defines the single error type returned by HTTP handlers.
 * Every variant knows its HTTP status code and a user-facing message.
 *
 * # Error Categories
 *
 * ## Request Errors
 *
 * - `HandlerError` - Explicit status raised by a handler (e.g. 401, 422)
 * - `Unauthorized` - Basic-auth verification failed
 * - `SharedError` - Request body failed validation
 *
 * ## Collaborator Errors
 *
 * - `StoreError` - The user store reported a typed failure
 * - `UpstreamError` - The cocktail API could not be reached or answered badly
 * - `ContentError` - A static content file could not be read
 *
 * ## Internal Errors
 *
 * - `TokenError`, `CsvError`
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::drinks::client::DrinksError;
use crate::backend::users::StoreError;
use crate::shared::SharedError;

/// Generic message returned for store failures
pub const GENERIC_FAILURE: &str = "Ha ocurrido un error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use drinks_gateway::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::UNAUTHORIZED, "Este usuario no tiene permiso");
/// assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Basic-auth credentials missing or wrong
    ///
    /// Rendered with a `WWW-Authenticate: Basic` challenge.
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Request validation error from the shared models
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Typed failure reported by the user store
    #[error(transparent)]
    StoreError(#[from] StoreError),

    /// Cocktail API failure
    #[error(transparent)]
    UpstreamError(#[from] DrinksError),

    /// Static content could not be read
    #[error("Content error: {0}")]
    ContentError(#[from] std::io::Error),

    /// Access token could not be minted
    #[error("Token error: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    /// CSV export failed
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new basic-auth failure
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Unauthorized` - 401 Unauthorized
    /// - `SharedError` - 400 Bad Request
    /// - `StoreError` - 400 rejected, 404 not found, 409 conflict, 500 backend
    /// - `UpstreamError` - 502 Bad Gateway
    /// - `ContentError` - 404 if the file is missing, otherwise 500
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
            Self::StoreError(err) => match err {
                StoreError::Rejected(_) => StatusCode::BAD_REQUEST,
                StoreError::NotFound(_) => StatusCode::NOT_FOUND,
                StoreError::Conflict(_) => StatusCode::CONFLICT,
                StoreError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::UpstreamError(_) => StatusCode::BAD_GATEWAY,
            Self::ContentError(err) if err.kind() == std::io::ErrorKind::NotFound => {
                StatusCode::NOT_FOUND
            }
            Self::ContentError(_)
            | Self::TokenError(_)
            | Self::CsvError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-facing error message
    ///
    /// Internal failures get a fixed message; the detail goes to the log.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Unauthorized { message } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::StoreError(StoreError::Backend(_)) => GENERIC_FAILURE.to_string(),
            Self::StoreError(err) => format!("{}: {}", GENERIC_FAILURE, err),
            Self::UpstreamError(err) => err.to_string(),
            Self::ContentError(err) if err.kind() == std::io::ErrorKind::NotFound => {
                "Content not found".to_string()
            }
            Self::ContentError(_)
            | Self::TokenError(_)
            | Self::CsvError(_) => "Internal server error".to_string(),
        }
    }
}
