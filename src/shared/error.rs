//! Shared Error Types
//!
//! This module defines error types for the request/response models in
//! `shared`. They carry no HTTP knowledge; the backend maps them onto
//! status codes.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request field failed validation
//!
//! # Usage
//!
//! ```rust
//! use drinks_gateway::shared::error::SharedError;
//!
//! let error = SharedError::validation("username", "Username cannot be empty");
//! ```
use thiserror::Error;

/// Error types raised by the shared models
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
