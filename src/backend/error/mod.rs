//! Backend Error Module
//!
//! This module defines the error type returned by HTTP handlers and how it
//! becomes an HTTP response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and status mapping
//! └── conversion.rs - IntoResponse and extractor rejection conversions
//! ```
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse`, so handlers return
//! `Result<_, BackendError>` and use `?` throughout. Bodies are JSON with a
//! `detail` message and the numeric `status`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use conversion::ErrorBody;
pub use types::{BackendError, GENERIC_FAILURE};
