//! Middleware Module
//!
//! Request processing that sits in front of the handlers.
//!
//! - **`auth`** - `AdminUser` extractor enforcing HTTP Basic credentials
//! - **`logging`** - Per-request log line (method, path, status, latency)

pub mod auth;
pub mod logging;

pub use auth::AdminUser;
pub use logging::log_requests;
