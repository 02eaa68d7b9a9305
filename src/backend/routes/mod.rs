//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs             - Module exports and documentation
//! ├── router.rs          - Main router creation, layers, fallback
//! ├── api_routes.rs      - Drinks and demonstration routes
//! ├── content_routes.rs  - Static content routes
//! ├── admin_routes.rs    - Basic-auth gated admin routes
//! └── docs.rs            - OpenAPI document and Scalar page
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use drinks_gateway::backend::routes::create_router;
//! use drinks_gateway::backend::server::{AppState, ServerConfig};
//! use drinks_gateway::backend::users::InMemoryUserStore;
//!
//! let state = AppState::new(ServerConfig::default(), Arc::new(InMemoryUserStore::new()))
//!     .expect("http client");
//! let router = create_router(state);
//! ```

/// Main router creation
pub mod router;

/// Drinks and demonstration routes
pub mod api_routes;

/// Static content routes
pub mod content_routes;

/// Admin routes
pub mod admin_routes;

/// OpenAPI document
pub mod docs;

pub use router::create_router;
