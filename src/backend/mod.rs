//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server with a
//! cocktail-API passthrough, static content, demo endpoints and a
//! credential-gated admin surface for API users.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app construction
//! - **`routes`** - Route tables and router assembly
//! - **`drinks`** - Upstream cocktail client, reshaping, CSV export
//! - **`content`** - HTML template, word cloud and video handlers
//! - **`demo`** - Greeting, error, redirect and item echo endpoints
//! - **`auth`** - Basic-auth verification, token minting, admin handlers
//! - **`users`** - `UserStore` trait with in-memory and PostgreSQL stores
//! - **`middleware`** - Basic-auth extractor and request logging
//! - **`extract`** - Query/Path extractors with JSON rejections
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Config, state, init
//! ├── routes/         - Route configuration
//! ├── drinks/         - Recipe passthrough
//! ├── content/        - Static content
//! ├── demo/           - Demo endpoints
//! ├── auth/           - Credentials, tokens, admin handlers
//! ├── users/          - User store
//! ├── middleware/     - Request middleware and auth extractor
//! ├── extract.rs      - Custom extractors
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` is cloned into every handler. It holds read-only
//! configuration, the upstream HTTP client, the credential verifier and an
//! `Arc<dyn UserStore>`. There is no other shared mutable state.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Cocktail recipe passthrough
pub mod drinks;

/// Static content handlers
pub mod content;

/// Demonstration endpoints
pub mod demo;

/// Authentication and admin handlers
pub mod auth;

/// API user persistence
pub mod users;

/// Middleware for request processing
pub mod middleware;

/// Extractors with JSON rejections
pub mod extract;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use routes::create_router;
pub use server::{create_app, AppState};
