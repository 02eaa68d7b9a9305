//! Drinks Gateway - Main Library
//!
//! A small demonstration HTTP backend built on Axum. It exposes:
//! - a passthrough to a public cocktail-recipe API, re-serialized as CSV or JSON
//! - static HTML and video content
//! - demo greeting, error and redirect endpoints
//! - credential-gated admin endpoints for API-user CRUD
//!
//! # Module Structure
//!
//! - **`shared`** - Framework-independent request/response models and errors
//! - **`backend`** - The Axum server (only compiled with the `ssr` feature,
//!   which is on by default)
//!
//! # Usage
//!
//! ```rust,no_run
//! use drinks_gateway::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
