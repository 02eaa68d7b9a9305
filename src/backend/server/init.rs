/**
 * Server Initialization
 *
 * This module builds the Axum application from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Connect to PostgreSQL if `DATABASE_URL` is set (migrations included)
 * 2. Pick the user store: PostgreSQL when connected, in-memory otherwise
 * 3. Build `AppState` (upstream client, credential verifier, content dir)
 * 4. Build the router with every route table attached
 */

use axum::Router;
use std::sync::Arc;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::users::{InMemoryUserStore, PgUserStore, SharedUserStore};

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails only if the upstream HTTP client cannot be built (TLS backend
/// initialisation). A missing database is not an error.
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, reqwest::Error> {
    tracing::info!("Initializing drinks gateway");

    let user_store: SharedUserStore = match load_database(config.database_url.as_deref()).await {
        Some(pool) => {
            tracing::info!("Using PostgreSQL user store");
            Arc::new(PgUserStore::new(pool))
        }
        None => {
            tracing::info!("Using in-memory user store");
            Arc::new(InMemoryUserStore::new())
        }
    };

    let app_state = AppState::new(config, user_store)?;
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
