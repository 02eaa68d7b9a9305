/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route tables into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (drinks passthrough, demonstration endpoints)
 * 2. Content routes (HTML template, word cloud, video)
 * 3. Admin routes (Basic-auth gated user CRUD)
 * 4. OpenAPI document at `/openapi.json` and its Scalar page at `/docs`
 * 5. Fallback handler (JSON 404)
 *
 * # Layers
 *
 * Request logging wraps every route including the fallback. CORS is
 * fully permissive, matching a demo backend meant to be called from any
 * browser origin.
 */

use aide::axum::ApiRouter;
use axum::{http::StatusCode, middleware, Router};
use tower_http::cors::CorsLayer;

use crate::backend::error::BackendError;
use crate::backend::middleware::log_requests;
use crate::backend::routes::admin_routes::configure_admin_routes;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::content_routes::configure_content_routes;
use crate::backend::routes::docs::with_api_docs;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding config, clients and the user store
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = ApiRouter::new();

    let router = configure_api_routes(router);
    let router = configure_content_routes(router);
    let router = configure_admin_routes(router);

    let router = with_api_docs(router);

    // Fallback handler for 404
    let router = router.fallback(not_found);

    router
        .layer(middleware::from_fn(log_requests))
        .layer(CorsLayer::very_permissive())
        .with_state(app_state)
}

async fn not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "Not Found")
}
