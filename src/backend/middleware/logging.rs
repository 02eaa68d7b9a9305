/**
 * Request Logging Middleware
 *
 * Logs one line per request with method, path, status and latency.
 * Query strings are left out so credentials passed as parameters do not
 * end up in logs; headers are never logged.
 */

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Log each request once the response is ready
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::error!(%method, %path, status = status.as_u16(), elapsed_ms, "request failed");
    } else if status.is_client_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), elapsed_ms, "request rejected");
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), elapsed_ms, "request served");
    }

    response
}
