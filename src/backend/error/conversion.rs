/**
 * Error Conversion
 *
 * This module converts backend errors into HTTP responses and maps Axum
 * extractor rejections onto `BackendError`.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "detail": "Error message",
 *   "status": 400
 * }
 * ```
 */

use aide::generate::GenContext;
use aide::openapi::Operation;
use aide::OperationOutput;
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::{header::WWW_AUTHENTICATE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::backend::error::types::BackendError;

/// JSON body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorBody {
    /// Human-readable error message
    pub detail: String,
    /// HTTP status code, repeated from the status line
    pub status: u16,
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("Request failed ({}): {:?}", status, self);
        } else {
            tracing::warn!("Request rejected ({}): {}", status, self);
        }

        let body = Json(ErrorBody {
            detail: message,
            status: status.as_u16(),
        });

        let mut response = (status, body).into_response();
        if matches!(self, BackendError::Unauthorized { .. }) {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Basic"));
        }
        response
    }
}

impl OperationOutput for BackendError {
    type Inner = ErrorBody;

    fn operation_response(
        ctx: &mut GenContext,
        operation: &mut Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<ErrorBody>::operation_response(ctx, operation)
    }

    fn inferred_responses(
        ctx: &mut GenContext,
        operation: &mut Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        Self::operation_response(ctx, operation)
            .map(|response| vec![(None, response)])
            .unwrap_or_default()
    }
}

/// Malformed JSON is 400, an unsupported content type 415, and a body that
/// does not match the expected shape 422, as axum decides them.
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        BackendError::handler(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for BackendError {
    fn from(rejection: QueryRejection) -> Self {
        BackendError::handler(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        BackendError::handler(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    }
}
