/**
 * Demonstration Handlers
 *
 * - `GET /get-test?name=<Names>` - greeting from the query string
 * - `GET /get/{name}/saludo` - greeting from the path
 * - `GET /error_response?name=<string>` - 401 unless the name is `Diego`
 * - `GET /redirect_response/hello_lucas` - 302 to the Lucas greeting page
 * - `GET /items/{item_id}?q=<string>` - echo of the path id and query
 */

use aide::generate::GenContext;
use aide::openapi::{Operation, Response as ApiResponse};
use aide::OperationOutput;
use axum::{
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::demo::types::{GreetingQuery, ItemQuery, PermissionQuery};
use crate::backend::error::BackendError;
use crate::backend::extract::{Path, Query};
use crate::shared::{GreetingResponse, ItemResponse, Names};

/// The only name `/error_response` lets through
pub const PERMITTED_NAME: &str = "Diego";

/// Message returned to every other name
pub const PERMISSION_DENIED: &str = "Este usuario no tiene permiso";

/// Redirect target for `/redirect_response/hello_lucas`
pub const LUCAS_GREETING_PAGE: &str = "/html_response?name=Lucas";

pub async fn get_test(Query(query): Query<GreetingQuery>) -> Json<GreetingResponse> {
    Json(GreetingResponse::hello(query.name))
}

pub async fn get_saludo(Path(name): Path<Names>) -> Json<GreetingResponse> {
    Json(GreetingResponse::hello(name))
}

/// Greets `Diego`, rejects everyone else with 401
pub async fn error_response(
    Query(query): Query<PermissionQuery>,
) -> Result<Json<GreetingResponse>, BackendError> {
    if query.name != PERMITTED_NAME {
        tracing::info!("Denied /error_response for {:?}", query.name);
        return Err(BackendError::handler(
            StatusCode::UNAUTHORIZED,
            PERMISSION_DENIED,
        ));
    }
    Ok(Json(GreetingResponse::hello(&query.name)))
}

/// 302 Found with a fixed `Location`
pub struct Found(pub &'static str);

impl IntoResponse for Found {
    fn into_response(self) -> Response {
        (StatusCode::FOUND, [(LOCATION, self.0)]).into_response()
    }
}

impl OperationOutput for Found {
    type Inner = ();

    fn operation_response(_ctx: &mut GenContext, _operation: &mut Operation) -> Option<ApiResponse> {
        Some(ApiResponse {
            description: "Redirect, target in the `Location` header".into(),
            ..Default::default()
        })
    }

    fn inferred_responses(
        ctx: &mut GenContext,
        operation: &mut Operation,
    ) -> Vec<(Option<u16>, ApiResponse)> {
        Self::operation_response(ctx, operation)
            .map(|res| vec![(Some(StatusCode::FOUND.as_u16()), res)])
            .unwrap_or_default()
    }
}

/// Redirect to the rendered Lucas page
pub async fn redirect_hello_lucas() -> Found {
    Found(LUCAS_GREETING_PAGE)
}

pub async fn get_item(
    Path(item_id): Path<i64>,
    Query(query): Query<ItemQuery>,
) -> Json<ItemResponse> {
    Json(ItemResponse {
        item_id,
        q: query.q,
    })
}
