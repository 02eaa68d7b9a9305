//! OpenAPI document and Scalar reference page
//!
//! The document is generated from the `ApiRouter` route tables and served
//! as JSON at [`OPENAPI_JSON_PATH`]; [`SCALAR_PATH`] renders it.

use aide::axum::ApiRouter;
use aide::openapi::{ExternalDocumentation, Info, OpenApi, Tag};
use aide::scalar::Scalar;
use axum::routing::{get, Router};
use axum::{Extension, Json};

pub const OPENAPI_JSON_PATH: &str = "/openapi.json";
pub const SCALAR_PATH: &str = "/docs";

pub const API_TITLE: &str = "API - PyDay2023";
pub const API_VERSION: &str = "1.0";
pub const API_DESCRIPTION: &str = "API de Prueba";

pub const TAG_DRINKS: &str = "DRINKS";
pub const TAG_TEST: &str = "TEST";
pub const TAG_ERROR: &str = "Error";
pub const TAG_HTML: &str = "HTML";
pub const TAG_VIDEO: &str = "VIDEO";
pub const TAG_REDIRECT: &str = "Redirect";
pub const TAG_ADMIN: &str = "ADMIN";

const TAG_DOCS_URL: &str = "https://fastapi.tiangolo.com/";

pub fn api_info() -> Info {
    Info {
        title: API_TITLE.to_owned(),
        description: Some(API_DESCRIPTION.to_owned()),
        version: API_VERSION.to_owned(),
        ..Info::default()
    }
}

fn described_tag(name: &str, description: &str, link_text: &str) -> Tag {
    Tag {
        name: name.to_owned(),
        description: Some(description.to_owned()),
        external_docs: Some(ExternalDocumentation {
            description: Some(link_text.to_owned()),
            url: TAG_DOCS_URL.to_owned(),
            ..ExternalDocumentation::default()
        }),
        ..Tag::default()
    }
}

/// Tag metadata listed at the top of the document
pub fn api_tags() -> Vec<Tag> {
    vec![
        described_tag(TAG_DRINKS, "Request de Obtención de CSV DRINKS", "Link"),
        described_tag(TAG_TEST, "Request de prueba", "Link a Dashboard o algo"),
    ]
}

async fn serve_openapi(Extension(api): Extension<OpenApi>) -> Json<OpenApi> {
    Json(api)
}

/// Finish the documented router, adding the JSON and Scalar routes
pub fn with_api_docs<S>(router: ApiRouter<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let mut api = OpenApi {
        info: api_info(),
        tags: api_tags(),
        ..OpenApi::default()
    };

    let scalar = Scalar::new(OPENAPI_JSON_PATH);
    router
        .route(SCALAR_PATH, scalar.axum_route())
        .route(OPENAPI_JSON_PATH, get(serve_openapi))
        .finish_api(&mut api)
        .layer(Extension(api))
}
