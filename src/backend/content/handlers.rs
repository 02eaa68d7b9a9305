/**
 * Static Content Handlers
 *
 * - `GET /html_response?name=<Names>` - `template.html` with `{name}` filled in
 * - `GET /wordcloud` - `wordcloud.html` verbatim
 * - `GET /video_response` - `video.mp4` as `video/mp4`
 *
 * The video is read fully into memory before it is sent; there is no
 * range-request support.
 */

use aide::generate::GenContext;
use aide::openapi::{MediaType, Operation, Response as ApiResponse};
use aide::OperationOutput;
use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::{Html, IntoResponse, Response},
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::backend::content::template::render_template;
use crate::backend::content::ContentDir;
use crate::backend::error::BackendError;
use crate::backend::extract::Query;
use crate::shared::Names;

pub const TEMPLATE_FILE: &str = "template.html";
pub const WORDCLOUD_FILE: &str = "wordcloud.html";
pub const VIDEO_FILE: &str = "video.mp4";
pub const VIDEO_CONTENT_TYPE: &str = "video/mp4";

#[derive(Debug, Deserialize, JsonSchema)]
pub struct NameQuery {
    pub name: Names,
}

/// Rendered greeting page
pub async fn html_response(
    State(content): State<ContentDir>,
    Query(query): Query<NameQuery>,
) -> Result<Html<String>, BackendError> {
    let template = content.read_text(TEMPLATE_FILE).await?;
    Ok(Html(render_template(&template, query.name.as_str())))
}

/// Word cloud page
pub async fn wordcloud(State(content): State<ContentDir>) -> Result<Html<String>, BackendError> {
    Ok(Html(content.read_text(WORDCLOUD_FILE).await?))
}

/// Raw MP4 bytes
pub struct VideoBody(pub Vec<u8>);

impl IntoResponse for VideoBody {
    fn into_response(self) -> Response {
        ([(CONTENT_TYPE, VIDEO_CONTENT_TYPE)], self.0).into_response()
    }
}

impl OperationOutput for VideoBody {
    type Inner = Vec<u8>;

    fn operation_response(_ctx: &mut GenContext, _operation: &mut Operation) -> Option<ApiResponse> {
        Some(ApiResponse {
            description: "MP4 video".into(),
            content: [(VIDEO_CONTENT_TYPE.to_string(), MediaType::default())].into(),
            ..Default::default()
        })
    }

    fn inferred_responses(
        ctx: &mut GenContext,
        operation: &mut Operation,
    ) -> Vec<(Option<u16>, ApiResponse)> {
        Self::operation_response(ctx, operation)
            .map(|res| vec![(Some(200), res)])
            .unwrap_or_default()
    }
}

/// Demo video
pub async fn video_response(State(content): State<ContentDir>) -> Result<VideoBody, BackendError> {
    Ok(VideoBody(content.read_bytes(VIDEO_FILE).await?))
}
