/**
 * Static Content Routes
 *
 * - `GET /html_response?name=<Names>` (`HTML`)
 * - `GET /video_response` (`VIDEO`)
 * - `GET /wordcloud` (`HTML`)
 */

use aide::axum::routing::get_with;
use aide::axum::ApiRouter;

use crate::backend::content::{html_response, video_response, wordcloud};
use crate::backend::routes::docs::{TAG_HTML, TAG_VIDEO};
use crate::backend::server::state::AppState;

/// Configure the static content routes
pub fn configure_content_routes(router: ApiRouter<AppState>) -> ApiRouter<AppState> {
    router
        .api_route("/html_response", get_with(html_response, |op| op.tag(TAG_HTML)))
        .api_route(
            "/video_response",
            get_with(video_response, |op| op.tag(TAG_VIDEO)),
        )
        .api_route("/wordcloud", get_with(wordcloud, |op| op.tag(TAG_HTML)))
}
