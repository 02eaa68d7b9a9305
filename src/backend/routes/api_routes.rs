/**
 * Public API Routes
 *
 * ## Drinks (`DRINKS`)
 * - `GET /drinks?Alcoholic=<bool>` - CSV download
 * - `GET /drinks_json?Alcoholic=<bool>` - JSON mapping
 *
 * ## Demonstration
 * - `GET /get-test?name=<Names>` (`TEST`)
 * - `GET /get/{name}/saludo` (`TEST`)
 * - `GET /error_response?name=<string>` (`Error`)
 * - `GET /redirect_response/hello_lucas` (`Redirect`)
 * - `GET /items/{item_id}?q=<string>` (`TEST`)
 */

use aide::axum::routing::get_with;
use aide::axum::ApiRouter;

use crate::backend::demo::{error_response, get_item, get_saludo, get_test, redirect_hello_lucas};
use crate::backend::drinks::{get_drinks_csv, get_drinks_json};
use crate::backend::routes::docs::{TAG_DRINKS, TAG_ERROR, TAG_REDIRECT, TAG_TEST};
use crate::backend::server::state::AppState;

/// Configure drinks and demonstration routes
pub fn configure_api_routes(router: ApiRouter<AppState>) -> ApiRouter<AppState> {
    let drinks = ApiRouter::new()
        .api_route(
            "/drinks",
            get_with(get_drinks_csv, |op| op.summary("Drinks as CSV")),
        )
        .api_route(
            "/drinks_json",
            get_with(get_drinks_json, |op| op.summary("Drinks as JSON")),
        )
        .with_path_items(|item| item.tag(TAG_DRINKS));

    router
        .merge(drinks)
        // Greetings
        .api_route("/get-test", get_with(get_test, |op| op.tag(TAG_TEST)))
        .api_route(
            "/get/{name}/saludo",
            get_with(get_saludo, |op| op.tag(TAG_TEST)),
        )
        // Error and redirect demos
        .api_route(
            "/error_response",
            get_with(error_response, |op| op.tag(TAG_ERROR)),
        )
        .api_route(
            "/redirect_response/hello_lucas",
            get_with(redirect_hello_lucas, |op| op.tag(TAG_REDIRECT)),
        )
        .api_route("/items/{item_id}", get_with(get_item, |op| op.tag(TAG_TEST)))
}
