/**
 * Admin Routes
 *
 * Every route here requires HTTP Basic credentials for the configured
 * admin account; the check happens in the `AdminUser` extractor before
 * the store is touched. All three carry the `ADMIN` tag.
 *
 * - `POST /admin/users/create_api_user` - JSON `UserApi` body
 * - `DELETE /admin/users/delete_user?username=<string>`
 * - `GET /admin/users/get_users`
 */

use aide::axum::routing::{delete_with, get_with, post_with};
use aide::axum::ApiRouter;
use aide::transform::TransformOperation;

use crate::backend::auth::{create_api_user, delete_api_user, get_api_users};
use crate::backend::routes::docs::TAG_ADMIN;
use crate::backend::server::state::AppState;

fn basic_auth_docs(op: TransformOperation) -> TransformOperation {
    op.description("Requires HTTP Basic credentials for the admin account.")
}

/// Configure the admin user routes
pub fn configure_admin_routes(router: ApiRouter<AppState>) -> ApiRouter<AppState> {
    let admin = ApiRouter::new()
        .api_route(
            "/admin/users/create_api_user",
            post_with(create_api_user, |op| {
                basic_auth_docs(op).summary("Create an API user")
            }),
        )
        .api_route(
            "/admin/users/delete_user",
            delete_with(delete_api_user, |op| {
                basic_auth_docs(op).summary("Delete an API user")
            }),
        )
        .api_route(
            "/admin/users/get_users",
            get_with(get_api_users, |op| {
                basic_auth_docs(op).summary("List API users")
            }),
        )
        .with_path_items(|item| item.tag(TAG_ADMIN));

    router.merge(admin)
}
