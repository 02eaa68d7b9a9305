/**
 * Delete API User Handler
 *
 * `DELETE /admin/users/delete_user?username=<name>` (HTTP Basic)
 *
 * On store failure the `detail` cookie switches to
 * `Se intentó borrar el usuario <name>, pero hubo un error`.
 */

use axum::extract::State;

use crate::backend::auth::credentials::CredentialVerifier;
use crate::backend::auth::handlers::session::{AdminResponse, AdminSession};
use crate::backend::auth::handlers::types::{AdminAction, DeleteUserParams, DeletedUserResponse};
use crate::backend::error::BackendError;
use crate::backend::extract::Query;
use crate::backend::middleware::AdminUser;
use crate::backend::users::SharedUserStore;

/// Delete API user handler
///
/// # Errors
///
/// * `401 Unauthorized` - Basic credentials missing or wrong
/// * `404 Not Found` - No user with this username
/// * `422 Unprocessable Entity` - `username` query parameter missing
/// * `500 Internal Server Error` - Store failure
pub async fn delete_api_user(
    State(verifier): State<CredentialVerifier>,
    State(store): State<SharedUserStore>,
    admin: AdminUser,
    Query(params): Query<DeleteUserParams>,
) -> Result<AdminResponse<DeletedUserResponse>, BackendError> {
    let token = verifier.issue_token(&admin.username)?;
    let action = AdminAction::Delete(&params.username);
    let session = AdminSession::begin(&token, &action);

    tracing::info!("Admin {} deleting API user {}", admin.username, params.username);
    let outcome = store
        .delete_user(&params.username)
        .await
        .map(|()| DeletedUserResponse {
            deleted: params.username.clone(),
        })
        .map_err(BackendError::from);

    Ok(session.finish(&action, outcome))
}
