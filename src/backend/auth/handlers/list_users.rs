//! `GET /admin/users/get_users` (HTTP Basic)

use axum::extract::State;

use crate::backend::auth::credentials::CredentialVerifier;
use crate::backend::auth::handlers::session::{AdminResponse, AdminSession};
use crate::backend::auth::handlers::types::AdminAction;
use crate::backend::error::BackendError;
use crate::backend::middleware::AdminUser;
use crate::backend::users::{ApiUser, SharedUserStore};

/// List API users
///
/// An empty store is a successful, empty list.
pub async fn get_api_users(
    State(verifier): State<CredentialVerifier>,
    State(store): State<SharedUserStore>,
    admin: AdminUser,
) -> Result<AdminResponse<Vec<ApiUser>>, BackendError> {
    let token = verifier.issue_token(&admin.username)?;
    let action = AdminAction::List;
    let session = AdminSession::begin(&token, &action);

    let outcome = store.list_users().await.map_err(BackendError::from);

    Ok(session.finish(&action, outcome))
}
