/**
 * Create API User Handler
 *
 * `POST /admin/users/create_api_user` (HTTP Basic)
 *
 * # Process
 *
 * 1. `AdminUser` extraction verifies the Basic credentials (401 otherwise)
 * 2. Mint an access token and set the `Authorization` / `detail` cookies
 * 3. Validate the body and hash the password with bcrypt
 * 4. Insert into the user store
 * 5. Return the created user (no password hash) or a mapped store error
 */

use axum::{extract::State, http::StatusCode};
use std::sync::Arc;

use crate::backend::auth::credentials::CredentialVerifier;
use crate::backend::auth::handlers::session::{AdminResponse, AdminSession};
use crate::backend::auth::handlers::types::AdminAction;
use crate::backend::error::BackendError;
use crate::backend::extract::Json;
use crate::backend::middleware::AdminUser;
use crate::backend::server::config::ServerConfig;
use crate::backend::users::{ApiUser, NewApiUser, SharedUserStore};
use crate::shared::UserApi;

/// Create API user handler
///
/// # Example Request
///
/// ```http
/// POST /admin/users/create_api_user HTTP/1.1
/// Authorization: Basic YWRtaW46c2VjcmV0
/// Content-Type: application/json
///
/// {"username": "reporting", "password": "longenough", "email": "ops@example.com"}
/// ```
///
/// # Errors
///
/// * `401 Unauthorized` - Basic credentials missing or wrong
/// * `400 Bad Request` - Body failed validation or was rejected by the store
/// * `422 Unprocessable Entity` - Body is not a `UserApi` object
/// * `409 Conflict` - Username already exists
/// * `500 Internal Server Error` - Hashing or store failure
pub async fn create_api_user(
    State(verifier): State<CredentialVerifier>,
    State(store): State<SharedUserStore>,
    State(config): State<Arc<ServerConfig>>,
    admin: AdminUser,
    Json(user): Json<UserApi>,
) -> Result<AdminResponse<ApiUser>, BackendError> {
    let token = verifier.issue_token(&admin.username)?;
    let action = AdminAction::Create(&user.username);
    let session = AdminSession::begin(&token, &action);

    tracing::info!("Admin {} creating API user {}", admin.username, user.username);
    let outcome = add_user(&store, config.bcrypt_cost, &user).await;

    Ok(session.finish(&action, outcome))
}

async fn add_user(
    store: &SharedUserStore,
    bcrypt_cost: u32,
    user: &UserApi,
) -> Result<ApiUser, BackendError> {
    user.validate()?;

    let password_hash = bcrypt::hash(&user.password, bcrypt_cost).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    })?;

    let created = store
        .add_user(NewApiUser {
            username: user.username.clone(),
            password_hash,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
        })
        .await?;

    tracing::info!("API user created: {}", created.username);
    Ok(created)
}
