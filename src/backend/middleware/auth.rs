/**
 * Admin Authentication Extractor
 *
 * Admin handlers take an `AdminUser` argument. Extraction reads the
 * `Authorization: Basic ...` header and checks it with the
 * `CredentialVerifier` from state. Any failure rejects the request with a
 * 401 before the handler body runs, so the user store is never touched.
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Basic, Authorization},
    TypedHeader,
};

use crate::backend::auth::credentials::CredentialVerifier;
use crate::backend::error::BackendError;

/// Admin caller whose Basic credentials were verified
#[derive(Clone, Debug)]
pub struct AdminUser {
    pub username: String,
}

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    CredentialVerifier: FromRef<S>,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(basic)) =
            TypedHeader::<Authorization<Basic>>::from_request_parts(parts, state)
                .await
                .map_err(|e| {
                    tracing::warn!("Missing or malformed Basic authorization: {}", e);
                    BackendError::unauthorized("Not authenticated")
                })?;

        let verifier = CredentialVerifier::from_ref(state);
        verifier.verify(basic.username(), basic.password())?;

        Ok(AdminUser {
            username: basic.username().to_string(),
        })
    }
}

impl aide::OperationInput for AdminUser {}
