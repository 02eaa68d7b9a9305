/**
 * Credential Verifier
 *
 * Checks HTTP Basic credentials against the configured admin account and
 * mints access tokens for the caller once they pass.
 *
 * # Matching Rule
 *
 * - the username must equal `ADMIN_USERNAME`
 * - the password must bcrypt-verify against the admin password hash
 *
 * The bcrypt check runs even when the username is wrong, so both failure
 * paths take about the same time.
 */

use std::sync::Arc;

use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::error::BackendError;
use crate::backend::server::config::ServerConfig;

const INVALID_CREDENTIALS: &str = "Incorrect username or password";

/// Admin credential check plus token issuance
#[derive(Clone)]
pub struct CredentialVerifier {
    admin_username: Arc<str>,
    admin_password_hash: Arc<str>,
    tokens: TokenIssuer,
}

impl std::fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialVerifier")
            .field("admin_username", &self.admin_username)
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

impl CredentialVerifier {
    pub fn new(
        admin_username: impl Into<String>,
        admin_password_hash: impl Into<String>,
        tokens: TokenIssuer,
    ) -> Self {
        Self {
            admin_username: Arc::from(admin_username.into()),
            admin_password_hash: Arc::from(admin_password_hash.into()),
            tokens,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            config.admin_username.clone(),
            config.admin_password_hash.clone(),
            TokenIssuer::new(config.jwt_secret.clone(), config.access_token_expire_minutes),
        )
    }

    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }

    /// Verify a Basic username/password pair
    ///
    /// # Errors
    ///
    /// `BackendError::Unauthorized` on any mismatch, including a malformed
    /// stored hash.
    pub fn verify(&self, username: &str, password: &str) -> Result<(), BackendError> {
        let password_ok = bcrypt::verify(password, &self.admin_password_hash).unwrap_or_else(|e| {
            tracing::error!("Admin password hash could not be checked: {:?}", e);
            false
        });
        let username_ok = username == &*self.admin_username;

        if username_ok && password_ok {
            Ok(())
        } else {
            tracing::warn!("Rejected admin credentials for user: {}", username);
            Err(BackendError::unauthorized(INVALID_CREDENTIALS))
        }
    }

    /// Mint an access token for an authenticated username
    pub fn issue_token(&self, username: &str) -> Result<String, BackendError> {
        self.tokens.create_token(username).map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            BackendError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn verifier() -> CredentialVerifier {
        let hash = bcrypt::hash("correct horse", 4).unwrap();
        CredentialVerifier::new("admin", hash, TokenIssuer::new("test-secret", 15))
    }

    #[test]
    fn test_valid_credentials() {
        assert!(verifier().verify("admin", "correct horse").is_ok());
    }

    #[test]
    fn test_wrong_password() {
        let err = verifier().verify("admin", "battery staple").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_wrong_username() {
        assert!(verifier().verify("root", "correct horse").is_err());
    }

    #[test]
    fn test_malformed_hash_rejects() {
        let verifier = CredentialVerifier::new("admin", "not-a-hash", TokenIssuer::new("s", 15));
        assert!(verifier.verify("admin", "anything").is_err());
    }

    #[test]
    fn test_issue_token_binds_username() {
        let verifier = verifier();
        let token = verifier.issue_token("admin").unwrap();
        let claims = verifier.tokens().verify_token(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }
}
