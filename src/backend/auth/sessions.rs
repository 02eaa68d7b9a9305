/**
 * Access Tokens
 *
 * This module mints the bearer tokens handed back to admin callers. Tokens
 * are HS256 JWTs carrying the admin username in `sub`. They are not stored
 * server-side and there is no renewal or revocation.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Authenticated username
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signs and verifies access tokens with a shared secret
#[derive(Clone)]
pub struct TokenIssuer {
    secret: Arc<str>,
    expire_minutes: i64,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("expire_minutes", &self.expire_minutes)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    pub fn new(secret: impl Into<String>, expire_minutes: i64) -> Self {
        Self {
            secret: Arc::from(secret.into()),
            expire_minutes,
        }
    }

    /// Create a token for `username` expiring after the configured window
    pub fn create_token(&self, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: username.to_string(),
            iat: now,
            exp: now + self.expire_minutes * 60,
        };

        let key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::default(), &claims, &key)
    }

    /// Verify and decode a token
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let key = DecodingKey::from_secret(self.secret.as_bytes());
        let token_data = decode::<Claims>(token, &key, &Validation::default())?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_verify_token() {
        let issuer = TokenIssuer::new("test-secret", 30);
        let token = issuer.create_token("admin").unwrap();
        assert!(!token.is_empty());

        let claims = issuer.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let token = TokenIssuer::new("secret-a", 30).create_token("admin").unwrap();
        assert!(TokenIssuer::new("secret-b", 30).verify_token(&token).is_err());
    }

    #[test]
    fn test_verify_invalid_token() {
        let issuer = TokenIssuer::new("test-secret", 30);
        assert!(issuer.verify_token("invalid.token.here").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = TokenIssuer::new("test-secret", -10);
        let token = issuer.create_token("admin").unwrap();
        assert!(issuer.verify_token(&token).is_err());
    }
}
