/**
 * Shared Models
 *
 * Plain data types exchanged over the HTTP API:
 * - `Drink` / `DrinkMap` - reshaped cocktail records
 * - `Names` - the closed set of names accepted by the greeting endpoints
 * - `GreetingResponse` / `ItemResponse` - demo endpoint bodies
 * - `UserApi` - admin request body for creating an API account
 */

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::shared::error::SharedError;

/// A single drink, flattened from the upstream `strDrink` / `idDrink` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(schemars::JsonSchema))]
pub struct Drink {
    /// Drink name
    pub name: String,
    /// Upstream drink identifier
    pub id: String,
}

/// Drinks keyed by name
pub type DrinkMap = BTreeMap<String, Drink>;

/// Names accepted by the greeting endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(schemars::JsonSchema))]
pub enum Names {
    Diego,
    Lucas,
    Sofia,
}

impl Names {
    pub fn as_str(&self) -> &'static str {
        match self {
            Names::Diego => "Diego",
            Names::Lucas => "Lucas",
            Names::Sofia => "Sofia",
        }
    }
}

impl fmt::Display for Names {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{"result": "Hello <name>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(schemars::JsonSchema))]
pub struct GreetingResponse {
    pub result: String,
}

impl GreetingResponse {
    pub fn hello(name: impl fmt::Display) -> Self {
        Self {
            result: format!("Hello {}", name),
        }
    }
}

/// Echo body for `GET /items/{item_id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(schemars::JsonSchema))]
pub struct ItemResponse {
    pub item_id: i64,
    pub q: Option<String>,
}

/// Request body for creating an API user
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(schemars::JsonSchema))]
pub struct UserApi {
    /// Unique login name (3-50 chars, letters, digits, `_`, `.`, `-`)
    pub username: String,
    /// Plain password, hashed before it reaches the store
    pub password: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

// Keep the password out of logs.
impl fmt::Debug for UserApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserApi")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .finish()
    }
}

impl UserApi {
    /// Check the request before it is handed to the store
    ///
    /// # Rules
    ///
    /// - `username`: 3-50 characters, ASCII letters, digits, `_`, `.` or `-`
    /// - `password`: at least 8 characters
    /// - `email`: if present, must contain `@`
    pub fn validate(&self) -> Result<(), SharedError> {
        let len = self.username.chars().count();
        if !(3..=50).contains(&len) {
            return Err(SharedError::validation(
                "username",
                "Username must be between 3 and 50 characters",
            ));
        }

        if !self
            .username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        {
            return Err(SharedError::validation(
                "username",
                "Username may only contain letters, digits, '_', '.' and '-'",
            ));
        }

        if self.password.chars().count() < 8 {
            return Err(SharedError::validation(
                "password",
                "Password must be at least 8 characters",
            ));
        }

        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(SharedError::validation("email", "Invalid email format"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str, password: &str) -> UserApi {
        UserApi {
            username: username.to_string(),
            password: password.to_string(),
            email: None,
            full_name: None,
        }
    }

    #[test]
    fn test_names_deserialize_exact_variants() {
        let name: Names = serde_json::from_str("\"Lucas\"").unwrap();
        assert_eq!(name, Names::Lucas);
        assert!(serde_json::from_str::<Names>("\"lucas\"").is_err());
        assert!(serde_json::from_str::<Names>("\"Pedro\"").is_err());
    }

    #[test]
    fn test_greeting() {
        assert_eq!(GreetingResponse::hello(Names::Diego).result, "Hello Diego");
    }

    #[test]
    fn test_validate_accepts_reasonable_user() {
        assert!(user("api.client-01", "supersecret").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_username() {
        match user("ab", "supersecret").validate() {
            Err(SharedError::ValidationError { field, .. }) => assert_eq!(field, "username"),
            other => panic!("Expected username validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_bad_characters() {
        assert!(user("bad name", "supersecret").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_short_password() {
        match user("client", "short").validate() {
            Err(SharedError::ValidationError { field, .. }) => assert_eq!(field, "password"),
            other => panic!("Expected password validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let mut request = user("client", "supersecret");
        request.email = Some("not-an-email".to_string());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", user("client", "supersecret"));
        assert!(!debug.contains("supersecret"));
        assert!(debug.contains("<redacted>"));
    }
}
