/**
 * User Store Contract
 *
 * The admin handlers talk to persistence only through `UserStore`. Every
 * operation returns a typed result so the route layer can tell a missing
 * user from a duplicate from a broken backend.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Failure reported by a user store
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No user with this username
    #[error("user '{0}' was not found")]
    NotFound(String),

    /// A user with this username already exists
    #[error("user '{0}' already exists")]
    Conflict(String),

    /// The store refused a well-formed request, e.g. a value longer than
    /// its column allows (`MAX_EMAIL_LEN`, `MAX_FULL_NAME_LEN`)
    #[error("request rejected by the user store: {0}")]
    Rejected(String),

    /// I/O or database failure
    #[error("user store failure: {0}")]
    Backend(String),
}

/// Column width of `api_users.email`
pub const MAX_EMAIL_LEN: usize = 254;

/// Column width of `api_users.full_name`
pub const MAX_FULL_NAME_LEN: usize = 100;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

/// A stored API user
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, sqlx::FromRow)]
pub struct ApiUser {
    pub id: uuid::Uuid,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    /// bcrypt hash; never serialized into responses
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Data needed to create an API user; the password is already hashed
#[derive(Debug, Clone)]
pub struct NewApiUser {
    pub username: String,
    pub password_hash: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

impl NewApiUser {
    /// Reject values wider than the `api_users` columns
    pub fn check_column_limits(&self) -> Result<(), StoreError> {
        let too_long = |value: &Option<String>, max: usize| {
            value.as_deref().is_some_and(|v| v.chars().count() > max)
        };

        if too_long(&self.email, MAX_EMAIL_LEN) {
            return Err(StoreError::Rejected(format!(
                "email longer than {} characters",
                MAX_EMAIL_LEN
            )));
        }
        if too_long(&self.full_name, MAX_FULL_NAME_LEN) {
            return Err(StoreError::Rejected(format!(
                "full_name longer than {} characters",
                MAX_FULL_NAME_LEN
            )));
        }
        Ok(())
    }
}

/// Persistence for API users
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user; `Conflict` if the username is taken
    async fn add_user(&self, user: NewApiUser) -> Result<ApiUser, StoreError>;

    /// Delete a user by username; `NotFound` if absent
    async fn delete_user(&self, username: &str) -> Result<(), StoreError>;

    /// All users ordered by creation time
    async fn list_users(&self) -> Result<Vec<ApiUser>, StoreError>;
}

/// Store handle kept in `AppState`
pub type SharedUserStore = Arc<dyn UserStore>;
