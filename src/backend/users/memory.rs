//! In-memory user store, used when no database is configured and in tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::backend::users::store::{ApiUser, NewApiUser, StoreError, UserStore};

/// `UserStore` backed by a `HashMap` behind a `tokio::sync::RwLock`
///
/// Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, ApiUser>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn add_user(&self, user: NewApiUser) -> Result<ApiUser, StoreError> {
        user.check_column_limits()?;

        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Err(StoreError::Conflict(user.username));
        }

        let stored = ApiUser {
            id: uuid::Uuid::new_v4(),
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        users.insert(stored.username.clone(), stored.clone());
        Ok(stored)
    }

    async fn delete_user(&self, username: &str) -> Result<(), StoreError> {
        self.users
            .write()
            .await
            .remove(username)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(username.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<ApiUser>, StoreError> {
        let mut users: Vec<ApiUser> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.username.cmp(&b.username))
        });
        Ok(users)
    }
}
