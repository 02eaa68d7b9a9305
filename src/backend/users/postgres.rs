/**
 * PostgreSQL User Store
 *
 * `UserStore` over the `api_users` table created by the migration in
 * `migrations/`. Unique-constraint violations become `Conflict`, values
 * wider than their column (SQLSTATE 22001) or failing a check constraint
 * become `Rejected`, and every other database error becomes `Backend`.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::backend::users::store::{ApiUser, NewApiUser, StoreError, UserStore};

/// SQLSTATE for a value too long for its column
const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";

/// `UserStore` backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    /// Create a new user
    ///
    /// # Returns
    /// Created user, `Conflict` on duplicate username
    async fn add_user(&self, user: NewApiUser) -> Result<ApiUser, StoreError> {
        let id = uuid::Uuid::new_v4();
        let now = Utc::now();

        let result = sqlx::query_as::<_, ApiUser>(
            r#"
            INSERT INTO api_users (id, username, email, full_name, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username, email, full_name, password_hash, created_at
            "#,
        )
        .bind(id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.full_name)
        .bind(&user.password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(created) => Ok(created),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                tracing::warn!("Username already exists: {}", user.username);
                Err(StoreError::Conflict(user.username))
            }
            Err(sqlx::Error::Database(db_err))
                if db_err.is_check_violation()
                    || db_err.code().as_deref() == Some(STRING_DATA_RIGHT_TRUNCATION) =>
            {
                tracing::warn!("API user {} rejected: {}", user.username, db_err);
                Err(StoreError::Rejected(db_err.message().to_string()))
            }
            Err(e) => {
                tracing::error!("Failed to insert API user: {:?}", e);
                Err(e.into())
            }
        }
    }

    /// Delete a user by username
    async fn delete_user(&self, username: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM api_users WHERE username = $1")
            .bind(username)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete API user: {:?}", e);
                StoreError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(username.to_string()));
        }
        Ok(())
    }

    /// List users ordered by creation time
    async fn list_users(&self) -> Result<Vec<ApiUser>, StoreError> {
        let users = sqlx::query_as::<_, ApiUser>(
            r#"
            SELECT id, username, email, full_name, password_hash, created_at
            FROM api_users
            ORDER BY created_at, username
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
