/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables
 * (a `.env` file is loaded by `main` first) and optionally connects to
 * PostgreSQL for user persistence.
 *
 * # Configuration Sources
 *
 * | Variable                      | Default                                      |
 * |-------------------------------|----------------------------------------------|
 * | `SERVER_HOST`                 | `0.0.0.0`                                    |
 * | `SERVER_PORT`                 | `8000`                                       |
 * | `COCKTAIL_API_URL`            | `https://www.thecocktaildb.com/api/json/v1/1`|
 * | `UPSTREAM_TIMEOUT_SECS`       | `10`                                         |
 * | `CONTENT_DIR`                 | `content`                                    |
 * | `ADMIN_USERNAME`              | `admin`                                      |
 * | `ADMIN_PASSWORD_HASH`         | (bcrypt hash, preferred)                     |
 * | `ADMIN_PASSWORD`              | (plain, hashed at startup)                   |
 * | `JWT_SECRET`                  | development secret, with a warning           |
 * | `ACCESS_TOKEN_EXPIRE_MINUTES` | `30`                                         |
 * | `BCRYPT_COST`                 | `bcrypt::DEFAULT_COST`                       |
 * | `DATABASE_URL`                | unset: in-memory user store                  |
 *
 * # Error Handling
 *
 * Malformed values and a missing admin password are hard errors. A missing
 * or unreachable database is not: the server logs a warning and falls back
 * to the in-memory store.
 */

use sqlx::PgPool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_COCKTAIL_API_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";
const DEV_JWT_SECRET: &str = "drinks-gateway-dev-secret-change-me";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },

    /// Neither `ADMIN_PASSWORD_HASH` nor `ADMIN_PASSWORD` is set
    #[error("ADMIN_PASSWORD_HASH or ADMIN_PASSWORD must be set")]
    MissingAdminPassword,

    /// Hashing `ADMIN_PASSWORD` failed
    #[error("Failed to hash ADMIN_PASSWORD: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the cocktail API, without trailing slash
    pub cocktail_api_url: String,
    pub upstream_timeout: Duration,
    /// Directory holding `template.html`, `wordcloud.html` and `video.mp4`
    pub content_dir: PathBuf,
    pub admin_username: String,
    /// bcrypt hash of the admin password
    pub admin_password_hash: String,
    pub jwt_secret: String,
    pub access_token_expire_minutes: i64,
    /// bcrypt cost for passwords of created API users
    pub bcrypt_cost: u32,
    pub database_url: Option<String>,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cocktail_api_url", &self.cocktail_api_url)
            .field("upstream_timeout", &self.upstream_timeout)
            .field("content_dir", &self.content_dir)
            .field("admin_username", &self.admin_username)
            .field("access_token_expire_minutes", &self.access_token_expire_minutes)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("database_configured", &self.database_url.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for ServerConfig {
    /// Defaults with no usable admin password; callers set one.
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cocktail_api_url: DEFAULT_COCKTAIL_API_URL.to_string(),
            upstream_timeout: Duration::from_secs(10),
            content_dir: PathBuf::from("content"),
            admin_username: "admin".to_string(),
            admin_password_hash: String::new(),
            jwt_secret: DEV_JWT_SECRET.to_string(),
            access_token_expire_minutes: 30,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            database_url: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let bcrypt_cost = parse_var(&get, "BCRYPT_COST", defaults.bcrypt_cost)?;

        let admin_password_hash = match (get("ADMIN_PASSWORD_HASH"), get("ADMIN_PASSWORD")) {
            (Some(hash), _) => hash,
            (None, Some(password)) => {
                tracing::info!("Hashing ADMIN_PASSWORD at startup");
                bcrypt::hash(password, bcrypt_cost)?
            }
            (None, None) => return Err(ConfigError::MissingAdminPassword),
        };

        let jwt_secret = get("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set, using the development secret");
            defaults.jwt_secret.clone()
        });

        let cocktail_api_url = get("COCKTAIL_API_URL")
            .unwrap_or(defaults.cocktail_api_url)
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            host: get("SERVER_HOST").unwrap_or(defaults.host),
            port: parse_var(&get, "SERVER_PORT", defaults.port)?,
            cocktail_api_url,
            upstream_timeout: Duration::from_secs(parse_var(
                &get,
                "UPSTREAM_TIMEOUT_SECS",
                defaults.upstream_timeout.as_secs(),
            )?),
            content_dir: get("CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.content_dir),
            admin_username: get("ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_password_hash,
            jwt_secret,
            access_token_expire_minutes: parse_var(
                &get,
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                defaults.access_token_expire_minutes,
            )?,
            bcrypt_cost,
            database_url: get("DATABASE_URL"),
        })
    }

    /// Socket address string to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<G, T>(get: &G, name: &'static str, default: T) -> Result<T, ConfigError>
where
    G: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match get(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}

/// Load and initialize the database connection pool
///
/// # Returns
///
/// - `Some(PgPool)` if the database is reachable and migrated
/// - `None` if no URL is configured or the connection fails
pub async fn load_database(database_url: Option<&str>) -> Option<PgPool> {
    let Some(database_url) = database_url else {
        tracing::warn!("DATABASE_URL not set. Using the in-memory user store.");
        return None;
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to the in-memory user store.");
            return None;
        }
    };

    tracing::info!("Running database migrations...");
    if let Err(e) = sqlx::migrate!().run(&pool).await {
        tracing::error!("Failed to run database migrations: {}", e);
        tracing::warn!("Continuing without migrations - database might not be up to date");
    }

    Some(pool)
}
