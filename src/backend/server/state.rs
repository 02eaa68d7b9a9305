/**
 * Application State Management
 *
 * This module defines the application state and the `FromRef`
 * implementations that let handlers extract only the part they need.
 *
 * # Thread Safety
 *
 * - `Arc<ServerConfig>` is read-only after startup
 * - `DrinksClient` wraps a `reqwest::Client`, which is cheap to clone
 * - `CredentialVerifier` holds immutable secrets
 * - `Arc<dyn UserStore>` implementations handle their own synchronization
 *
 * # Example
 *
 * ```rust,ignore
 * use axum::extract::State;
 * use drinks_gateway::backend::users::SharedUserStore;
 *
 * async fn handler(State(store): State<SharedUserStore>) {
 *     let users = store.list_users().await;
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::credentials::CredentialVerifier;
use crate::backend::content::ContentDir;
use crate::backend::drinks::client::DrinksClient;
use crate::backend::server::config::ServerConfig;
use crate::backend::users::SharedUserStore;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,

    /// Client for the upstream cocktail API
    pub drinks_client: DrinksClient,

    /// Basic-auth verifier and token issuer for the admin routes
    pub credentials: CredentialVerifier,

    /// Backing store for API users
    pub user_store: SharedUserStore,

    /// Static content directory
    pub content: ContentDir,
}

impl AppState {
    /// Build the state from configuration and an already chosen user store
    pub fn new(config: ServerConfig, user_store: SharedUserStore) -> Result<Self, reqwest::Error> {
        let drinks_client =
            DrinksClient::new(config.cocktail_api_url.clone(), config.upstream_timeout)?;
        let credentials = CredentialVerifier::from_config(&config);
        let content = ContentDir::new(config.content_dir.clone());

        Ok(Self {
            config: Arc::new(config),
            drinks_client,
            credentials,
            user_store,
            content,
        })
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for DrinksClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.drinks_client.clone()
    }
}

impl FromRef<AppState> for CredentialVerifier {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.credentials.clone()
    }
}

impl FromRef<AppState> for SharedUserStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.user_store.clone()
    }
}

impl FromRef<AppState> for ContentDir {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.content.clone()
    }
}
