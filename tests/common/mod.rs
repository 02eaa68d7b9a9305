//! Common test utilities and helpers
//!
//! This module provides shared utilities for all integration tests:
//! - In-process app construction (`TestApp`)
//! - Mock cocktail API (wiremock)
//! - Basic-auth and cookie helpers
//! - Instrumented user stores
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod mock_server;
pub mod stores;

pub use auth_helpers::*;
pub use mock_server::*;
pub use stores::*;

use std::sync::Arc;

use axum_test::TestServer;
use drinks_gateway::backend::routes::create_router;
use drinks_gateway::backend::server::{AppState, ServerConfig};
use tempfile::TempDir;
use wiremock::MockServer;

/// Password of the admin account in every test app
pub const ADMIN_PASSWORD: &str = "s3cret-pass";

/// Minimum bcrypt cost, keeps hashing fast in tests
pub const TEST_BCRYPT_COST: u32 = 4;

pub const TEMPLATE_HTML: &str =
    "<html><style>h1 {{ color: red; }}</style><h1>Hola {name}!</h1></html>";
pub const WORDCLOUD_HTML: &str = "<html><div class=\"cloud\">{not a placeholder}</div></html>";
pub const VIDEO_BYTES: &[u8] = &[0x00, 0x00, 0x00, 0x18, b'f', b't', b'y', b'p'];

/// A running in-process app with its collaborators
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<CountingStore>,
    pub config: ServerConfig,
    pub upstream: Option<MockServer>,
    pub content: TempDir,
}

/// Configuration pointing at the given upstream and content directory
pub fn test_config(cocktail_api_url: &str, content_dir: &std::path::Path) -> ServerConfig {
    ServerConfig {
        cocktail_api_url: cocktail_api_url.to_string(),
        content_dir: content_dir.to_path_buf(),
        admin_password_hash: bcrypt::hash(ADMIN_PASSWORD, TEST_BCRYPT_COST)
            .expect("hash admin password"),
        jwt_secret: "integration-test-secret".to_string(),
        access_token_expire_minutes: 30,
        bcrypt_cost: TEST_BCRYPT_COST,
        ..ServerConfig::default()
    }
}

/// Content directory holding every static asset
pub fn content_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("create content dir");
    std::fs::write(dir.path().join("template.html"), TEMPLATE_HTML).expect("write template");
    std::fs::write(dir.path().join("wordcloud.html"), WORDCLOUD_HTML).expect("write wordcloud");
    std::fs::write(dir.path().join("video.mp4"), VIDEO_BYTES).expect("write video");
    dir
}

impl TestApp {
    /// App without an upstream; drinks requests fail to connect
    pub async fn spawn() -> Self {
        Self::build(None, CountingStore::new()).await
    }

    /// App whose cocktail API is a fresh wiremock server
    pub async fn with_upstream() -> Self {
        let upstream = MockServer::start().await;
        Self::build(Some(upstream), CountingStore::new()).await
    }

    /// App backed by the given store
    pub async fn with_store(store: CountingStore) -> Self {
        Self::build(None, store).await
    }

    async fn build(upstream: Option<MockServer>, store: CountingStore) -> Self {
        let content = content_dir();
        // Port 9 (discard) on loopback refuses connections quickly
        let base_url = upstream
            .as_ref()
            .map(|server| server.uri())
            .unwrap_or_else(|| "http://127.0.0.1:9".to_string());
        let config = test_config(&base_url, content.path());

        let store = Arc::new(store);
        let state = AppState::new(config.clone(), store.clone()).expect("build app state");
        let server = TestServer::new(create_router(state)).expect("start test server");

        Self {
            server,
            store,
            config,
            upstream,
            content,
        }
    }

    pub fn upstream(&self) -> &MockServer {
        self.upstream.as_ref().expect("app was built without an upstream")
    }
}
