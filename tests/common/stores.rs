//! Instrumented user stores
//!
//! `CountingStore` delegates to `InMemoryUserStore`, counts every call and
//! can be told to fail each call with a fixed `StoreError`.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use drinks_gateway::backend::users::{
    ApiUser, InMemoryUserStore, NewApiUser, StoreError, UserStore,
};

pub struct CountingStore {
    inner: InMemoryUserStore,
    calls: AtomicUsize,
    fail_with: Option<StoreError>,
}

impl CountingStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryUserStore::new(),
            calls: AtomicUsize::new(0),
            fail_with: None,
        }
    }

    /// Store whose every call returns `error`
    pub fn failing(error: StoreError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserStore for CountingStore {
    async fn add_user(&self, user: NewApiUser) -> Result<ApiUser, StoreError> {
        self.record()?;
        self.inner.add_user(user).await
    }

    async fn delete_user(&self, username: &str) -> Result<(), StoreError> {
        self.record()?;
        self.inner.delete_user(username).await
    }

    async fn list_users(&self) -> Result<Vec<ApiUser>, StoreError> {
        self.record()?;
        self.inner.list_users().await
    }
}
