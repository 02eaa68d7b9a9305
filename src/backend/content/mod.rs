//! Static Content Module
//!
//! Fixed files served from the configured content directory.
//!
//! # Module Structure
//!
//! ```text
//! content/
//! ├── mod.rs       - ContentDir and module exports
//! ├── template.rs  - `{name}` substitution
//! └── handlers.rs  - /html_response, /wordcloud, /video_response
//! ```

use std::path::PathBuf;
use std::sync::Arc;

pub mod handlers;
pub mod template;

pub use handlers::{html_response, video_response, wordcloud};

/// Directory the static content handlers read from
#[derive(Clone, Debug)]
pub struct ContentDir {
    root: Arc<PathBuf>,
}

impl ContentDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    /// Read a UTF-8 file relative to the content root
    pub async fn read_text(&self, file: &str) -> std::io::Result<String> {
        let path = self.root.join(file);
        tracing::debug!("Reading {}", path.display());
        tokio::fs::read_to_string(&path).await
    }

    /// Read a binary file relative to the content root
    pub async fn read_bytes(&self, file: &str) -> std::io::Result<Vec<u8>> {
        let path = self.root.join(file);
        tracing::debug!("Reading {}", path.display());
        tokio::fs::read(&path).await
    }
}
