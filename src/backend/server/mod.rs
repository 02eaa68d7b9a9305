//! Server Module
//!
//! Server initialization and configuration.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration and database loading
//! ├── init.rs         - App creation
//! └── shutdown.rs     - Ctrl+C / SIGTERM handling
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Store Selection**: PostgreSQL if reachable, in-memory otherwise
//! 3. **State Creation**: upstream client, credential verifier, content dir
//! 4. **Router Creation**: route tables, logging and CORS layers

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

/// Graceful shutdown
pub mod shutdown;

pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use shutdown::shutdown_signal;
pub use state::AppState;
