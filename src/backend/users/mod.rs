//! API User Store Module
//!
//! Persistence for the accounts managed by the admin endpoints.
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs       - Module exports and documentation
//! ├── store.rs     - UserStore trait, ApiUser, StoreError
//! ├── memory.rs    - In-memory store
//! └── postgres.rs  - PostgreSQL store (sqlx)
//! ```

/// Store trait and data types
pub mod store;

/// In-memory implementation
pub mod memory;

/// PostgreSQL implementation
pub mod postgres;

pub use memory::InMemoryUserStore;
pub use postgres::PgUserStore;
pub use store::{ApiUser, NewApiUser, SharedUserStore, StoreError, UserStore};
