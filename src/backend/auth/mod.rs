//! Authentication Module
//!
//! Credential checks, token minting and the admin handlers built on them.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── credentials.rs  - Basic-auth verifier for the admin account
//! ├── sessions.rs     - JWT access tokens
//! └── handlers/       - Admin user CRUD handlers
//! ```
//!
//! # Security
//!
//! - The admin password is only ever held as a bcrypt hash
//! - API user passwords are hashed with bcrypt before storage
//! - Access tokens are HS256 JWTs with a configured lifetime
//! - Failed credential checks return 401 with no hint which part was wrong

/// Admin credential verification
pub mod credentials;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for admin endpoints
pub mod handlers;

pub use credentials::CredentialVerifier;
pub use handlers::{create_api_user, delete_api_user, get_api_users};
pub use sessions::{Claims, TokenIssuer};
