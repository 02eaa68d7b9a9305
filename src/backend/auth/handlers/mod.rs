//! Admin Handlers Module
//!
//! HTTP handlers for the credential-gated admin endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs          - Handler exports
//! ├── types.rs        - Request/response types, cookie wording
//! ├── session.rs      - Authorization/detail cookies and response assembly
//! ├── create_user.rs  - POST   /admin/users/create_api_user
//! ├── delete_user.rs  - DELETE /admin/users/delete_user
//! └── list_users.rs   - GET    /admin/users/get_users
//! ```
//!
//! # Flow
//!
//! 1. Verify Basic credentials (`AdminUser` extractor, 401 on failure)
//! 2. Mint a token, set `Authorization` and `detail` cookies
//! 3. Call the user store
//! 4. On failure rewrite `detail` and map the typed store error to a status
//! 5. Return one response carrying body, status and both cookies

/// Request and response types
pub mod types;

/// Session cookies
pub mod session;

/// Create handler
pub mod create_user;

/// Delete handler
pub mod delete_user;

/// List handler
pub mod list_users;

pub use create_user::create_api_user;
pub use delete_user::delete_api_user;
pub use list_users::get_api_users;
pub use session::{AdminResponse, AUTHORIZATION_COOKIE, DETAIL_COOKIE};
pub use types::{AdminAction, DeleteUserParams, DeletedUserResponse};
