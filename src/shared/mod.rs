//! Shared Module
//!
//! Request and response types that do not depend on the web framework.
//! Everything here is plain serde data plus validation, so it can be used
//! by the server, by tests, and by any client that talks to the API.

/// Drink, greeting and API-user models
pub mod models;

/// Shared error types
pub mod error;

pub use error::SharedError;
pub use models::{Drink, DrinkMap, GreetingResponse, ItemResponse, Names, UserApi};
