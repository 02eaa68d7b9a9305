//! Drinks Module
//!
//! Passthrough to the public cocktail API.
//!
//! # Module Structure
//!
//! ```text
//! drinks/
//! ├── mod.rs       - Module exports and documentation
//! ├── client.rs    - reqwest client and upstream reshaping
//! ├── export.rs    - CSV rendering
//! └── handlers.rs  - /drinks and /drinks_json
//! ```

pub mod client;
pub mod export;
pub mod handlers;

pub use client::{DrinksClient, DrinksError};
pub use handlers::{get_drinks_csv, get_drinks_json};
