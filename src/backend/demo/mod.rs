//! Demonstration Module
//!
//! Greeting, permission-error, redirect and item echo endpoints.

pub mod handlers;
pub mod types;

pub use handlers::{error_response, get_item, get_saludo, get_test, redirect_hello_lucas};
