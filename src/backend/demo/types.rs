//! Query strings for the demonstration endpoints

use schemars::JsonSchema;
use serde::Deserialize;

use crate::shared::Names;

/// `?name=<Names>`
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GreetingQuery {
    pub name: Names,
}

/// `?name=<string>`, any value accepted
#[derive(Debug, Deserialize, JsonSchema)]
pub struct PermissionQuery {
    pub name: String,
}

/// Optional `?q=` on the item echo
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ItemQuery {
    pub q: Option<String>,
}
