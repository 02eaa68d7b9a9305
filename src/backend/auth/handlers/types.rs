/**
 * Admin Handler Types
 *
 * Request/response types for the admin endpoints and the action
 * descriptions written into the `detail` cookie.
 */

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Query string for `DELETE /admin/users/delete_user`
#[derive(Deserialize, Serialize, JsonSchema, Debug)]
pub struct DeleteUserParams {
    pub username: String,
}

/// Body returned after a successful delete
#[derive(Serialize, Deserialize, JsonSchema, Debug, PartialEq, Eq)]
pub struct DeletedUserResponse {
    pub deleted: String,
}

/// The admin action being attempted, for the `detail` cookie
#[derive(Debug, Clone, Copy)]
pub enum AdminAction<'a> {
    Create(&'a str),
    Delete(&'a str),
    List,
}

impl AdminAction<'_> {
    /// Description set before the store is called
    pub fn attempted(&self) -> String {
        match self {
            AdminAction::Create(username) => format!("Creacion de API-USER {}", username),
            AdminAction::Delete(username) => format!("Se ha borrado el usuario {}", username),
            AdminAction::List => "Se ha consultado el listado de usuarios".to_string(),
        }
    }

    /// Description that replaces `attempted` when the store fails
    pub fn failed(&self) -> String {
        match self {
            AdminAction::Create(username) => {
                format!("Se intentó crear el API-USER {}, pero hubo un error", username)
            }
            AdminAction::Delete(username) => {
                format!("Se intentó borrar el usuario {}, pero hubo un error", username)
            }
            AdminAction::List => {
                "Se intentó consultar el listado de usuarios, pero hubo un error".to_string()
            }
        }
    }
}
