//! Response DTOs.

use serde::{Deserialize, Serialize};

use catalog_entity::user::{RoleRef, User};

/// A user as exposed over HTTP. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User id.
    pub id: i64,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email.
    pub email: String,
    /// Granted roles.
    pub roles: Vec<RoleResponse>,
}

/// A role reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleResponse {
    /// Role id.
    pub id: i64,
    /// Authority string.
    pub authority: String,
}

impl From<RoleRef> for RoleResponse {
    fn from(role: RoleRef) -> Self {
        Self {
            id: role.id,
            authority: role.authority,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            roles: user.roles.into_iter().map(RoleResponse::from).collect(),
        }
    }
}

/// Liveness report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `UP` while the process serves requests.
    pub status: String,
    /// Crate version.
    pub version: String,
}
