//! User entity model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::role::RoleRef;

/// A registered user of the catalog.
///
/// The email doubles as the login name and is unique across all users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier, assigned on insert.
    pub id: i64,
    /// First name, published in issued tokens.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Unique email address; the login name.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Granted roles.
    pub roles: BTreeSet<RoleRef>,
}

impl User {
    /// Role authorities held by this user, e.g. `["ROLE_OPERATOR"]`.
    pub fn authorities(&self) -> Vec<String> {
        self.roles.iter().map(|r| r.authority.clone()).collect()
    }

    /// Check if the user holds the given authority.
    pub fn has_authority(&self, authority: &str) -> bool {
        self.roles.iter().any(|r| r.authority == authority)
    }
}

/// Data required to create a new user. The store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Granted roles.
    pub roles: BTreeSet<RoleRef>,
}

impl NewUser {
    /// Materializes the record once the store has picked an id.
    pub fn with_id(self, id: i64) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password_hash: self.password_hash,
            roles: self.roles,
        }
    }
}
