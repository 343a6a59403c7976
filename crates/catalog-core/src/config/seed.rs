//! Reference data loaded into the credential store at startup.

use serde::{Deserialize, Serialize};

/// Seed data section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Roles, inserted with the given ids.
    #[serde(default)]
    pub roles: Vec<RoleSeed>,
    /// Users, inserted in order; ids are assigned by the store.
    #[serde(default)]
    pub users: Vec<UserSeed>,
}

/// A role to seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleSeed {
    /// Role identifier.
    pub id: i64,
    /// Authority string, e.g. `ROLE_ADMIN`.
    pub authority: String,
}

/// A user to seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSeed {
    /// First name.
    pub first_name: String,
    /// Last name.
    #[serde(default)]
    pub last_name: String,
    /// Login email.
    pub email: String,
    /// Plaintext password, hashed when seeded.
    pub password: String,
    /// Role ids.
    #[serde(default)]
    pub roles: Vec<i64>,
}
