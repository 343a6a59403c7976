//! Role reference data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix every stored authority carries.
pub const ROLE_PREFIX: &str = "ROLE_";

/// A role a user may hold, e.g. `ROLE_ADMIN`.
///
/// Roles are immutable reference data shared by many users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoleRef {
    /// Role identifier.
    pub id: i64,
    /// Authority string, always `ROLE_`-prefixed.
    pub authority: String,
}

impl RoleRef {
    /// Creates a role reference, adding the `ROLE_` prefix when missing.
    pub fn new(id: i64, authority: impl AsRef<str>) -> Self {
        Self {
            id,
            authority: normalize_authority(authority.as_ref()),
        }
    }
}

impl fmt::Display for RoleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.authority)
    }
}

/// Turns `"admin"`, `"ADMIN"` or `"ROLE_ADMIN"` into `"ROLE_ADMIN"`.
pub fn normalize_authority(name: &str) -> String {
    let upper = name.trim().to_uppercase();
    if upper.starts_with(ROLE_PREFIX) {
        upper
    } else {
        format!("{ROLE_PREFIX}{upper}")
    }
}
