//! Request authorization rule table configuration.
//!
//! When `rules` is absent the built-in catalog table is used. When present
//! it replaces that table entirely; order is preserved as written.

use serde::{Deserialize, Serialize};

/// Authorization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Ordered rule table overriding the built-in one.
    #[serde(default)]
    pub rules: Option<Vec<RuleConfig>>,
    /// Path patterns that bypass authorization entirely.
    #[serde(default = "default_ignored")]
    pub ignored: Vec<String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            rules: None,
            ignored: default_ignored(),
        }
    }
}

/// One rule of the table as written in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Path patterns, e.g. `"/products/**"`.
    pub patterns: Vec<String>,
    /// HTTP method; absent matches any method.
    #[serde(default)]
    pub method: Option<String>,
    /// Who may pass once the rule matches.
    pub access: RuleAccessConfig,
}

/// Access requirement of a configured rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleAccessConfig {
    /// Anyone, including anonymous callers.
    Public,
    /// Any authenticated caller.
    Authenticated,
    /// Callers holding at least one of these roles (with or without `ROLE_`).
    AnyRole(Vec<String>),
}

fn default_ignored() -> Vec<String> {
    vec!["/actuator/**".to_string()]
}
