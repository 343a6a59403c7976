//! A single entry of the authorization table.

use std::collections::BTreeSet;

use http::Method;

use catalog_core::config::{RuleAccessConfig, RuleConfig};
use catalog_core::error::AppError;
use catalog_entity::user::role::normalize_authority;

use super::pattern::PathPattern;

/// Who may pass once a rule matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Everyone, including anonymous callers.
    Public,
    /// Any authenticated caller, whatever their roles.
    Authenticated,
    /// Authenticated callers holding at least one of these authorities.
    AnyRole(BTreeSet<String>),
}

impl Access {
    /// Builds an [`Access::AnyRole`], normalizing names to `ROLE_` authorities.
    pub fn any_role<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::AnyRole(
            roles
                .into_iter()
                .map(|r| normalize_authority(r.as_ref()))
                .collect(),
        )
    }
}

/// Patterns, an optional method, and the access they require.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRule {
    /// Paths this rule covers.
    pub patterns: Vec<PathPattern>,
    /// Method this rule is limited to; `None` matches any method.
    pub method: Option<Method>,
    /// Requirement applied when the rule matches.
    pub access: Access,
}

impl AccessRule {
    /// A rule covering every method on the given patterns.
    pub fn any_method(patterns: &[&str], access: Access) -> Result<Self, AppError> {
        Ok(Self {
            patterns: parse_patterns(patterns)?,
            method: None,
            access,
        })
    }

    /// A rule limited to one method on the given patterns.
    pub fn for_method(method: Method, patterns: &[&str], access: Access) -> Result<Self, AppError> {
        Ok(Self {
            patterns: parse_patterns(patterns)?,
            method: Some(method),
            access,
        })
    }

    /// Parses a rule from its configuration form.
    pub fn from_config(config: &RuleConfig) -> Result<Self, AppError> {
        let patterns: Vec<&str> = config.patterns.iter().map(String::as_str).collect();
        if patterns.is_empty() {
            return Err(AppError::configuration("Access rule needs at least one pattern"));
        }

        let method = config
            .method
            .as_deref()
            .map(|m| {
                Method::from_bytes(m.trim().to_uppercase().as_bytes()).map_err(|e| {
                    AppError::configuration(format!("Invalid method '{m}' in access rule: {e}"))
                })
            })
            .transpose()?;

        let access = match &config.access {
            RuleAccessConfig::Public => Access::Public,
            RuleAccessConfig::Authenticated => Access::Authenticated,
            RuleAccessConfig::AnyRole(roles) if roles.is_empty() => {
                return Err(AppError::configuration(
                    "Access rule 'any_role' needs at least one role",
                ));
            }
            RuleAccessConfig::AnyRole(roles) => Access::any_role(roles),
        };

        Ok(Self {
            patterns: parse_patterns(&patterns)?,
            method,
            access,
        })
    }

    /// Whether this rule applies to the request.
    pub fn matches(&self, method: &Method, path: &str) -> bool {
        let method_matches = self.method.as_ref().is_none_or(|m| m == method);
        method_matches && self.patterns.iter().any(|p| p.matches(path))
    }
}

fn parse_patterns(patterns: &[&str]) -> Result<Vec<PathPattern>, AppError> {
    patterns.iter().map(|p| PathPattern::parse(p)).collect()
}
