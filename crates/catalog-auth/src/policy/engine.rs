//! Ordered evaluation of the rule table.

use std::fmt;

use http::Method;
use tracing::debug;

use catalog_core::config::SecurityConfig;
use catalog_core::error::AppError;

use super::pattern::PathPattern;
use super::principal::Principal;
use super::rule::{Access, AccessRule};

/// Why a request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The rule needs an authenticated caller and there is none.
    Unauthenticated,
    /// The caller holds none of the required roles.
    Forbidden,
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "Full authentication is required to access this resource"),
            Self::Forbidden => write!(f, "Access is denied"),
        }
    }
}

/// Outcome of [`AccessPolicy::authorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The request may proceed.
    Allow,
    /// The request must be rejected.
    Deny(DenyReason),
}

impl Decision {
    /// Maps a denial to the matching `Unauthenticated`/`Forbidden` error.
    pub fn into_result(self) -> Result<(), AppError> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(reason @ DenyReason::Unauthenticated) => {
                Err(AppError::unauthenticated(reason.to_string()))
            }
            Self::Deny(reason @ DenyReason::Forbidden) => {
                Err(AppError::forbidden(reason.to_string()))
            }
        }
    }
}

/// The ordered authorization table.
///
/// Rule order is significant: narrower rules (e.g. GET-only read access on
/// a prefix) must precede broader rules on the same prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    /// Paths that skip authorization entirely.
    ignored: Vec<PathPattern>,
    /// Rules in evaluation order.
    rules: Vec<AccessRule>,
}

impl AccessPolicy {
    /// Creates a policy from an ordered rule list.
    pub fn new(rules: Vec<AccessRule>) -> Self {
        Self {
            ignored: Vec::new(),
            rules,
        }
    }

    /// Adds paths that bypass the rule table.
    pub fn with_ignored(mut self, ignored: Vec<PathPattern>) -> Self {
        self.ignored = ignored;
        self
    }

    /// The catalog API's table:
    ///
    /// | Path pattern | Method | Access |
    /// |---|---|---|
    /// | `/oauth/token`, `/h2-console/**` | any | public |
    /// | `/products/**`, `/categories/**` | GET | public |
    /// | `/products/**`, `/categories/**` | any | OPERATOR or ADMIN |
    /// | `/users/**` | any | ADMIN |
    /// | anything else | any | authenticated |
    pub fn catalog_default() -> Result<Self, AppError> {
        const PUBLIC: &[&str] = &["/oauth/token", "/h2-console/**"];
        const OPERATOR_OR_ADMIN: &[&str] = &["/products/**", "/categories/**"];
        const ADMIN: &[&str] = &["/users/**"];

        Ok(Self::new(vec![
            AccessRule::any_method(PUBLIC, Access::Public)?,
            AccessRule::for_method(Method::GET, OPERATOR_OR_ADMIN, Access::Public)?,
            AccessRule::any_method(OPERATOR_OR_ADMIN, Access::any_role(["OPERATOR", "ADMIN"]))?,
            AccessRule::any_method(ADMIN, Access::any_role(["ADMIN"]))?,
        ]))
    }

    /// Builds the policy from configuration, falling back to
    /// [`AccessPolicy::catalog_default`] when no rules are configured.
    pub fn from_config(config: &SecurityConfig) -> Result<Self, AppError> {
        let policy = match &config.rules {
            Some(rules) => Self::new(
                rules
                    .iter()
                    .map(AccessRule::from_config)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            None => Self::catalog_default()?,
        };

        let ignored = config
            .ignored
            .iter()
            .map(|p| PathPattern::parse(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(policy.with_ignored(ignored))
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[AccessRule] {
        &self.rules
    }

    /// Decides whether `caller` may perform `method` on `path`.
    ///
    /// Pure function of its inputs and the table: the first matching rule
    /// decides; with no match the implicit final rule admits any
    /// authenticated caller.
    pub fn authorize(&self, method: &Method, path: &str, caller: Option<&Principal>) -> Decision {
        if self.ignored.iter().any(|p| p.matches(path)) {
            return Decision::Allow;
        }

        let matched = self
            .rules
            .iter()
            .position(|rule| rule.matches(method, path));

        let decision = match matched {
            Some(index) => evaluate(&self.rules[index].access, caller),
            None => evaluate(&Access::Authenticated, caller),
        };

        debug!(
            method = %method,
            path = %path,
            rule = ?matched,
            caller = caller.map(|p| p.email.as_str()).unwrap_or("anonymous"),
            decision = ?decision,
            "Access policy evaluated"
        );

        decision
    }
}

fn evaluate(access: &Access, caller: Option<&Principal>) -> Decision {
    match (access, caller) {
        (Access::Public, _) => Decision::Allow,
        (_, None) => Decision::Deny(DenyReason::Unauthenticated),
        (Access::Authenticated, Some(_)) => Decision::Allow,
        (Access::AnyRole(required), Some(principal)) if principal.has_any_authority(required) => {
            Decision::Allow
        }
        (Access::AnyRole(_), Some(_)) => Decision::Deny(DenyReason::Forbidden),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use catalog_core::config::{RuleAccessConfig, RuleConfig};

    fn caller(roles: &[&str]) -> Principal {
        Principal {
            email: "someone@example.com".into(),
            user_id: Some(1),
            authorities: roles.iter().map(|r| r.to_string()).collect::<BTreeSet<_>>(),
        }
    }

    fn policy() -> AccessPolicy {
        AccessPolicy::catalog_default().unwrap()
    }

    const DENY_UNAUTH: Decision = Decision::Deny(DenyReason::Unauthenticated);
    const DENY_FORBIDDEN: Decision = Decision::Deny(DenyReason::Forbidden);

    #[test]
    fn test_public_routes() {
        let policy = policy();
        assert_eq!(policy.authorize(&Method::POST, "/oauth/token", None), Decision::Allow);
        assert_eq!(policy.authorize(&Method::GET, "/h2-console", None), Decision::Allow);
        assert_eq!(
            policy.authorize(&Method::POST, "/h2-console/login.do", None),
            Decision::Allow
        );
    }

    #[test]
    fn test_read_open_write_restricted() {
        let policy = policy();
        let client = caller(&["ROLE_CLIENT"]);

        assert_eq!(policy.authorize(&Method::GET, "/products/1", None), Decision::Allow);
        assert_eq!(policy.authorize(&Method::GET, "/categories", None), Decision::Allow);
        assert_eq!(policy.authorize(&Method::POST, "/products", None), DENY_UNAUTH);
        assert_eq!(
            policy.authorize(&Method::POST, "/products", Some(&client)),
            DENY_FORBIDDEN
        );
        assert_eq!(
            policy.authorize(&Method::DELETE, "/categories/3", Some(&client)),
            DENY_FORBIDDEN
        );
    }

    #[test]
    fn test_operator_and_admin_may_write_catalog() {
        let policy = policy();
        for role in ["ROLE_OPERATOR", "ROLE_ADMIN"] {
            let c = caller(&[role]);
            assert_eq!(policy.authorize(&Method::POST, "/products", Some(&c)), Decision::Allow);
            assert_eq!(
                policy.authorize(&Method::PUT, "/categories/2", Some(&c)),
                Decision::Allow
            );
        }
    }

    #[test]
    fn test_users_require_admin() {
        let policy = policy();
        let operator = caller(&["ROLE_OPERATOR"]);
        let admin = caller(&["ROLE_OPERATOR", "ROLE_ADMIN"]);

        assert_eq!(policy.authorize(&Method::GET, "/users/5", None), DENY_UNAUTH);
        assert_eq!(
            policy.authorize(&Method::GET, "/users/5", Some(&operator)),
            DENY_FORBIDDEN
        );
        assert_eq!(policy.authorize(&Method::GET, "/users", Some(&admin)), Decision::Allow);
        assert_eq!(
            policy.authorize(&Method::DELETE, "/users/5", Some(&admin)),
            Decision::Allow
        );
    }

    #[test]
    fn test_unmatched_paths_require_authentication() {
        let policy = policy();
        let nobody = caller(&[]);
        assert_eq!(policy.authorize(&Method::GET, "/orders/1", None), DENY_UNAUTH);
        assert_eq!(
            policy.authorize(&Method::GET, "/orders/1", Some(&nobody)),
            Decision::Allow
        );
    }

    #[test]
    fn test_first_match_wins() {
        // The same rules in reverse order lose the read-open exception.
        let reversed = AccessPolicy::new(policy().rules().iter().rev().cloned().collect());
        assert_eq!(reversed.authorize(&Method::GET, "/products/1", None), DENY_UNAUTH);
    }

    #[test]
    fn test_authorize_is_deterministic() {
        let policy = policy();
        let operator = caller(&["ROLE_OPERATOR"]);
        let inputs = [
            (Method::GET, "/products/1"),
            (Method::POST, "/products"),
            (Method::GET, "/users/5"),
            (Method::PATCH, "/elsewhere"),
        ];
        for (method, path) in &inputs {
            for who in [None, Some(&operator)] {
                let first = policy.authorize(method, path, who);
                for _ in 0..3 {
                    assert_eq!(policy.authorize(method, path, who), first);
                }
            }
        }
    }

    #[test]
    fn test_ignored_paths_bypass_rules() {
        let policy = AccessPolicy::from_config(&SecurityConfig::default()).unwrap();
        assert_eq!(policy.authorize(&Method::GET, "/actuator/health", None), Decision::Allow);
        assert_eq!(policy.authorize(&Method::GET, "/users", None), DENY_UNAUTH);
    }

    #[test]
    fn test_configured_rules_replace_default() {
        let config = SecurityConfig {
            rules: Some(vec![RuleConfig {
                patterns: vec!["/users/**".into()],
                method: Some("GET".into()),
                access: RuleAccessConfig::Public,
            }]),
            ignored: vec![],
        };
        let policy = AccessPolicy::from_config(&config).unwrap();
        assert_eq!(policy.rules().len(), 1);
        assert_eq!(policy.authorize(&Method::GET, "/users/1", None), Decision::Allow);
        assert_eq!(policy.authorize(&Method::GET, "/products/1", None), DENY_UNAUTH);
    }

    #[test]
    fn test_decision_into_result() {
        use catalog_core::error::ErrorKind;

        assert!(Decision::Allow.into_result().is_ok());
        assert_eq!(DENY_UNAUTH.into_result().unwrap_err().kind, ErrorKind::Unauthenticated);
        assert_eq!(DENY_FORBIDDEN.into_result().unwrap_err().kind, ErrorKind::Forbidden);
    }
}
