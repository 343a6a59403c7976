//! Request authorization by ordered method/path rules.
//!
//! The rule table is data: an ordered list of [`AccessRule`]s evaluated by
//! one matcher, [`AccessPolicy::authorize`]. The first matching rule
//! decides; when none matches, any authenticated caller is allowed.

pub mod engine;
pub mod pattern;
pub mod principal;
pub mod rule;

pub use engine::{AccessPolicy, Decision, DenyReason};
pub use pattern::PathPattern;
pub use principal::Principal;
pub use rule::{Access, AccessRule};
