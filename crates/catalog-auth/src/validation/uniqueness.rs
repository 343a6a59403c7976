//! Email uniqueness checks for user insert and update.

use std::sync::Arc;

use tracing::debug;

use catalog_core::result::AppResult;
use catalog_core::types::ValidationReport;
use catalog_database::store::UserStore;

/// Field name reported on a uniqueness failure.
pub const EMAIL_FIELD: &str = "email";
/// Message reported on a uniqueness failure.
pub const EMAIL_TAKEN: &str = "email already exists";

/// Checks that an email is not taken by another user.
///
/// The storage-level unique constraint remains the backstop: two concurrent
/// inserts can both pass this check, and the loser fails with `Conflict`.
#[derive(Clone)]
pub struct UniquenessValidator {
    users: Arc<dyn UserStore>,
}

impl UniquenessValidator {
    /// Creates the validator over the given user store.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Validates an email for a brand-new user.
    pub async fn validate_for_insert(&self, email: &str) -> AppResult<ValidationReport> {
        let mut report = ValidationReport::new();
        if self.users.find_by_email(email).await?.is_some() {
            debug!(email = %email, "Email already registered");
            report.add(EMAIL_FIELD, EMAIL_TAKEN);
        }
        Ok(report)
    }

    /// Validates an email for the user addressed by `subject_id`.
    ///
    /// Keeping one's own email is valid; taking someone else's is not.
    pub async fn validate_for_update(
        &self,
        email: &str,
        subject_id: i64,
    ) -> AppResult<ValidationReport> {
        let mut report = ValidationReport::new();
        if let Some(owner) = self.users.find_by_email(email).await? {
            if owner.id != subject_id {
                debug!(
                    email = %email,
                    owner_id = owner.id,
                    subject_id,
                    "Email belongs to another user"
                );
                report.add(EMAIL_FIELD, EMAIL_TAKEN);
            }
        }
        Ok(report)
    }
}
