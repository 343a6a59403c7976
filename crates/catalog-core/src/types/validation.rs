//! Field-level validation messages and the report that accumulates them.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A single failing field and why it failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMessage {
    /// Name of the offending field as it appears in the request body.
    pub field_name: String,
    /// Human-readable message.
    pub message: String,
}

impl FieldMessage {
    /// Creates a new field message.
    pub fn new(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            message: message.into(),
        }
    }
}

/// The complete outcome of validating one candidate record.
///
/// A report is either empty (valid) or lists every failing field. It is
/// always fully built before anything is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldMessage>,
}

impl ValidationReport {
    /// Creates an empty (valid) report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failing field.
    pub fn add(&mut self, field_name: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldMessage::new(field_name, message));
    }

    /// Appends every error from another report.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
    }

    /// Whether no field failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The failing fields, in the order they were recorded.
    pub fn errors(&self) -> &[FieldMessage] {
        &self.errors
    }

    /// Converts the report into `Ok(())` or a validation error listing every field.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation_failed(self.errors))
        }
    }
}
