//! User request payloads with field validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use catalog_core::types::ValidationReport;

/// A role reference in a request body; only the id is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleId {
    /// Role identifier.
    pub id: i64,
}

/// Body of `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserInsertRequest {
    /// First name.
    #[validate(length(min = 1, message = "required field"))]
    pub first_name: String,
    /// Last name.
    #[serde(default)]
    pub last_name: String,
    /// Login email.
    #[validate(email(message = "enter a valid email"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 6, message = "password must have at least 6 characters"))]
    pub password: String,
    /// Granted roles.
    #[serde(default)]
    pub roles: Vec<RoleId>,
}

/// Body of `PUT /users/{id}`.
///
/// Any `id` in the payload is ignored; the subject is the path id.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateRequest {
    /// First name.
    #[validate(length(min = 1, message = "required field"))]
    pub first_name: String,
    /// Last name.
    #[serde(default)]
    pub last_name: String,
    /// Login email.
    #[validate(email(message = "enter a valid email"))]
    pub email: String,
    /// Granted roles.
    #[serde(default)]
    pub roles: Vec<RoleId>,
}

/// Wire (camelCase) names of request fields whose Rust name differs.
const WIRE_NAMES: &[(&str, &str)] = &[("first_name", "firstName"), ("last_name", "lastName")];

fn wire_name(field: &str) -> &str {
    WIRE_NAMES
        .iter()
        .find(|&&(rust, _)| rust == field)
        .map_or(field, |&(_, wire)| wire)
}

/// Runs the derived field checks and collects every failure.
///
/// Field names are reported the way they appear on the wire (camelCase)
/// and sorted for a stable order.
pub(crate) fn field_report<T: Validate>(request: &T) -> ValidationReport {
    let mut report = ValidationReport::new();
    if let Err(errors) = request.validate() {
        for (field, message) in flatten(&errors) {
            report.add(field, message);
        }
    }
    report
}

fn flatten(errors: &ValidationErrors) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, list)| {
            let field = wire_name(&field).to_string();
            list.iter()
                .map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    (field.clone(), message)
                })
                .collect::<Vec<_>>()
        })
        .collect();
    out.sort();
    out
}
