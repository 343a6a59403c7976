//! Unified application error types for the catalog core.
//!
//! Every crate maps its internal failures into [`AppError`] so that the
//! `?` operator carries one error type all the way to the HTTP boundary.

use std::fmt;
use thiserror::Error;

use crate::types::validation::FieldMessage;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Client id unknown or client secret mismatch.
    InvalidClient,
    /// Grant type not supported or not allowed for the client.
    UnsupportedGrant,
    /// Requested scopes share nothing with the client's scopes.
    InvalidScope,
    /// Resource owner username/password did not authenticate.
    InvalidCredentials,
    /// The authenticated principal vanished before the token was built.
    PrincipalGone,
    /// No (valid) credentials were presented for a protected resource.
    Unauthenticated,
    /// The caller is authenticated but lacks a required role.
    Forbidden,
    /// One or more input fields failed validation.
    Validation,
    /// The request could not be parsed.
    BadRequest,
    /// The requested resource was not found.
    NotFound,
    /// A storage-level integrity violation (duplicate email, blocked delete).
    Conflict,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidClient => write!(f, "INVALID_CLIENT"),
            Self::UnsupportedGrant => write!(f, "UNSUPPORTED_GRANT"),
            Self::InvalidScope => write!(f, "INVALID_SCOPE"),
            Self::InvalidCredentials => write!(f, "INVALID_CREDENTIALS"),
            Self::PrincipalGone => write!(f, "PRINCIPAL_GONE"),
            Self::Unauthenticated => write!(f, "UNAUTHENTICATED"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::BadRequest => write!(f, "BAD_REQUEST"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout the catalog core.
///
/// Validation failures carry the complete list of failing fields in
/// `field_errors`; every other kind leaves it empty.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Per-field validation messages.
    pub field_errors: Vec<FieldMessage>,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: Vec::new(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: Vec::new(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-client error.
    pub fn invalid_client(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidClient, message)
    }

    /// Create an unsupported-grant error.
    pub fn unsupported_grant(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedGrant, message)
    }

    /// Create an invalid-scope error.
    pub fn invalid_scope(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidScope, message)
    }

    /// Create an invalid-credentials error.
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCredentials, message)
    }

    /// Create a principal-gone error.
    pub fn principal_gone(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PrincipalGone, message)
    }

    /// Create an unauthenticated error.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthenticated, message)
    }

    /// Create a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// Create a validation error carrying every failing field.
    pub fn validation_failed(field_errors: Vec<FieldMessage>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: "Validation failed".to_string(),
            field_errors,
            source: None,
        }
    }

    /// Create a bad-request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            field_errors: self.field_errors.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
