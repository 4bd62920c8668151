//! Error Types

use thiserror::Error;

use crate::validate::FieldErrors;

/// Result type alias for lead capture operations
pub type Result<T> = std::result::Result<T, LeadError>;

/// Lead capture error types
#[derive(Error, Debug)]
pub enum LeadError {
    /// One or more fields failed validation
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Operation not allowed in the current form phase
    #[error("Invalid state: {0}")]
    InvalidState(&'static str),

    /// The page host (browser) rejected a side effect
    #[error("Host error: {0}")]
    Host(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LeadError {
    /// Field errors carried by a validation failure
    pub const fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(errors) if errors.len() == 1 => {
                "Please fix the highlighted field.".into()
            }
            Self::Validation(_) => "Please fix the highlighted fields.".into(),
            Self::InvalidState(_) => "This form has already been submitted.".into(),
            _ => "Something went wrong. Please try again.".into(),
        }
    }
}
