//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Mandatory field absent from the request
    Missing { field: &'static str },

    /// Field is present but empty when it shouldn't be
    Empty { field: &'static str },

    /// String doesn't match required format
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Invalid enum variant
    InvalidVariant { field: &'static str, value: String },

    /// Body could not be read as the expected JSON object
    MalformedBody,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::InvalidVariant { field, value } => {
                write!(f, "invalid {} value: '{}'", field, value)
            }
            Self::MalformedBody => write!(
                f,
                "request body must be a JSON object with the expected field types"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Take a mandatory field out of an optional request value.
pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field })
}

/// Reject text that contains a NUL character.
pub(crate) fn reject_nul(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::InvalidFormat {
            field,
            reason: "must not contain NUL characters",
        });
    }
    Ok(())
}
