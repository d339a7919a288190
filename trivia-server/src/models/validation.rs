//! Validation error types

use std::fmt;

/// Validation error for request payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is absent or null
    Missing { field: &'static str },

    /// Field is present but blank
    Empty { field: &'static str },

    /// Field is present but holds the wrong kind of value
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } | Self::Empty { field } | Self::InvalidType { field, .. } => {
                field
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidType { field, expected } => {
                write!(f, "{} must be {}", field, expected)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
