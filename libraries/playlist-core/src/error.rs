/// Validation errors for Playlist Manager payloads
use thiserror::Error;

/// Result type alias using `ValidationError`
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Raised when call arguments are rejected before any request is issued
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Identifier is missing, non-positive, or not a number
    #[error("Valid {entity} ID is required (got {value:?})")]
    InvalidId {
        /// Entity the identifier refers to ("playlist", "song")
        entity: &'static str,
        /// Offending input, as text
        value: String,
    },

    /// Required field is absent or blank
    #[error("{entity} {field} is required")]
    MissingField {
        /// Entity being validated
        entity: &'static str,
        /// Field name as sent on the wire
        field: &'static str,
    },

    /// Field is present but malformed
    #[error("Invalid {field}: {reason}")]
    InvalidField {
        /// Field name as sent on the wire
        field: &'static str,
        /// Human-readable cause
        reason: String,
    },

    /// Unknown theme name
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

impl ValidationError {
    /// Create an invalid id error
    pub fn invalid_id(entity: &'static str, value: impl ToString) -> Self {
        Self::InvalidId {
            entity,
            value: value.to_string(),
        }
    }

    /// Create a missing field error
    pub fn missing(entity: &'static str, field: &'static str) -> Self {
        Self::MissingField { entity, field }
    }

    /// Create an invalid field error
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

/// Reject empty or whitespace-only strings
pub(crate) fn require_text(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::missing(entity, field));
    }
    Ok(())
}
