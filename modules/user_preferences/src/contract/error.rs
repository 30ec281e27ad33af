//! Contract error types for user preferences
//!
//! The only failures surfaced to callers are contract violations on a field edit.
//! Unknown languages/timezones, out-of-range volumes and equal quiet-hours bounds
//! are handled by fallbacks, not errors.

use super::model::DomainKind;

/// Errors returned by settings edits
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferencesError {
    /// Field key is not part of the domain schema
    #[error("unknown {domain} field: {key}")]
    UnknownField {
        /// Domain the edit targeted
        domain: DomainKind,
        /// Rejected key
        key: String,
    },
    /// Field exists but the value has the wrong shape
    #[error("invalid value for {domain} field '{key}': {message}")]
    InvalidValue {
        domain: DomainKind,
        key: String,
        message: String,
    },
}

impl PreferencesError {
    pub(crate) fn unknown_field(domain: DomainKind, key: &str) -> Self {
        Self::UnknownField {
            domain,
            key: key.to_string(),
        }
    }

    pub(crate) fn invalid_value(domain: DomainKind, key: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            domain,
            key: key.to_string(),
            message: message.into(),
        }
    }

    /// Whether this error is an unknown-key contract violation
    pub fn is_unknown_field(&self) -> bool {
        matches!(self, Self::UnknownField { .. })
    }
}
