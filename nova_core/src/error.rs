//! Error types.

use crate::service::Operation;
use thiserror::Error;

/// Why a data service call did not produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Transport-level failure: the backend could not be reached.
    #[error("{operation} is unavailable: {reason}")]
    ServiceUnavailable {
        /// Failed operation
        operation: Operation,
        /// Short diagnostic
        reason: String,
    },

    /// The contact submission was rejected.
    #[error("invalid contact submission: `{field}` {reason}")]
    ValidationFailed {
        /// Offending form field
        field: String,
        /// What is wrong with it
        reason: String,
    },
}

impl ServiceError {
    /// Text suitable for showing to a visitor.
    pub fn user_message(&self) -> String {
        match self {
            Self::ServiceUnavailable { .. } => {
                "We could not reach our servers. Please try again in a moment.".to_string()
            }
            Self::ValidationFailed { field, reason } => {
                format!("Please check the {field} field: {reason}.")
            }
        }
    }

    /// True for failures worth retrying.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::ServiceUnavailable { .. })
    }
}

/// Site configuration could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML did not parse or did not match the schema.
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The TOML parsed but a value is out of range.
    #[error("invalid site config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_is_transient() {
        let err = ServiceError::ServiceUnavailable {
            operation: Operation::FetchArticles,
            reason: "injected".into(),
        };
        assert!(err.is_transient());
        assert_eq!(err.to_string(), "fetch_articles is unavailable: injected");
    }

    #[test]
    fn validation_message_names_the_field() {
        let err = ServiceError::ValidationFailed {
            field: "email".into(),
            reason: "must contain a single @".into(),
        };
        assert!(!err.is_transient());
        assert!(err.user_message().contains("email"));
    }
}
