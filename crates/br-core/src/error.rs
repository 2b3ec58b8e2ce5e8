//! Error types for bedtime estimation.

use thiserror::Error;

/// Failure of a single estimation.
///
/// Both variants are recoverable: callers turn them into a user-facing
/// message rather than aborting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EstimationError {
    /// An input was outside its domain.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// The model could not produce a finite, non-negative sleep duration.
    #[error("model failure: {reason}")]
    ModelFailure { reason: String },
}

impl EstimationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn model(reason: impl Into<String>) -> Self {
        Self::ModelFailure {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_names_field() {
        let err = EstimationError::invalid("coffee count", "must not be negative, got -1");
        assert_eq!(
            err.to_string(),
            "invalid coffee count: must not be negative, got -1"
        );
    }

    #[test]
    fn model_failure_message() {
        let err = EstimationError::model("prediction is negative");
        assert_eq!(err.to_string(), "model failure: prediction is negative");
    }
}
