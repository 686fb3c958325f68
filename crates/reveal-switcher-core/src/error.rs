//! Error types for the core crate.

use thiserror::Error;

/// Errors produced by curve evaluation, configuration validation, and the
/// frame clock.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// A configuration value was rejected at construction time.
    ///
    /// Raised for negative or non-finite durations and malformed curves.
    /// Invalid values are never corrected silently.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// What was wrong with the configuration.
        reason: String,
    },

    /// A progress value outside `[0, 1]` was passed to a curve.
    ///
    /// This indicates a broken invariant in the caller, not a recoverable
    /// condition.
    #[error("progress value {value} is outside the range [0, 1]")]
    OutOfRangeInput {
        /// The offending value.
        value: f32,
    },

    /// No curve is registered under the given name.
    #[error("unknown curve: {0}")]
    UnknownCurve(String),

    /// The ticker ID is invalid or has already been released.
    #[error("invalid or released ticker")]
    InvalidTicker,
}

impl AnimationError {
    /// Create an [`AnimationError::InvalidConfig`] from any message.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

/// Result type for core animation operations.
pub type AnimationResult<T> = Result<T, AnimationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AnimationError::invalid_config("negative duration");
        assert_eq!(err.to_string(), "invalid configuration: negative duration");

        let err = AnimationError::OutOfRangeInput { value: 1.5 };
        assert_eq!(err.to_string(), "progress value 1.5 is outside the range [0, 1]");

        let err = AnimationError::UnknownCurve("wobble".into());
        assert_eq!(err.to_string(), "unknown curve: wobble");
    }
}
