//! Error types for the switcher crate.

use reveal_switcher_core::AnimationError;
use thiserror::Error;

/// Errors that can occur while building or configuring a switcher.
#[derive(Error, Debug)]
pub enum SwitcherError {
    /// A core animation error, including [`AnimationError::InvalidConfig`].
    #[error(transparent)]
    Animation(#[from] AnimationError),

    /// Transition settings could not be parsed.
    #[error("failed to parse transition settings: {0}")]
    Settings(#[from] toml::de::Error),

    /// Transition settings could not be serialized.
    #[error("failed to serialize transition settings: {0}")]
    SettingsSerialize(#[from] toml::ser::Error),
}

impl SwitcherError {
    /// Create an invalid-configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::Animation(AnimationError::invalid_config(reason))
    }

    /// Whether this error rejects a construction parameter.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::Animation(AnimationError::InvalidConfig { .. }))
    }
}

/// Result type for switcher operations.
pub type SwitcherResult<T> = Result<T, SwitcherError>;
