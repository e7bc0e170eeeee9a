//! Animation error types

use thiserror::Error;

/// Errors raised while building animations
#[derive(Error, Debug)]
pub enum AnimationError {
    /// Duration must be positive and finite
    #[error("Invalid animation duration: {0} (must be positive and finite)")]
    InvalidDuration(f32),

    /// A named config entry carries an unusable duration
    #[error("Animation '{name}' has invalid duration {duration}")]
    InvalidConfigDuration { name: String, duration: f32 },

    /// Easing name does not match any curve
    #[error("Unknown easing: {0}")]
    UnknownEasing(String),

    /// Config lookup for a name that is not defined
    #[error("Animation not defined in config: {0}")]
    UndefinedAnimation(String),

    /// Config source could not be parsed
    #[error("Failed to parse animation config: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file could not be read
    #[error("Failed to read animation config: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
