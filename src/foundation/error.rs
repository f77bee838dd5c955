/// Convenience result type used across scrollreel.
pub type ScrollreelResult<T> = Result<T, ScrollreelError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// The scroll path itself never fails: missing content or elements are guarded, not
/// reported. Errors come from construction (bad durations, thresholds, tolerances) and from
/// loading configuration.
#[derive(thiserror::Error, Debug)]
pub enum ScrollreelError {
    /// Invalid user-provided parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid timeline or tween construction.
    #[error("animation error: {0}")]
    Animation(String),

    /// Invalid layout input (viewport, height hints).
    #[error("layout error: {0}")]
    Layout(String),

    /// Content configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollreelError {
    /// Build a [`ScrollreelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollreelError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ScrollreelError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`ScrollreelError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<serde_json::Error> for ScrollreelError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
