/// Convenience result type used across Flipdeck.
pub type FlipdeckResult<T> = Result<T, FlipdeckError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum FlipdeckError {
    /// Invalid user-provided or deck data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised while mutating deck or page state.
    #[error("deck error: {0}")]
    Deck(String),

    /// Errors raised by particle effects or the effect scheduler.
    #[error("effect error: {0}")]
    Effect(String),

    /// Audio errors; a playback attempt rejected by the host surfaces here.
    #[error("audio error: {0}")]
    Audio(String),

    /// Errors when serializing or deserializing deck and script data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlipdeckError {
    /// Build a [`FlipdeckError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlipdeckError::Deck`] value.
    pub fn deck(msg: impl Into<String>) -> Self {
        Self::Deck(msg.into())
    }

    /// Build a [`FlipdeckError::Effect`] value.
    pub fn effect(msg: impl Into<String>) -> Self {
        Self::Effect(msg.into())
    }

    /// Build a [`FlipdeckError::Audio`] value.
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    /// Build a [`FlipdeckError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
