/// Result alias used throughout the crate.
pub type LayerDepthResult<T> = Result<T, LayerDepthError>;

/// Crate error type.
#[derive(thiserror::Error, Debug)]
pub enum LayerDepthError {
    /// Configuration or argument rejected before any work started.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterization could not produce a canvas.
    #[error("render error: {0}")]
    Render(String),

    /// Video encoding failed or is unavailable.
    #[error("encode error: {0}")]
    Encode(String),

    /// Configuration (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level failure (usually IO with context).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayerDepthError {
    /// Build a [`LayerDepthError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LayerDepthError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LayerDepthError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`LayerDepthError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for LayerDepthError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
