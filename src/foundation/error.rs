/// Convenience result type used across backdrop.
pub type BackdropResult<T> = Result<T, BackdropError>;

/// Top-level error taxonomy used by backdrop APIs.
///
/// Missing anchors or overlay elements are not errors: path routing reports them as a skipped
/// recompute instead.
#[derive(thiserror::Error, Debug)]
pub enum BackdropError {
    /// Invalid user-provided configuration or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failure reported by the render backend while submitting a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BackdropError {
    /// Build a [`BackdropError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BackdropError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BackdropError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
