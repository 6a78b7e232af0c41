/// Convenience result type used across JustFilm.
pub type BoothResult<T> = Result<T, BoothError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum BoothError {
    /// Invalid user-provided data or violated preconditions.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors in capture sequencing (ticks outside a running sequence, restarts mid-run).
    #[error("sequence error: {0}")]
    Sequence(String),

    /// Errors while grabbing or rasterizing a frame from the source.
    #[error("capture error: {0}")]
    Capture(String),

    /// Errors while loading or decoding an image asset.
    #[error("asset error: {0}")]
    Asset(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BoothError {
    /// Build a [`BoothError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BoothError::Sequence`] value.
    pub fn sequence(msg: impl Into<String>) -> Self {
        Self::Sequence(msg.into())
    }

    /// Build a [`BoothError::Capture`] value.
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture(msg.into())
    }

    /// Build a [`BoothError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
