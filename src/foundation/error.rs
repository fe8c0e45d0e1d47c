/// Convenience result type used across arscan.
pub type ArscanResult<T> = Result<T, ArscanError>;

/// Top-level error taxonomy used by the pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum ArscanError {
    /// A buffer's channel count or shape does not match what an operation expects.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// A compositing placement would exceed the target buffer.
    #[error("out of bounds: {0}")]
    OutOfBounds(String),

    /// Invalid user-provided data (detections, configuration, sink setup).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ArscanError {
    /// Build an [`ArscanError::InvalidFormat`] value.
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    /// Build an [`ArscanError::OutOfBounds`] value.
    pub fn out_of_bounds(msg: impl Into<String>) -> Self {
        Self::OutOfBounds(msg.into())
    }

    /// Build an [`ArscanError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ArscanError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
