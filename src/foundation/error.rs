/// Convenience result type used across flowframe.
pub type FlowResult<T> = Result<T, FlowError>;

/// Top-level error taxonomy used by the timing, layout, and scene APIs.
///
/// Only programmer and configuration errors are reported here. Missing edge endpoints and
/// degenerate geometry are recovered locally and never surface as a `FlowError`.
#[derive(thiserror::Error, Debug)]
pub enum FlowError {
    /// Malformed arguments to a timing primitive (ranges, keyframes, durations).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Invalid layout policy, scene, or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failure inside the layered layout collaborator.
    #[error("layout error: {0}")]
    Layout(String),

    /// Errors when serializing or deserializing scene documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlowError {
    /// Build a [`FlowError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`FlowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlowError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`FlowError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FlowError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
