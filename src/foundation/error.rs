/// Convenience result type used across the compiler.
pub type AuraResult<T> = Result<T, AuraError>;

/// Top-level error taxonomy used by compiler APIs.
#[derive(thiserror::Error, Debug)]
pub enum AuraError {
    /// Invalid user-provided scene, settings or request data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while replaying the recorded action log.
    #[error("replay error: {0}")]
    Replay(String),

    /// Errors while assembling script text.
    #[error("emit error: {0}")]
    Emit(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors from the network boundary (banner fetch, webhook).
    #[error("network error: {0}")]
    Network(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AuraError {
    /// Build a [`AuraError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`AuraError::Replay`] value.
    pub fn replay(msg: impl Into<String>) -> Self {
        Self::Replay(msg.into())
    }

    /// Build a [`AuraError::Emit`] value.
    pub fn emit(msg: impl Into<String>) -> Self {
        Self::Emit(msg.into())
    }

    /// Build a [`AuraError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`AuraError::Network`] value.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }
}

impl From<serde_json::Error> for AuraError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
