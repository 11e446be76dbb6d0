/// Convenience result type used across fluidsnap.
pub type SnapResult<T> = Result<T, SnapError>;

/// Top-level error taxonomy used by the render pipeline.
///
/// Every variant is terminal for the current invocation; nothing is retried internally.
#[derive(thiserror::Error, Debug)]
pub enum SnapError {
    /// Malformed or inconsistent frame data.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid render or classifier configuration (palette size, velocity range, world size).
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The frame's particle count disagrees with the session's entity pool.
    #[error("frame mismatch: {0}")]
    FrameMismatch(String),

    /// Invalid invocation input, such as a frame file name that is not an integer.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A render session operation was called in the wrong state.
    #[error("lifecycle error: {0}")]
    Lifecycle(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SnapError {
    /// Build a [`SnapError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`SnapError::InvalidConfig`] value.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`SnapError::FrameMismatch`] value.
    pub fn frame_mismatch(msg: impl Into<String>) -> Self {
        Self::FrameMismatch(msg.into())
    }

    /// Build a [`SnapError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`SnapError::Lifecycle`] value.
    pub fn lifecycle(msg: impl Into<String>) -> Self {
        Self::Lifecycle(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
