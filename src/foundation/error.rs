/// Convenience result type used across the crate.
pub type StrokeResult<T> = Result<T, StrokeError>;

/// Top-level error taxonomy used by the timing APIs.
///
/// Evaluation itself never fails: solver exhaustion and out-of-range inputs are handled by
/// clamping. Errors only surface while constructing curves, segments and schedules, or at IO edges.
#[derive(thiserror::Error, Debug)]
pub enum StrokeError {
    /// Invalid user-provided values (durations, offsets, options).
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed easing curves (non-finite or non-monotonic control points).
    #[error("curve error: {0}")]
    Curve(String),

    /// Inconsistent schedules (duplicate roles, windows outside the cycle, unknown pairs).
    #[error("schedule error: {0}")]
    Schedule(String),

    /// Errors while sampling a schedule (thread pool setup and similar).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StrokeError {
    /// Build a [`StrokeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StrokeError::Curve`] value.
    pub fn curve(msg: impl Into<String>) -> Self {
        Self::Curve(msg.into())
    }

    /// Build a [`StrokeError::Schedule`] value.
    pub fn schedule(msg: impl Into<String>) -> Self {
        Self::Schedule(msg.into())
    }

    /// Build a [`StrokeError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`StrokeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
