//! Error types for the value layer.

/// Error returned by the typed [`Value`](crate::Value) accessors when the
/// variant does not match the requested type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected a {expected} value, got {actual}")]
pub struct ValueTypeError {
    expected: String,
    actual: String,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn actual(&self) -> &str {
        &self.actual
    }
}
