//! Error types for configuration parsing and validation.

use thiserror::Error;

/// Errors that can occur while loading a hand configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not match the schema.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A requested finger entry is absent from the document.
    #[error("missing finger entry: {0}")]
    MissingFinger(String),

    /// A finger was configured with no link lengths.
    #[error("finger '{0}' has an empty length list")]
    EmptyLengths(String),

    /// A finger's frame-id list does not match its length list.
    #[error("finger '{finger}' has {lengths} lengths but {frames} frame ids")]
    FrameCountMismatch {
        /// The misconfigured finger.
        finger: String,
        /// Number of link lengths.
        lengths: usize,
        /// Number of frame ids.
        frames: usize,
    },

    /// A link length is non-finite or not positive.
    #[error("invalid length for finger '{finger}' at index {index}: {value}")]
    InvalidLength {
        /// The misconfigured finger.
        finger: String,
        /// Index into the length list.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// An origin component is non-finite.
    #[error("non-finite origin component for finger '{finger}': {field}")]
    NonFiniteOrigin {
        /// The misconfigured finger.
        finger: String,
        /// Which origin field is bad, `"Position"` or `"Euler"`.
        field: &'static str,
    },
}

impl ConfigError {
    /// Creates a missing finger error.
    #[must_use]
    pub fn missing_finger(name: impl Into<String>) -> Self {
        Self::MissingFinger(name.into())
    }

    /// Creates an invalid length error.
    #[must_use]
    pub fn invalid_length(finger: impl Into<String>, index: usize, value: f64) -> Self {
        Self::InvalidLength {
            finger: finger.into(),
            index,
            value,
        }
    }
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_finger_display() {
        let err = ConfigError::missing_finger("Ring");
        assert!(err.to_string().contains("Ring"));
    }

    #[test]
    fn invalid_length_display() {
        let err = ConfigError::invalid_length("Thumb", 2, -0.5);
        assert!(err.to_string().contains("Thumb"));
        assert!(err.to_string().contains("index 2"));
    }

    #[test]
    fn json_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConfigError = parse_err.into();
        assert!(err.to_string().contains("JSON error"));
    }
}
