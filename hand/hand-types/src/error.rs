//! Error types for sample decoding.

use thiserror::Error;

/// Errors that can occur while decoding a joint-angle sample.
#[derive(Debug, Error)]
pub enum SampleError {
    /// The readout line was empty or all whitespace.
    #[error("empty readout line")]
    EmptyLine,

    /// A token could not be parsed as a decimal number.
    #[error("invalid number at slot {index}: {token:?}")]
    InvalidNumber {
        /// Zero-based slot of the offending token.
        index: usize,
        /// The token as received.
        token: String,
    },

    /// A token parsed to NaN or infinity.
    #[error("non-finite reading at slot {index}: {value}")]
    NonFinite {
        /// Zero-based slot of the offending reading.
        index: usize,
        /// The parsed value.
        value: f64,
    },
}

impl SampleError {
    /// Creates an invalid number error.
    #[must_use]
    pub fn invalid_number(index: usize, token: impl Into<String>) -> Self {
        Self::InvalidNumber {
            index,
            token: token.into(),
        }
    }
}
