//! Exoskeleton joint-angle samples.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SampleError;

/// One flat vector of joint-angle readings from an exoskeleton device,
/// captured once per animation tick.
///
/// The reading order is fixed by the device wiring; an angle-mapping
/// table assigns each slot to a frame axis downstream. Angles are in
/// radians.
///
/// # Example
///
/// ```
/// use hand_types::JointAngleSample;
///
/// let sample = JointAngleSample::new(vec![0.0, 0.5, -0.25]);
/// assert_eq!(sample.len(), 3);
/// assert_eq!(sample.get(1), Some(0.5));
/// assert_eq!(sample.get(3), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JointAngleSample {
    /// Sensor readings in device order, radians.
    pub angles: Vec<f64>,
}

impl JointAngleSample {
    /// Creates a sample from raw readings.
    #[must_use]
    pub const fn new(angles: Vec<f64>) -> Self {
        Self { angles }
    }

    /// Returns the number of sensor readings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Checks whether the sample has no readings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Gets the reading at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.angles.get(index).copied()
    }

    /// Returns the readings as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.angles
    }

    /// Decodes a comma-delimited readout line into a sample.
    ///
    /// This matches the wire format of the reference serial exoskeleton,
    /// which emits one line of comma-separated decimal angles per tick.
    /// Whitespace around values is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::EmptyLine`] for blank input,
    /// [`SampleError::InvalidNumber`] for unparsable tokens, and
    /// [`SampleError::NonFinite`] when a token parses to NaN or infinity.
    ///
    /// # Example
    ///
    /// ```
    /// use hand_types::JointAngleSample;
    ///
    /// let sample = JointAngleSample::from_csv_line("0.1, -0.2,0.3")?;
    /// assert_eq!(sample.as_slice(), &[0.1, -0.2, 0.3]);
    /// # Ok::<(), hand_types::SampleError>(())
    /// ```
    pub fn from_csv_line(line: &str) -> Result<Self, SampleError> {
        if line.trim().is_empty() {
            return Err(SampleError::EmptyLine);
        }

        let mut angles = Vec::new();
        for (index, token) in line.split(',').enumerate() {
            let value: f64 = token
                .trim()
                .parse()
                .map_err(|_| SampleError::invalid_number(index, token.trim()))?;
            if !value.is_finite() {
                return Err(SampleError::NonFinite { index, value });
            }
            angles.push(value);
        }

        Ok(Self { angles })
    }
}

impl From<Vec<f64>> for JointAngleSample {
    fn from(angles: Vec<f64>) -> Self {
        Self { angles }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn sample_accessors() {
        let sample = JointAngleSample::new(vec![0.0, 1.0, 2.0]);
        assert_eq!(sample.len(), 3);
        assert!(!sample.is_empty());
        assert_eq!(sample.get(2), Some(2.0));
        assert_eq!(sample.get(3), None);
    }

    #[test]
    fn csv_line_roundtrip() {
        let sample = JointAngleSample::from_csv_line("0.5,-1.25, 3.0").unwrap();
        assert_eq!(sample.as_slice(), &[0.5, -1.25, 3.0]);
    }

    #[test]
    fn csv_line_rejects_blank_input() {
        assert!(matches!(
            JointAngleSample::from_csv_line("   "),
            Err(SampleError::EmptyLine)
        ));
    }

    #[test]
    fn csv_line_rejects_garbage_token() {
        let err = JointAngleSample::from_csv_line("0.1,abc,0.3").unwrap_err();
        assert!(matches!(err, SampleError::InvalidNumber { index: 1, .. }));
    }

    #[test]
    fn csv_line_rejects_non_finite() {
        let err = JointAngleSample::from_csv_line("0.1,NaN").unwrap_err();
        assert!(matches!(err, SampleError::NonFinite { index: 1, .. }));
    }

    #[test]
    fn csv_line_rejects_trailing_comma() {
        // A trailing comma produces an empty token, which is not a number.
        assert!(JointAngleSample::from_csv_line("0.1,0.2,").is_err());
    }
}
