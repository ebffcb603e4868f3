//! Rotation axis tags for Euler-angle vectors.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of one rotation component inside an Euler-angle vector.
///
/// Euler-angle vectors are stored `[roll, pitch, yaw]`, so the enum
/// discriminants double as dense vector indices. Angle-mapping tables use
/// this tag to say which component of a frame's rotation a sensor feeds.
///
/// # Example
///
/// ```
/// use hand_types::RotationAxis;
///
/// assert_eq!(RotationAxis::Roll.index(), 0);
/// assert_eq!(RotationAxis::from_index(2), Some(RotationAxis::Yaw));
/// assert_eq!(RotationAxis::from_index(3), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(usize)]
pub enum RotationAxis {
    /// Rotation about the X axis.
    Roll = 0,
    /// Rotation about the Y axis.
    Pitch = 1,
    /// Rotation about the Z axis.
    Yaw = 2,
}

impl RotationAxis {
    /// Returns the dense index of this axis within an Euler-angle vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Converts a dense index back into an axis tag.
    ///
    /// Returns `None` for indices outside `0..3`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Roll),
            1 => Some(Self::Pitch),
            2 => Some(Self::Yaw),
            _ => None,
        }
    }

    /// Returns the axis name for display purposes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Roll => "roll",
            Self::Pitch => "pitch",
            Self::Yaw => "yaw",
        }
    }
}
