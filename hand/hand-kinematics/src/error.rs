//! Error types for the kinematic pipeline.

use thiserror::Error;

/// Errors that can occur while constructing or updating the kinematic
/// hand model.
///
/// Construction-time variants mark a configuration that must not be
/// used; call-time variants mark an input-contract violation and leave
/// the model untouched.
#[derive(Debug, Error)]
pub enum KinematicsError {
    /// A joint-angle sample did not match the mapping table cardinality.
    #[error("sample length mismatch: expected {expected} readings, got {actual}")]
    SampleLengthMismatch {
        /// Number of readings the mapping table expects.
        expected: usize,
        /// Number of readings supplied.
        actual: usize,
    },

    /// A chain update received the wrong number of rotation vectors.
    #[error("rotation count mismatch for chain '{chain}': expected {expected}, got {actual}")]
    RotationCountMismatch {
        /// The chain that rejected the update.
        chain: String,
        /// Number of driven links in the chain.
        expected: usize,
        /// Number of rotation vectors supplied.
        actual: usize,
    },

    /// A frame-rotation set did not cover the assembly's frame count.
    #[error("frame set length mismatch: expected {expected} frames, got {actual}")]
    FrameSetLengthMismatch {
        /// The assembly's frame count.
        expected: usize,
        /// Number of frame rotations supplied.
        actual: usize,
    },

    /// A chain references a frame id outside the assembly's frame range.
    #[error("frame id {frame_id} out of range for chain '{chain}' (frame count {frame_count})")]
    FrameIdOutOfRange {
        /// The chain holding the offending frame-id list.
        chain: String,
        /// The out-of-range frame id.
        frame_id: usize,
        /// Number of frames the assembly exposes.
        frame_count: usize,
    },

    /// A mapping entry targets a frame outside the declared frame count.
    #[error("mapping entry {entry} targets frame {frame} outside frame count {frame_count}")]
    TargetFrameOutOfRange {
        /// Position of the entry in the table.
        entry: usize,
        /// The out-of-range target frame.
        frame: usize,
        /// Declared number of frames.
        frame_count: usize,
    },

    /// A mapping entry reads a sensor slot outside the table cardinality.
    #[error("mapping entry {entry} reads sensor {source_index} outside sensor count {sensor_count}")]
    SourceIndexOutOfRange {
        /// Position of the entry in the table.
        entry: usize,
        /// The out-of-range source index.
        source_index: usize,
        /// Table cardinality (= expected sample length).
        sensor_count: usize,
    },

    /// Two mapping entries read the same sensor slot.
    #[error("duplicate source index {source_index} in mapping table")]
    DuplicateSourceIndex {
        /// The repeated source index.
        source_index: usize,
    },

    /// A chain was configured with no links.
    #[error("chain '{0}' has no links")]
    EmptyChain(String),

    /// A chain's frame-id list does not match its link count.
    #[error("chain '{chain}' has {lengths} lengths but {frames} frame ids")]
    FrameCountMismatch {
        /// The misconfigured chain.
        chain: String,
        /// Number of link lengths.
        lengths: usize,
        /// Number of frame ids.
        frames: usize,
    },

    /// A link length was non-finite or not positive.
    #[error("invalid link length for chain '{chain}' at index {index}: {value}")]
    InvalidLength {
        /// The misconfigured chain.
        chain: String,
        /// Index into the length list.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// The supplied geometry pieces do not cover every chain entry.
    #[error("piece count mismatch for chain '{chain}': expected {expected} pairs, got {actual}")]
    PieceCountMismatch {
        /// The chain being constructed.
        chain: String,
        /// Required number of joint/bone pairs (links + 1).
        expected: usize,
        /// Number of pairs supplied.
        actual: usize,
    },

    /// A rig was assembled from parts with disagreeing frame counts.
    #[error("frame count disagreement: mapping table has {map_frames} frames, assembly has {assembly_frames}")]
    MapFrameCountMismatch {
        /// Frame count of the angle map.
        map_frames: usize,
        /// Frame count of the offending assembly.
        assembly_frames: usize,
    },
}

impl KinematicsError {
    /// Creates a sample length mismatch error.
    #[must_use]
    pub const fn sample_length_mismatch(expected: usize, actual: usize) -> Self {
        Self::SampleLengthMismatch { expected, actual }
    }

    /// Creates a rotation count mismatch error.
    #[must_use]
    pub fn rotation_count_mismatch(chain: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::RotationCountMismatch {
            chain: chain.into(),
            expected,
            actual,
        }
    }

    /// Creates a frame id out of range error.
    #[must_use]
    pub fn frame_id_out_of_range(
        chain: impl Into<String>,
        frame_id: usize,
        frame_count: usize,
    ) -> Self {
        Self::FrameIdOutOfRange {
            chain: chain.into(),
            frame_id,
            frame_count,
        }
    }

    /// Creates an invalid link length error.
    #[must_use]
    pub fn invalid_length(chain: impl Into<String>, index: usize, value: f64) -> Self {
        Self::InvalidLength {
            chain: chain.into(),
            index,
            value,
        }
    }
}

/// Result type for kinematic operations.
pub type Result<T> = std::result::Result<T, KinematicsError>;
