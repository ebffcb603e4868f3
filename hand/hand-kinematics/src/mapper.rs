//! Table-driven distribution of sensor angles onto frame rotations.

use hand_types::{JointAngleSample, RotationAxis};
use nalgebra::Vector3;

use crate::error::{KinematicsError, Result};

/// One row of an angle-mapping table: which sensor reading feeds which
/// frame's rotation axis, and with what sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappingEntry {
    /// Index into the joint-angle sample.
    pub source: usize,
    /// Target frame id.
    pub frame: usize,
    /// Target rotation axis within the frame's Euler-angle vector.
    pub axis: RotationAxis,
    /// Direction of the reading, `+1.0` or `-1.0`.
    pub sign: f64,
}

impl MappingEntry {
    /// Creates a mapping entry.
    #[must_use]
    pub const fn new(source: usize, frame: usize, axis: RotationAxis, sign: f64) -> Self {
        Self {
            source,
            frame,
            axis,
            sign,
        }
    }
}

/// A validated angle-mapping table.
///
/// The table is fixed data: applying it is a plain iteration, one write
/// per entry. Two entries may target the same `(frame, axis)` slot; in
/// that case the later entry wins. That is permitted by design (the
/// table author controls entry order), whereas a `source` index that is
/// not a permutation of the sensor slots is rejected at construction.
///
/// # Example
///
/// ```
/// use hand_types::JointAngleSample;
/// use hand_kinematics::AngleMap;
///
/// let map = AngleMap::default(); // reference 13-sensor glove wiring
/// let sample = JointAngleSample::new(vec![0.0; 13]);
/// let rotations = map.map(&sample)?;
/// assert_eq!(rotations.len(), 9);
/// # Ok::<(), hand_kinematics::KinematicsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AngleMap {
    entries: Vec<MappingEntry>,
    frame_count: usize,
}

impl AngleMap {
    /// Creates a map from a table of entries and the number of frames it
    /// drives.
    ///
    /// # Errors
    ///
    /// Returns [`KinematicsError::TargetFrameOutOfRange`],
    /// [`KinematicsError::SourceIndexOutOfRange`], or
    /// [`KinematicsError::DuplicateSourceIndex`] when the table violates
    /// its invariants: every target frame must lie in
    /// `[0, frame_count)` and the source indices must form a permutation
    /// of `[0, entries.len())`.
    pub fn new(entries: Vec<MappingEntry>, frame_count: usize) -> Result<Self> {
        let sensor_count = entries.len();
        let mut seen = vec![false; sensor_count];

        for (i, entry) in entries.iter().enumerate() {
            if entry.frame >= frame_count {
                return Err(KinematicsError::TargetFrameOutOfRange {
                    entry: i,
                    frame: entry.frame,
                    frame_count,
                });
            }
            if entry.source >= sensor_count {
                return Err(KinematicsError::SourceIndexOutOfRange {
                    entry: i,
                    source_index: entry.source,
                    sensor_count,
                });
            }
            if seen[entry.source] {
                return Err(KinematicsError::DuplicateSourceIndex {
                    source_index: entry.source,
                });
            }
            seen[entry.source] = true;
        }

        Ok(Self {
            entries,
            frame_count,
        })
    }

    /// Returns the number of sensor readings the table expects.
    #[must_use]
    pub fn sensor_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of frames the table drives.
    #[must_use]
    pub const fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Returns the table entries.
    #[must_use]
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    /// Distributes a sample onto per-frame Euler-angle vectors.
    ///
    /// Every frame's vector starts at zero each call, so frames and axes
    /// the table never touches stay at zero on every tick regardless of
    /// earlier samples.
    ///
    /// # Errors
    ///
    /// Returns [`KinematicsError::SampleLengthMismatch`] when the sample
    /// length differs from the table cardinality. No partial output is
    /// produced in that case.
    pub fn map(&self, sample: &JointAngleSample) -> Result<Vec<Vector3<f64>>> {
        if sample.len() != self.entries.len() {
            return Err(KinematicsError::sample_length_mismatch(
                self.entries.len(),
                sample.len(),
            ));
        }

        let mut rotations = vec![Vector3::zeros(); self.frame_count];
        for entry in &self.entries {
            rotations[entry.frame][entry.axis.index()] = entry.sign * sample.angles[entry.source];
        }

        Ok(rotations)
    }
}

impl Default for AngleMap {
    /// The reference 13-sensor exoskeleton glove wiring.
    ///
    /// Frames 0..=2 are the thumb (carpal frame 0 is 3-DOF), frames
    /// 3..=5 the index finger, frames 6..=8 the middle finger; each
    /// finger's base frame takes yaw + pitch, distal frames pitch only.
    fn default() -> Self {
        use RotationAxis::{Pitch, Roll, Yaw};

        let entries = vec![
            MappingEntry::new(0, 3, Yaw, 1.0),
            MappingEntry::new(1, 3, Pitch, 1.0),
            MappingEntry::new(2, 4, Pitch, 1.0),
            MappingEntry::new(3, 5, Pitch, 1.0),
            MappingEntry::new(4, 6, Yaw, 1.0),
            MappingEntry::new(5, 6, Pitch, 1.0),
            MappingEntry::new(6, 7, Pitch, 1.0),
            MappingEntry::new(7, 8, Pitch, 1.0),
            MappingEntry::new(8, 0, Roll, 1.0),
            MappingEntry::new(9, 0, Pitch, 1.0),
            MappingEntry::new(10, 0, Yaw, 1.0),
            MappingEntry::new(11, 1, Pitch, 1.0),
            MappingEntry::new(12, 2, Pitch, 1.0),
        ];

        // The reference table satisfies the constructor invariants.
        Self {
            entries,
            frame_count: 9,
        }
    }
}
