//! The animation rig: one mapping table driving a pair of hands.

use hand_types::{JointAngleSample, PointSet};

use crate::assembly::HandAssembly;
use crate::error::{KinematicsError, Result};
use crate::mapper::AngleMap;

/// Capability interface for whatever produces joint-angle samples.
///
/// The reference implementation is a serial exoskeleton driver; tests
/// and replays can implement it over canned data. The rig only ever
/// asks for the latest sample, so device failure handling stays on the
/// driver's side of this boundary.
pub trait AngleSource {
    /// Returns the most recent joint-angle readout.
    fn joint_angles(&mut self) -> JointAngleSample;
}

/// Geometry for both hands after one tick, in renderer order.
#[derive(Debug, Clone, PartialEq)]
pub struct RigPose {
    /// Left-hand pieces, chain-registration order.
    pub left: Vec<PointSet>,
    /// Right-hand pieces, chain-registration order.
    pub right: Vec<PointSet>,
}

/// A mapping table plus the two hand assemblies it animates.
///
/// One [`pose`](Self::pose) call is one tick: the sample is distributed
/// onto frame rotations once and both hands are recomputed from that
/// same rotation set, left first. There is no state between ticks and
/// no smoothing; each call yields exactly the pose of its sample.
#[derive(Debug, Clone)]
pub struct HandRig {
    map: AngleMap,
    left: HandAssembly,
    right: HandAssembly,
}

impl HandRig {
    /// Builds a rig from a mapping table and two assemblies.
    ///
    /// # Errors
    ///
    /// Returns [`KinematicsError::MapFrameCountMismatch`] when either
    /// assembly's frame count differs from the table's.
    pub fn new(map: AngleMap, left: HandAssembly, right: HandAssembly) -> Result<Self> {
        for hand in [&left, &right] {
            if hand.frame_count() != map.frame_count() {
                return Err(KinematicsError::MapFrameCountMismatch {
                    map_frames: map.frame_count(),
                    assembly_frames: hand.frame_count(),
                });
            }
        }
        Ok(Self { map, left, right })
    }

    /// Returns the mapping table.
    #[must_use]
    pub const fn map(&self) -> &AngleMap {
        &self.map
    }

    /// Returns the left-hand assembly.
    #[must_use]
    pub const fn left(&self) -> &HandAssembly {
        &self.left
    }

    /// Returns the right-hand assembly.
    #[must_use]
    pub const fn right(&self) -> &HandAssembly {
        &self.right
    }

    /// Computes both hands' geometry for one sample.
    ///
    /// # Errors
    ///
    /// Propagates mapping and assembly errors unchanged; a failed tick
    /// leaves no partial state behind.
    pub fn pose(&mut self, sample: &JointAngleSample) -> Result<RigPose> {
        let rotations = self.map.map(sample)?;
        let left = self.left.update(&rotations)?;
        let right = self.right.update(&rotations)?;
        tracing::trace!(
            "rig pose updated: {} left pieces, {} right pieces",
            left.len(),
            right.len()
        );
        Ok(RigPose { left, right })
    }

    /// Pulls the latest sample from a source and computes both hands.
    ///
    /// # Errors
    ///
    /// As [`pose`](Self::pose).
    pub fn tick(&mut self, source: &mut dyn AngleSource) -> Result<RigPose> {
        let sample = source.joint_angles();
        self.pose(&sample)
    }
}
