//! Hand-level composition of finger chains.

use hand_types::{concatenate, PointSet};
use nalgebra::{Matrix3, Point3, Vector3};

use crate::chain::FingerChain;
use crate::error::{KinematicsError, Result};

/// A whole hand: an ordered set of finger chains, a handedness mirror,
/// and a world-origin translation.
///
/// The assembly owns the frame-id indirection: each tick it slices one
/// frame-rotation set into per-chain rotation lists, updates every
/// chain, then maps each output point through the handedness mirror and
/// adds the world origin. Mirroring comes first: it is defined about the
/// hand's own local origin, not the world origin.
///
/// Output pieces keep chain-registration order, then piece order within
/// each chain, so an external renderer can address each piece by a fixed
/// offset across ticks.
#[derive(Debug, Clone)]
pub struct HandAssembly {
    chains: Vec<FingerChain>,
    mirrored: bool,
    mirror: Matrix3<f64>,
    origin: Vector3<f64>,
    frame_count: usize,
}

impl HandAssembly {
    /// Assembles a hand from finger chains.
    ///
    /// `mirrored` selects the opposite-handed variant by negating the Y
    /// axis; `origin` places the hand in the world; `frame_count` is the
    /// size of the frame-rotation sets later passed to
    /// [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Returns [`KinematicsError::FrameIdOutOfRange`] when any chain
    /// references a frame id at or beyond `frame_count`.
    pub fn new(
        chains: Vec<FingerChain>,
        mirrored: bool,
        origin: Vector3<f64>,
        frame_count: usize,
    ) -> Result<Self> {
        for chain in &chains {
            for &frame_id in chain.frame_ids() {
                if frame_id >= frame_count {
                    return Err(KinematicsError::frame_id_out_of_range(
                        chain.name(),
                        frame_id,
                        frame_count,
                    ));
                }
            }
        }

        let mirror = if mirrored {
            Matrix3::from_diagonal(&Vector3::new(1.0, -1.0, 1.0))
        } else {
            Matrix3::identity()
        };

        Ok(Self {
            chains,
            mirrored,
            mirror,
            origin,
            frame_count,
        })
    }

    /// Returns whether this is the mirrored (opposite-handed) variant.
    #[must_use]
    pub const fn mirrored(&self) -> bool {
        self.mirrored
    }

    /// Returns the hand's world-origin translation.
    #[must_use]
    pub const fn origin(&self) -> Vector3<f64> {
        self.origin
    }

    /// Returns the number of frames an update must cover.
    #[must_use]
    pub const fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Returns the owned chains in registration order.
    #[must_use]
    pub fn chains(&self) -> &[FingerChain] {
        &self.chains
    }

    /// Returns the total number of output pieces across all chains.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.chains.iter().map(FingerChain::piece_count).sum()
    }

    /// Recomputes the hand pose from one frame-rotation set and returns
    /// the concatenated geometry.
    ///
    /// Every call fully replaces the previous result; piece indices are
    /// stable across calls.
    ///
    /// # Errors
    ///
    /// Returns [`KinematicsError::FrameSetLengthMismatch`] when the
    /// rotation set does not cover [`frame_count`](Self::frame_count),
    /// before any chain is touched. Chain-level errors propagate
    /// unchanged.
    pub fn update(&mut self, frame_rotations: &[Vector3<f64>]) -> Result<Vec<PointSet>> {
        if frame_rotations.len() != self.frame_count {
            return Err(KinematicsError::FrameSetLengthMismatch {
                expected: self.frame_count,
                actual: frame_rotations.len(),
            });
        }

        let mut groups = Vec::with_capacity(self.chains.len());
        for chain in &mut self.chains {
            let rotations: Vec<Vector3<f64>> = chain
                .frame_ids()
                .iter()
                .map(|&frame_id| frame_rotations[frame_id])
                .collect();
            chain.update(&rotations)?;

            let pieces: Vec<PointSet> = chain
                .vertices()
                .iter()
                .map(|set| {
                    PointSet::new(
                        set.points
                            .iter()
                            .map(|p| Point3::from(self.mirror * p.coords + self.origin))
                            .collect(),
                    )
                })
                .collect();
            groups.push(pieces);
        }

        Ok(concatenate(groups))
    }
}
