//! Finger link chains and their forward kinematics.

use hand_types::{LinkPose, PointSet};
use nalgebra::{Matrix4, Point3, Vector3, Vector4};

use crate::error::{KinematicsError, Result};

/// Scale applied to joint reference geometry (and to the origin's base
/// stub, which has no link length of its own).
pub const DEFAULT_JOINT_SCALE: f64 = 0.05;

/// Static configuration of one finger chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainConfig {
    /// Chain name, e.g. `"Index"`.
    pub name: String,
    /// Link lengths, proximal to distal.
    pub lengths: Vec<f64>,
    /// Global frame id driving each link, one per link.
    pub frames: Vec<usize>,
    /// Fixed origin pose of the chain in the hand frame.
    pub origin: LinkPose,
    /// Scale applied to joint reference geometry.
    pub joint_scale: f64,
}

impl ChainConfig {
    /// Creates a chain configuration with the default joint scale.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        lengths: Vec<f64>,
        frames: Vec<usize>,
        origin: LinkPose,
    ) -> Self {
        Self {
            name: name.into(),
            lengths,
            frames,
            origin,
            joint_scale: DEFAULT_JOINT_SCALE,
        }
    }
}

/// A pre-scaled geometry piece in homogeneous coordinates, owned by one
/// chain entry.
#[derive(Debug, Clone)]
struct ScaledPiece {
    /// Index of the owning chain entry (0 is the origin).
    link: usize,
    /// Scaled reference points, extended with w = 1.
    points: Vec<Vector4<f64>>,
}

impl ScaledPiece {
    fn new(link: usize, mesh: &PointSet, scale: f64) -> Self {
        let points = mesh
            .points
            .iter()
            .map(|p| Vector4::new(p.x * scale, p.y * scale, p.z * scale, 1.0))
            .collect();
        Self { link, points }
    }
}

/// One finger: a fixed origin pose plus a run of driven links, with the
/// forward kinematics that places its reference geometry.
///
/// # Chain Model
///
/// The chain state has `links + 1` entries. Entry 0 is the origin pose
/// from configuration and is never driven; entry `i` (for `i >= 1`)
/// carries `position.x = lengths[i - 1]` and receives its Euler angles
/// each tick. Local transforms compose as
///
/// ```text
/// Local[0] = [R(origin.euler) | origin.position]
/// Local[i] = R(euler[i]) * T(lengths[i-1] * x)      for i >= 1
/// Global[0] = Local[0]
/// Global[i] = Global[i-1] * Local[i]
/// ```
///
/// so joint `i` rotates at frame `i-1`'s origin and frame `i` sits at
/// the distal end of link `i`. With all rotations zero, frame `N` lies
/// at distance `lengths.sum()` along the chain's local X axis.
///
/// Each entry owns a joint piece and a bone piece, scaled once at
/// construction (the joint piece by [`ChainConfig::joint_scale`], the
/// bone piece by the arriving link's length) and transformed by that
/// entry's global matrix every update. Output order is
/// `[joint_0, bone_0, joint_1, bone_1, ...]`.
#[derive(Debug, Clone)]
pub struct FingerChain {
    name: String,
    frames: Vec<usize>,
    state: Vec<LinkPose>,
    pieces: Vec<ScaledPiece>,
    local: Vec<Matrix4<f64>>,
    global: Vec<Matrix4<f64>>,
    vertices: Vec<PointSet>,
}

impl FingerChain {
    /// Builds a chain from its configuration and the two reference
    /// meshes shared by every entry: one joint mesh and one bone mesh.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the length list is empty, the
    /// frame-id list has a different length, or a link length is not a
    /// finite positive number.
    pub fn new(config: ChainConfig, joint_mesh: &PointSet, bone_mesh: &PointSet) -> Result<Self> {
        let pairs = config.lengths.len() + 1;
        let pair_list = vec![(joint_mesh.clone(), bone_mesh.clone()); pairs];
        Self::with_pieces(config, pair_list)
    }

    /// Builds a chain from one raw `(joint, bone)` mesh pair per chain
    /// entry, origin first.
    ///
    /// # Errors
    ///
    /// As [`FingerChain::new`], plus
    /// [`KinematicsError::PieceCountMismatch`] when the pair list does
    /// not cover every entry.
    pub fn with_pieces(
        config: ChainConfig,
        pairs: Vec<(PointSet, PointSet)>,
    ) -> Result<Self> {
        let ChainConfig {
            name,
            lengths,
            frames,
            origin,
            joint_scale,
        } = config;

        if lengths.is_empty() {
            return Err(KinematicsError::EmptyChain(name));
        }
        if frames.len() != lengths.len() {
            return Err(KinematicsError::FrameCountMismatch {
                chain: name,
                lengths: lengths.len(),
                frames: frames.len(),
            });
        }
        for (index, &value) in lengths.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(KinematicsError::invalid_length(name, index, value));
            }
        }
        if pairs.len() != lengths.len() + 1 {
            return Err(KinematicsError::PieceCountMismatch {
                chain: name,
                expected: lengths.len() + 1,
                actual: pairs.len(),
            });
        }

        let mut state = Vec::with_capacity(lengths.len() + 1);
        state.push(origin);
        for &length in &lengths {
            state.push(LinkPose::link(length));
        }

        let mut pieces = Vec::with_capacity(2 * state.len());
        for (i, (joint_mesh, bone_mesh)) in pairs.iter().enumerate() {
            let bone_scale = if i == 0 { joint_scale } else { lengths[i - 1] };
            pieces.push(ScaledPiece::new(i, joint_mesh, joint_scale));
            pieces.push(ScaledPiece::new(i, bone_mesh, bone_scale));
        }

        let entries = state.len();
        let mut chain = Self {
            name,
            frames,
            state,
            pieces,
            local: vec![Matrix4::identity(); entries],
            global: vec![Matrix4::identity(); entries],
            vertices: Vec::new(),
        };
        chain.recompute();
        Ok(chain)
    }

    /// Returns the chain name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of driven links.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.frames.len()
    }

    /// Returns the global frame id driving each link.
    #[must_use]
    pub fn frame_ids(&self) -> &[usize] {
        &self.frames
    }

    /// Returns the number of output pieces (two per chain entry).
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Returns the local transforms from the latest update.
    #[must_use]
    pub fn local_transforms(&self) -> &[Matrix4<f64>] {
        &self.local
    }

    /// Returns the cumulative global transforms from the latest update.
    #[must_use]
    pub fn global_transforms(&self) -> &[Matrix4<f64>] {
        &self.global
    }

    /// Returns the transformed geometry from the latest update, ordered
    /// `[joint_0, bone_0, joint_1, bone_1, ...]`.
    #[must_use]
    pub fn vertices(&self) -> &[PointSet] {
        &self.vertices
    }

    /// Recomputes the chain pose from one Euler-angle vector per driven
    /// link, in chain order.
    ///
    /// All transforms and geometry are fully replaced; nothing carries
    /// over from the previous tick except configuration.
    ///
    /// # Errors
    ///
    /// Returns [`KinematicsError::RotationCountMismatch`] when the slice
    /// length differs from [`link_count`](Self::link_count); the chain
    /// state is left untouched in that case.
    pub fn update(&mut self, rotations: &[Vector3<f64>]) -> Result<()> {
        if rotations.len() != self.frames.len() {
            return Err(KinematicsError::rotation_count_mismatch(
                self.name.clone(),
                self.frames.len(),
                rotations.len(),
            ));
        }

        for (pose, rotation) in self.state.iter_mut().skip(1).zip(rotations) {
            pose.euler = *rotation;
        }
        self.recompute();
        Ok(())
    }

    fn recompute(&mut self) {
        self.local[0] = self.state[0].pose_matrix();
        for (i, pose) in self.state.iter().enumerate().skip(1) {
            self.local[i] = pose.joint_matrix();
        }

        self.global[0] = self.local[0];
        for i in 1..self.local.len() {
            self.global[i] = self.global[i - 1] * self.local[i];
        }

        self.vertices = self
            .pieces
            .iter()
            .map(|piece| {
                let t = &self.global[piece.link];
                PointSet::new(
                    piece
                        .points
                        .iter()
                        .map(|h| {
                            let p = t * h;
                            Point3::new(p.x, p.y, p.z)
                        })
                        .collect(),
                )
            })
            .collect();
    }
}
