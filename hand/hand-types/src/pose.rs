//! Link poses: position plus Euler orientation.

use nalgebra::{Matrix4, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::euler;

/// The pose of one entry in a link chain: a position and an Euler-angle
/// orientation `[roll, pitch, yaw]`, both relative to the parent entry.
///
/// A pose converts to a homogeneous rigid transform in two ways,
/// depending on what the entry represents:
///
/// - [`pose_matrix`](Self::pose_matrix) places a frame at `position` with
///   orientation `euler`, the position expressed in the parent frame.
///   Used for a chain's fixed origin.
/// - [`joint_matrix`](Self::joint_matrix) rotates about the parent
///   frame's own origin first and then translates along the rotated
///   axes. Used for driven links, where `position.x` is the link length:
///   the joint sits at the parent frame's origin and swings the link.
///
/// # Example
///
/// ```
/// use nalgebra::{Point3, Vector3};
/// use std::f64::consts::FRAC_PI_2;
/// use hand_types::LinkPose;
///
/// // A driven link of length 2 with its joint yawed 90 degrees places
/// // its distal frame on the +Y axis.
/// let link = LinkPose::new(Vector3::new(2.0, 0.0, 0.0), Vector3::new(0.0, 0.0, FRAC_PI_2));
/// let tip = link.joint_matrix().transform_point(&Point3::origin());
/// assert!(tip.x.abs() < 1e-12);
/// assert!((tip.y - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkPose {
    /// Position relative to the parent entry.
    pub position: Vector3<f64>,
    /// Euler-angle orientation `[roll, pitch, yaw]`.
    pub euler: Vector3<f64>,
}

impl LinkPose {
    /// Creates a pose from a position and an Euler-angle vector.
    #[must_use]
    pub const fn new(position: Vector3<f64>, euler: Vector3<f64>) -> Self {
        Self { position, euler }
    }

    /// Creates the identity pose (at the parent origin, no rotation).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            position: Vector3::zeros(),
            euler: Vector3::zeros(),
        }
    }

    /// Creates a driven-link pose: offset `length` along the local X
    /// axis, zero orientation until the joint angles arrive.
    #[must_use]
    pub fn link(length: f64) -> Self {
        Self {
            position: Vector3::new(length, 0.0, 0.0),
            euler: Vector3::zeros(),
        }
    }

    /// Homogeneous transform placing a frame at `position` with
    /// orientation `euler`, the position expressed in the parent frame.
    #[must_use]
    pub fn pose_matrix(&self) -> Matrix4<f64> {
        euler::homogeneous(&euler::rotation_matrix(&self.euler), &self.position)
    }

    /// Homogeneous transform that rotates about the parent frame's
    /// origin and then translates along the rotated axes:
    /// `R(euler) * T(position)`.
    #[must_use]
    pub fn joint_matrix(&self) -> Matrix4<f64> {
        let r = euler::rotation_matrix(&self.euler);
        let t = r * self.position;
        euler::homogeneous(&r, &t)
    }
}

impl Default for LinkPose {
    fn default() -> Self {
        Self::identity()
    }
}
