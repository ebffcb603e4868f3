//! Euler-angle rotation helpers.
//!
//! The whole pipeline uses one convention: an orientation is an
//! Euler-angle vector `[roll, pitch, yaw]` composed post-multiply as
//! `R = Rz(yaw) * Ry(pitch) * Rx(roll)`, each factor expressed in the
//! parent's frame.

use nalgebra::{Matrix3, Matrix4, Rotation3, Vector3};

/// Builds the rotation matrix for an Euler-angle vector `[roll, pitch, yaw]`.
///
/// The composition order is zyx post-multiply:
/// `R = Rz(yaw) * Ry(pitch) * Rx(roll)`.
///
/// # Example
///
/// ```
/// use std::f64::consts::FRAC_PI_2;
/// use nalgebra::Vector3;
///
/// // A 90 degree yaw maps +X onto +Y (right-hand rule about Z).
/// let r = hand_types::euler::rotation_matrix(&Vector3::new(0.0, 0.0, FRAC_PI_2));
/// let v = r * Vector3::x();
/// assert!(v.x.abs() < 1e-12);
/// assert!((v.y - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn rotation_matrix(euler: &Vector3<f64>) -> Matrix3<f64> {
    // nalgebra composes from_euler_angles(r, p, y) as Rz(y) * Ry(p) * Rx(r).
    Rotation3::from_euler_angles(euler.x, euler.y, euler.z).into_inner()
}

/// Assembles a 4x4 homogeneous matrix from a rotation block and a
/// translation column.
#[must_use]
pub fn homogeneous(rotation: &Matrix3<f64>, translation: &Vector3<f64>) -> Matrix4<f64> {
    let mut m = Matrix4::identity();
    m.fixed_view_mut::<3, 3>(0, 0).copy_from(rotation);
    m.fixed_view_mut::<3, 1>(0, 3).copy_from(translation);
    m
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn zero_euler_is_identity() {
        let r = rotation_matrix(&Vector3::zeros());
        assert_relative_eq!(r, Matrix3::identity(), epsilon = 1e-12);
    }

    #[test]
    fn pitch_maps_x_to_minus_z() {
        // Right-hand rotation about Y by 90 degrees sends +X to -Z.
        let r = rotation_matrix(&Vector3::new(0.0, FRAC_PI_2, 0.0));
        let v = r * Vector3::x();
        assert_relative_eq!(v, -Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn roll_maps_y_to_z() {
        let r = rotation_matrix(&Vector3::new(FRAC_PI_2, 0.0, 0.0));
        let v = r * Vector3::y();
        assert_relative_eq!(v, Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn composition_order_is_zyx() {
        let euler = Vector3::new(0.3, -0.7, 1.1);
        let rz = rotation_matrix(&Vector3::new(0.0, 0.0, euler.z));
        let ry = rotation_matrix(&Vector3::new(0.0, euler.y, 0.0));
        let rx = rotation_matrix(&Vector3::new(euler.x, 0.0, 0.0));
        assert_relative_eq!(rotation_matrix(&euler), rz * ry * rx, epsilon = 1e-12);
    }

    #[test]
    fn homogeneous_blocks() {
        let r = rotation_matrix(&Vector3::new(0.1, 0.2, 0.3));
        let t = Vector3::new(4.0, 5.0, 6.0);
        let m = homogeneous(&r, &t);
        assert_relative_eq!(m.fixed_view::<3, 3>(0, 0).into_owned(), r, epsilon = 1e-12);
        assert_relative_eq!(m.fixed_view::<3, 1>(0, 3).into_owned(), t, epsilon = 1e-12);
        assert_relative_eq!(m[(3, 3)], 1.0, epsilon = 1e-12);
    }
}
