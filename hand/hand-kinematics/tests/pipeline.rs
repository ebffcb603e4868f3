//! End-to-end regression tests for the sample-to-geometry pipeline.
//!
//! These drive the reference-scale configuration (13 sensors, 9 frames,
//! three fingers per hand, left and right assemblies) through the public
//! API only. If one of these fails after an API change, the renderer
//! contract (piece count, ordering, stability across ticks) has moved.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use hand_kinematics::{
    AngleMap, AngleSource, ChainConfig, FingerChain, HandAssembly, HandRig, KinematicsError,
};
use hand_types::{JointAngleSample, LinkPose, PointSet};
use nalgebra::{Point3, Vector3};

fn joint_mesh() -> PointSet {
    PointSet::from_coords(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
}

fn bone_mesh() -> PointSet {
    PointSet::from_coords(&[[-1.0, 0.0, 0.0], [-0.5, 0.1, 0.0], [0.0, 0.0, 0.0]])
}

/// The reference hand: thumb on frames 0..=2, index on 3..=5, middle on
/// 6..=8, three links each.
fn reference_chains() -> Vec<FingerChain> {
    let fingers = [
        ("Thumb", vec![0, 1, 2], Vector3::new(0.0, -0.3, 0.0)),
        ("Index", vec![3, 4, 5], Vector3::new(0.0, 0.0, 0.0)),
        ("Middle", vec![6, 7, 8], Vector3::new(0.0, 0.3, 0.0)),
    ];

    fingers
        .into_iter()
        .map(|(name, frames, position)| {
            let origin = LinkPose::new(position, Vector3::zeros());
            FingerChain::new(
                ChainConfig::new(name, vec![0.5, 0.4, 0.3], frames, origin),
                &joint_mesh(),
                &bone_mesh(),
            )
            .unwrap()
        })
        .collect()
}

fn reference_hand(mirrored: bool, origin: Vector3<f64>) -> HandAssembly {
    HandAssembly::new(reference_chains(), mirrored, origin, 9).unwrap()
}

fn reference_rig() -> HandRig {
    HandRig::new(
        AngleMap::default(),
        reference_hand(false, Vector3::new(-0.1, 0.0, 0.0)),
        reference_hand(true, Vector3::new(0.1, 0.0, 0.0)),
    )
    .unwrap()
}

struct Replay(Vec<f64>);

impl AngleSource for Replay {
    fn joint_angles(&mut self) -> JointAngleSample {
        JointAngleSample::new(self.0.clone())
    }
}

#[test]
fn zero_sample_yields_rest_pose() {
    let mut rig = reference_rig();
    let pose = rig.pose(&JointAngleSample::new(vec![0.0; 13])).unwrap();

    // 3 chains x 4 entries x 2 pieces per hand.
    assert_eq!(pose.left.len(), 24);
    assert_eq!(pose.right.len(), 24);

    // With zero rotations, the index fingertip joint (chain 1, entry 3,
    // joint piece = index 8 + 6) sits at hand origin + finger origin +
    // summed lengths along X. Its mesh origin is the frame origin.
    let fingertip = pose.left[14].points[0];
    let expected = Point3::new(-0.1 + 0.5 + 0.4 + 0.3, 0.0, 0.0);
    assert!((fingertip - expected).norm() < 1e-12);
}

#[test]
fn pipeline_is_deterministic_across_ticks() {
    let mut rig = reference_rig();
    let sample = JointAngleSample::new(vec![
        0.1, 0.2, 0.3, 0.4, -0.1, -0.2, -0.3, -0.4, 0.05, 0.15, 0.25, 0.35, 0.45,
    ]);
    let first = rig.pose(&sample).unwrap();
    let second = rig.pose(&sample).unwrap();
    assert_eq!(first, second);
}

#[test]
fn mirrored_hand_negates_y_across_the_whole_output() {
    // Same world origin for both hands so the outputs differ only by
    // the mirror.
    let mut left = reference_hand(false, Vector3::zeros());
    let mut right = reference_hand(true, Vector3::zeros());
    let map = AngleMap::default();

    let sample = JointAngleSample::new(vec![
        0.3, 0.5, 0.2, 0.1, 0.4, 0.6, 0.2, 0.3, 0.1, 0.2, 0.3, 0.4, 0.5,
    ]);
    let rotations = map.map(&sample).unwrap();
    let a = left.update(&rotations).unwrap();
    let b = right.update(&rotations).unwrap();

    assert_eq!(a.len(), b.len());
    for (set_a, set_b) in a.iter().zip(&b) {
        for (p, q) in set_a.points.iter().zip(&set_b.points) {
            assert!((p.x - q.x).abs() < 1e-12);
            assert!((p.y + q.y).abs() < 1e-12);
            assert!((p.z - q.z).abs() < 1e-12);
        }
    }
}

#[test]
fn sensors_only_move_their_own_finger() {
    let mut rig = reference_rig();
    let rest = rig.pose(&JointAngleSample::new(vec![0.0; 13])).unwrap();

    // Sensor 1 drives frame 3 pitch: the index base joint.
    let mut angles = vec![0.0; 13];
    angles[1] = 0.7;
    let bent = rig.pose(&JointAngleSample::new(angles)).unwrap();

    // Thumb pieces (0..8) and middle pieces (16..24) are untouched.
    assert_eq!(rest.left[..8], bent.left[..8]);
    assert_eq!(rest.left[16..], bent.left[16..]);

    // The index finger moved. Its base joint piece (entry 0) is fixed
    // geometry, so compare from the first driven piece pair onward.
    assert_ne!(rest.left[10..16], bent.left[10..16]);
}

#[test]
fn short_sample_fails_before_any_update() {
    let mut rig = reference_rig();
    let rest = rig.pose(&JointAngleSample::new(vec![0.0; 13])).unwrap();

    let err = rig.pose(&JointAngleSample::new(vec![0.0; 12])).unwrap_err();
    assert!(matches!(
        err,
        KinematicsError::SampleLengthMismatch {
            expected: 13,
            actual: 12
        }
    ));

    // The failed tick left the assemblies exactly where they were.
    let after = rig.pose(&JointAngleSample::new(vec![0.0; 13])).unwrap();
    assert_eq!(rest, after);
}

#[test]
fn rig_ticks_from_an_angle_source() {
    let mut rig = reference_rig();
    let mut replay = Replay(vec![0.2; 13]);
    let pose = rig.tick(&mut replay).unwrap();
    assert_eq!(pose.left.len() + pose.right.len(), 48);
}
