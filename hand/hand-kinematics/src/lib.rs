//! Kinematic core of the exo-hand animation pipeline.
//!
//! Turns one flat exoskeleton joint-angle sample into posed hand
//! geometry, in three stages:
//!
//! - [`AngleMap`] - distributes the sample onto per-frame Euler-angle
//!   vectors through a validated mapping table
//! - [`FingerChain`] - forward kinematics for one finger: local and
//!   cumulative global rigid transforms, applied to pre-scaled
//!   reference geometry
//! - [`HandAssembly`] - routes frame rotations to its chains, applies
//!   the handedness mirror and world translation, and concatenates the
//!   result into one ordered geometry sequence
//!
//! [`HandRig`] bundles a table with a left/right assembly pair and
//! drives both from an [`AngleSource`] capability, one pose per tick.
//!
//! The pipeline is synchronous and stateless across ticks: every update
//! fully recomputes transforms and geometry from the latest sample, so
//! a failed call has nothing to roll back.
//!
//! # Example
//!
//! ```
//! use hand_kinematics::{ChainConfig, FingerChain, HandAssembly};
//! use hand_types::{LinkPose, PointSet};
//! use nalgebra::Vector3;
//!
//! let joint = PointSet::from_coords(&[[0.0, 0.0, 0.0]]);
//! let bone = PointSet::from_coords(&[[-1.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
//!
//! let chain = FingerChain::new(
//!     ChainConfig::new("Index", vec![1.0, 0.8, 0.6], vec![0, 1, 2], LinkPose::identity()),
//!     &joint,
//!     &bone,
//! )?;
//!
//! let mut hand = HandAssembly::new(vec![chain], false, Vector3::zeros(), 3)?;
//! let pieces = hand.update(&vec![Vector3::zeros(); 3])?;
//!
//! // Origin plus three links, one joint/bone pair each.
//! assert_eq!(pieces.len(), 8);
//! # Ok::<(), hand_kinematics::KinematicsError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod assembly;
mod chain;
mod error;
mod mapper;
mod rig;

pub use assembly::HandAssembly;
pub use chain::{ChainConfig, FingerChain, DEFAULT_JOINT_SCALE};
pub use error::{KinematicsError, Result};
pub use mapper::{AngleMap, MappingEntry};
pub use rig::{AngleSource, HandRig, RigPose};
