//! Foundational types for the exo-hand kinematic pipeline.
//!
//! This crate provides the math and data types shared by the rest of the
//! workspace:
//!
//! - [`JointAngleSample`] - One flat vector of exoskeleton sensor readings
//! - [`RotationAxis`] - Roll/pitch/yaw index into an Euler-angle vector
//! - [`LinkPose`] - Position + Euler orientation of one chain entry
//! - [`PointSet`] - The geometry unit handed to an external renderer
//!
//! # Euler Convention
//!
//! All orientations are Euler-angle vectors `[roll, pitch, yaw]` composed
//! in fixed zyx post-multiply order: rotate about Z (yaw), then Y (pitch),
//! then X (roll). [`euler::rotation_matrix`] is the single source of truth
//! for this convention.
//!
//! # Layer 0 Crate
//!
//! No rendering, device, or I/O dependencies. It can be used in:
//! - Hardware drivers producing [`JointAngleSample`] values
//! - Headless pose computation
//! - Test harnesses
//!
//! # Example
//!
//! ```
//! use hand_types::{JointAngleSample, RotationAxis};
//!
//! let sample = JointAngleSample::from_csv_line("0.1, 0.2, 0.3")?;
//! assert_eq!(sample.len(), 3);
//! assert_eq!(RotationAxis::Pitch.index(), 1);
//! # Ok::<(), hand_types::SampleError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod axis;
mod error;
mod geometry;
mod pose;
mod sample;

pub mod euler;

pub use axis::RotationAxis;
pub use error::SampleError;
pub use geometry::{concatenate, PointSet};
pub use pose::LinkPose;
pub use sample::JointAngleSample;
