//! Configuration loading for the exo-hand pipeline.
//!
//! Parses the JSON hand-configuration document (per-finger link lengths,
//! frame ids, and origin pose), validates it, and converts it into
//! [`hand_kinematics::ChainConfig`] values ready for chain construction.
//! Everything here fails at load time; a document that converts
//! successfully cannot take the kinematic pipeline down later.
//!
//! # Example
//!
//! ```
//! let json = r#"{
//!     "Index": {
//!         "Lengths": [0.05, 0.035, 0.025],
//!         "Frames": [3, 4, 5],
//!         "Origin": {"Position": [0.0, 0.0, 0.0], "Euler": [0.0, 0.0, 0.0]}
//!     }
//! }"#;
//!
//! let doc = hand_config::parse_str(json)?;
//! let chains = hand_config::chains_from_document(&doc, &["Index"])?;
//! assert_eq!(chains[0].lengths.len(), 3);
//! # Ok::<(), hand_config::ConfigError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, Result};
pub use loader::{chains_from_document, load_file, parse_str, DEFAULT_FINGER_ORDER};
pub use schema::{FingerEntry, HandDocument, OriginEntry};
