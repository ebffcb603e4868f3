//! Parsing and validation of hand configuration documents.

use std::fs;
use std::path::Path;

use hand_kinematics::ChainConfig;
use hand_types::LinkPose;
use nalgebra::Vector3;

use crate::error::{ConfigError, Result};
use crate::schema::{FingerEntry, HandDocument};

/// The reference finger registration order.
///
/// JSON objects are unordered, so the order in which chains register
/// with an assembly (and thus the renderer's piece offsets) comes from
/// this list or a caller-supplied one.
pub const DEFAULT_FINGER_ORDER: [&str; 3] = ["Thumb", "Index", "Middle"];

/// Parses a configuration document from a JSON string.
///
/// # Errors
///
/// Returns [`ConfigError::Json`] when the text is not valid JSON or
/// does not match the schema.
pub fn parse_str(json: &str) -> Result<HandDocument> {
    Ok(serde_json::from_str(json)?)
}

/// Converts a parsed document into chain configurations, in the given
/// registration order.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFinger`] when `order` names a finger
/// the document lacks, and a validation error when an entry is
/// internally inconsistent (empty lengths, frame/length count mismatch,
/// non-positive or non-finite values).
pub fn chains_from_document(doc: &HandDocument, order: &[&str]) -> Result<Vec<ChainConfig>> {
    order
        .iter()
        .map(|&name| {
            let entry = doc
                .get(name)
                .ok_or_else(|| ConfigError::missing_finger(name))?;
            validate_entry(name, entry)?;
            tracing::debug!(
                "loaded finger '{}' with {} links on frames {:?}",
                name,
                entry.lengths.len(),
                entry.frames
            );
            Ok(chain_config(name, entry))
        })
        .collect()
}

/// Reads and converts a configuration file in one step, using the
/// default finger order.
///
/// # Errors
///
/// As [`parse_str`] and [`chains_from_document`], plus
/// [`ConfigError::Io`] when the file cannot be read.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<ChainConfig>> {
    let text = fs::read_to_string(path)?;
    let doc = parse_str(&text)?;
    chains_from_document(&doc, &DEFAULT_FINGER_ORDER)
}

fn validate_entry(name: &str, entry: &FingerEntry) -> Result<()> {
    if entry.lengths.is_empty() {
        return Err(ConfigError::EmptyLengths(name.to_owned()));
    }
    if entry.frames.len() != entry.lengths.len() {
        return Err(ConfigError::FrameCountMismatch {
            finger: name.to_owned(),
            lengths: entry.lengths.len(),
            frames: entry.frames.len(),
        });
    }
    for (index, &value) in entry.lengths.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::invalid_length(name, index, value));
        }
    }
    if entry.origin.position.iter().any(|v| !v.is_finite()) {
        return Err(ConfigError::NonFiniteOrigin {
            finger: name.to_owned(),
            field: "Position",
        });
    }
    if entry.origin.euler.iter().any(|v| !v.is_finite()) {
        return Err(ConfigError::NonFiniteOrigin {
            finger: name.to_owned(),
            field: "Euler",
        });
    }
    Ok(())
}

fn chain_config(name: &str, entry: &FingerEntry) -> ChainConfig {
    let origin = LinkPose::new(
        Vector3::from(entry.origin.position),
        Vector3::from(entry.origin.euler),
    );
    ChainConfig::new(
        name,
        entry.lengths.clone(),
        entry.frames.clone(),
        origin,
    )
}
