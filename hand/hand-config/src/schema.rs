//! Serde schema for the hand configuration document.
//!
//! The document is a JSON object keyed by finger name:
//!
//! ```json
//! {
//!     "Index": {
//!         "Lengths": [0.05, 0.035, 0.025],
//!         "Frames": [3, 4, 5],
//!         "Origin": {
//!             "Position": [0.0, 0.0, 0.0],
//!             "Euler": [0.0, 0.0, 0.0]
//!         }
//!     }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The whole configuration document, keyed by finger name.
///
/// JSON objects carry no order, so the chain registration order is an
/// explicit argument to the loader, not a property of this map.
pub type HandDocument = BTreeMap<String, FingerEntry>;

/// Configuration of one finger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FingerEntry {
    /// Link lengths, proximal to distal.
    #[serde(rename = "Lengths")]
    pub lengths: Vec<f64>,

    /// Global frame id driving each link, one per link.
    #[serde(rename = "Frames")]
    pub frames: Vec<usize>,

    /// Fixed origin pose of the finger in the hand frame.
    #[serde(rename = "Origin")]
    pub origin: OriginEntry,
}

/// Origin pose of a finger: position and Euler orientation in the hand
/// frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginEntry {
    /// Position `[x, y, z]`.
    #[serde(rename = "Position")]
    pub position: [f64; 3],

    /// Euler angles `[roll, pitch, yaw]`.
    #[serde(rename = "Euler")]
    pub euler: [f64; 3],
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn finger_entry_deserializes_renamed_fields() {
        let json = r#"{
            "Lengths": [0.05, 0.035],
            "Frames": [3, 4],
            "Origin": {
                "Position": [0.0, 0.01, 0.0],
                "Euler": [0.0, 0.0, 0.1]
            }
        }"#;
        let entry: FingerEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.lengths.len(), 2);
        assert_eq!(entry.frames, vec![3, 4]);
        assert!((entry.origin.position[1] - 0.01).abs() < 1e-12);
    }

    #[test]
    fn document_collects_fingers() {
        let json = r#"{
            "Thumb": {
                "Lengths": [0.04],
                "Frames": [0],
                "Origin": {"Position": [0.0, 0.0, 0.0], "Euler": [0.0, 0.0, 0.0]}
            },
            "Index": {
                "Lengths": [0.05],
                "Frames": [3],
                "Origin": {"Position": [0.0, 0.0, 0.0], "Euler": [0.0, 0.0, 0.0]}
            }
        }"#;
        let doc: HandDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.len(), 2);
        assert!(doc.contains_key("Thumb"));
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let json = r#"{"Lengths": [0.05], "Frames": [3]}"#;
        assert!(serde_json::from_str::<FingerEntry>(json).is_err());
    }
}
