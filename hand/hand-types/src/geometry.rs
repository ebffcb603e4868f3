//! Geometry units exchanged with external renderers.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered set of 3D points, the unit of geometry the pipeline hands
/// to an external renderer.
///
/// The pipeline never retains renderer state; it returns point sets in a
/// stable order and leaves display-list bookkeeping entirely to the
/// consumer.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointSet {
    /// The points, in the order the source mesh defines them.
    pub points: Vec<Point3<f64>>,
}

impl PointSet {
    /// Creates a point set from a list of points.
    #[must_use]
    pub const fn new(points: Vec<Point3<f64>>) -> Self {
        Self { points }
    }

    /// Creates a point set from `(x, y, z)` coordinate triples.
    #[must_use]
    pub fn from_coords(coords: &[[f64; 3]]) -> Self {
        Self {
            points: coords
                .iter()
                .map(|c| Point3::new(c[0], c[1], c[2]))
                .collect(),
        }
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Checks whether the set has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Concatenates per-group sequences into one flat sequence, preserving
/// group order and element order within each group.
///
/// Hand assembly uses this to flatten per-chain piece lists into the
/// single ordered sequence a renderer addresses by position. It is
/// generic over the element type so callers are not tied to any
/// particular point-set or matrix representation.
///
/// # Example
///
/// ```
/// let flat = hand_types::concatenate(vec![vec![1, 2], vec![3], vec![4, 5]]);
/// assert_eq!(flat, vec![1, 2, 3, 4, 5]);
/// ```
#[must_use]
pub fn concatenate<T>(groups: Vec<Vec<T>>) -> Vec<T> {
    groups.into_iter().flatten().collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn point_set_from_coords() {
        let set = PointSet::from_coords(&[[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]]);
        assert_eq!(set.len(), 2);
        assert!((set.points[1].x - 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_point_set() {
        let set = PointSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn concatenate_preserves_order() {
        let groups = vec![vec!["a", "b"], vec![], vec!["c"]];
        assert_eq!(concatenate(groups), vec!["a", "b", "c"]);
    }

    #[test]
    fn concatenate_point_sets() {
        let a = PointSet::from_coords(&[[0.0; 3]]);
        let b = PointSet::from_coords(&[[1.0; 3]]);
        let flat = concatenate(vec![vec![a.clone()], vec![b.clone()]]);
        assert_eq!(flat, vec![a, b]);
    }
}
