// src/core/scatter/mod.rs

//! Point registry owning a deduplicated set of points.
//!
//! A [`Scatter`] accumulates points of a fixed dimension, builds the
//! KD-tree from the current snapshot on request, and forwards queries to
//! it. It also exposes a brute-force linear scan, useful as a correctness
//! oracle for the index and as a fallback for unindexed sets.

use crate::core::common::ProximaError;
use crate::core::index::kdtree::KdTree;
use crate::core::types::Point;

/// A named, deduplicated set of d-dimensional points with an attached
/// KD-tree index.
///
/// Points are validated on insertion; the index is rebuilt wholesale by
/// [`Scatter::build`] and must be rebuilt after further insertions for
/// [`Scatter::nearest`] to see them.
#[derive(Debug, Clone)]
pub struct Scatter {
    /// Human-readable name, used only for identification.
    name: String,
    /// Dimension every owned point must match.
    dimension: usize,
    /// The owned points, deduplicated by component-wise equality.
    points: Vec<Point>,
    /// Index over the snapshot passed to the last successful `build`.
    tree: KdTree,
}

impl Scatter {
    /// Creates an empty registry for points of the given dimension.
    #[must_use]
    pub fn new(name: impl Into<String>, dimension: usize) -> Self {
        Self { name: name.into(), dimension, points: Vec::new(), tree: KdTree::new(dimension) }
    }

    /// Name of this registry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dimension every owned point must match.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of owned points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the registry holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The owned points, in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The index built from the last snapshot.
    #[must_use]
    pub const fn tree(&self) -> &KdTree {
        &self.tree
    }

    /// Adds a point to the registry. Returns `Ok(false)` if an equal
    /// point was already present (set semantics); the index is not
    /// rebuilt automatically.
    ///
    /// # Errors
    /// Returns `ProximaError::DimensionMismatch` if the point's dimension
    /// disagrees with the registry's, or `ProximaError::InvalidInput` if
    /// any coordinate is non-finite. Existing state is untouched on
    /// error.
    pub fn insert(&mut self, point: Point) -> Result<bool, ProximaError> {
        if point.dimension() != self.dimension {
            return Err(ProximaError::DimensionMismatch {
                expected: self.dimension,
                actual: point.dimension(),
            });
        }
        if !point.coordinates().iter().all(|c| c.is_finite()) {
            return Err(ProximaError::InvalidInput {
                message: "point contains non-finite coordinates".to_string(),
            });
        }
        if self.points.contains(&point) {
            return Ok(false);
        }
        self.points.push(point);
        Ok(true)
    }

    /// Rebuilds the KD-tree from the current snapshot of points,
    /// discarding any prior tree.
    ///
    /// # Errors
    /// Propagates `KdTreeError` from the index build.
    pub fn build(&mut self) -> Result<(), ProximaError> {
        self.tree.build(self.points.clone())?;
        Ok(())
    }

    /// Finds the owned point nearest to `coords` using the index,
    /// returning the point and its Euclidean distance.
    ///
    /// # Errors
    /// Returns `ProximaError::EmptyTreeQuery` if no tree has been built,
    /// or `ProximaError::DimensionMismatch` on a malformed query.
    pub fn nearest(&self, coords: &[f64]) -> Result<(&Point, f64), ProximaError> {
        let (id, distance) = self.tree.find_nearest(coords)?;
        let point = self
            .tree
            .point(id)
            .ok_or_else(|| ProximaError::Internal(format!("node id {} missing from arena", id)))?;
        Ok((point, distance))
    }

    /// Finds the nearest owned point by scanning every point. O(N) per
    /// query; the correctness oracle for [`Scatter::nearest`].
    ///
    /// # Errors
    /// Returns `ProximaError::EmptyTreeQuery` if the registry holds no
    /// points, or `ProximaError::DimensionMismatch` on a malformed query.
    pub fn nearest_linear(&self, coords: &[f64]) -> Result<(&Point, f64), ProximaError> {
        if coords.len() != self.dimension {
            return Err(ProximaError::DimensionMismatch {
                expected: self.dimension,
                actual: coords.len(),
            });
        }
        let query = Point::new(coords.to_vec());
        let mut closest: Option<(&Point, f64)> = None;
        for point in &self.points {
            if let Some(distance) = query.distance(point) {
                match closest {
                    Some((_, best)) if best <= distance => {}
                    _ => closest = Some((point, distance)),
                }
            }
        }
        closest.ok_or(ProximaError::EmptyTreeQuery)
    }
}
