// src/core/types/mod.rs

//! Core data types for `proxima`.

use serde::{Deserialize, Serialize};

/// An immutable d-dimensional point.
///
/// The dimension is fixed at creation time as the length of the coordinate
/// vector. Equality is component-wise, which makes exact duplicates
/// detectable by the [`Scatter`](crate::core::scatter::Scatter) registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Coordinates, one entry per dimension.
    coordinates: Vec<f64>,
}

impl Point {
    /// Creates a point from its coordinates. The dimension is the number
    /// of coordinates supplied.
    #[must_use]
    pub fn new(coordinates: Vec<f64>) -> Self {
        Self { coordinates }
    }

    /// Returns the coordinates of this point.
    #[must_use]
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Returns the dimension this point lives in.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// Euclidean distance to another point, or `None` if the dimensions
    /// disagree.
    #[must_use]
    pub fn distance(&self, other: &Self) -> Option<f64> {
        self.distance_sq(other).map(f64::sqrt)
    }

    /// Squared Euclidean distance to another point, or `None` if the
    /// dimensions disagree. The search carries squared distances
    /// internally and takes a single root at the end.
    #[must_use]
    pub fn distance_sq(&self, other: &Self) -> Option<f64> {
        if self.dimension() != other.dimension() {
            return None;
        }
        Some(distance_sq_unchecked(&self.coordinates, &other.coordinates))
    }
}

/// Squared Euclidean distance between two coordinate slices of equal
/// length. Callers validate dimensions up front.
pub(crate) fn distance_sq_unchecked(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}
