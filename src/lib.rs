#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(clippy::panic)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::cast_precision_loss)]
#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

//! # Proxima: Exact Nearest-Neighbor Search over Static Point Sets
//!
//! `proxima` answers exact nearest-point queries over a fixed set of
//! d-dimensional points faster than a linear scan. It features:
//! - A height-balanced KD-tree bulk-loaded by repeated median selection
//! - Branch-and-bound (descend-and-prune) nearest-neighbor search
//! - A `Scatter` registry owning a deduplicated point set, with a
//!   brute-force linear-scan oracle for cross-checking the index
//! - Arena-backed nodes (no reference-counting cycles) and query-local
//!   visited state, so queries only need `&self`
//!
//! The tree is built once per snapshot of the point set; rebuilding
//! replaces the prior tree wholesale. Incremental insertion, k-nearest
//! queries (k > 1) and persistence of the tree are out of scope.
//!
//! ```
//! use proxima::{Point, Scatter};
//!
//! let mut scatter = Scatter::new("demo", 2);
//! for coords in [[0.0, 0.0], [5.0, 4.0], [2.0, 2.0], [8.0, 1.0], [3.0, 7.0]] {
//!     scatter.insert(Point::new(coords.to_vec())).unwrap();
//! }
//! scatter.build().unwrap();
//!
//! let (point, distance) = scatter.nearest(&[3.0, 3.0]).unwrap();
//! assert_eq!(point.coordinates(), &[2.0, 2.0]);
//! assert!((distance - 2.0_f64.sqrt()).abs() < 1e-12);
//! ```

pub mod core;

// Re-export key types for easier use by library consumers
pub use crate::core::common::ProximaError;
pub use crate::core::index::kdtree::{KdTree, KdTreeError, NodeId};
pub use crate::core::scatter::Scatter;
pub use crate::core::types::Point;

/// Core result type for the library
pub type Result<T> = std::result::Result<T, ProximaError>;

#[cfg(test)]
mod tests {
    use crate::{Point, Scatter};

    #[test]
    fn basic_scatter_operations() {
        let mut scatter = Scatter::new("smoke", 2);
        scatter.insert(Point::new(vec![1.0, 1.0])).expect("insert failed");
        scatter.insert(Point::new(vec![4.0, 4.0])).expect("insert failed");
        scatter.build().expect("build failed");

        let (point, distance) = scatter.nearest(&[0.0, 0.0]).expect("query failed");
        assert_eq!(point.coordinates(), &[1.0, 1.0]);
        assert!((distance - 2.0_f64.sqrt()).abs() < 1e-12);
    }
}
