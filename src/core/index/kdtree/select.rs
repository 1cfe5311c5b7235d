// src/core/index/kdtree/select.rs

//! Quickselect-by-dimension used to bulk-load the tree.
//!
//! Hoare-style recursive selection with the pivot fixed at the queried
//! rank's current position (not randomized). Worst case O(n²) on
//! adversarial input order, expected near-linear on typical data; this is
//! acceptable because trees are built once from a static point set.

use super::error::KdTreeError;
use super::node::{Node, NodeId};

/// Finds the node whose coordinate on `dim` has the given rank among
/// `items`, partitioning the rest around it.
///
/// Returns `(lower, median, higher)` where `lower` holds the nodes with
/// coordinate ≤ the median's and `higher` the nodes with coordinate >.
/// Both partitions preserve the relative order of `items` (stable
/// partition), which makes the resulting tree shape deterministic for a
/// fixed input order. Ties on the comparison dimension go to `lower`.
///
/// # Errors
/// Returns `KdTreeError::MalformedSelection` if `rank` is out of range
/// for `items`. This is an internal invariant violation, not a
/// recoverable condition.
pub(crate) fn select(
    arena: &[Node],
    items: &[NodeId],
    rank: usize,
    dim: usize,
) -> Result<(Vec<NodeId>, NodeId, Vec<NodeId>), KdTreeError> {
    if rank >= items.len() {
        return Err(KdTreeError::MalformedSelection(format!(
            "rank {} out of range for {} items",
            rank,
            items.len()
        )));
    }

    let pivot = items[rank];
    let pivot_coord = arena[pivot].coordinate(dim);

    let mut lower = Vec::new();
    let mut higher = Vec::new();
    for (position, &id) in items.iter().enumerate() {
        if position == rank {
            continue;
        }
        if arena[id].coordinate(dim) <= pivot_coord {
            lower.push(id);
        } else {
            higher.push(id);
        }
    }

    let low_count = lower.len();
    if low_count == rank {
        // Pivot is exactly the rank-th smallest.
        Ok((lower, pivot, higher))
    } else if low_count < rank {
        // Target lies within `higher`; everything up to and including the
        // pivot belongs below the eventual median.
        let (rec_lower, median, rec_higher) =
            select(arena, &higher, rank - low_count - 1, dim)?;
        lower.push(pivot);
        lower.extend(rec_lower);
        Ok((lower, median, rec_higher))
    } else {
        // Target lies within `lower` at the same rank; the pivot and
        // everything above it belong above the eventual median.
        let (rec_lower, median, mut rec_higher) = select(arena, &lower, rank, dim)?;
        rec_higher.push(pivot);
        rec_higher.extend(higher);
        Ok((rec_lower, median, rec_higher))
    }
}
