// src/core/index/kdtree/search.rs

//! Branch-and-bound nearest-neighbor search.
//!
//! One query runs two mutually recursive phases over the arena. The
//! descend phase walks from a subtree root to a childless node, following
//! the partition invariant toward the query and scoring every node it
//! passes. The backtrack phase walks the ancestor chain back to the root,
//! re-entering an unvisited sibling subtree whenever the gap to the
//! ancestor's cut plane no longer rules it out.
//!
//! Visited state lives in a query-local bitset indexed by node id, so the
//! tree itself is never mutated and queries only need `&self`. The
//! running best is kept as a squared distance; the single-axis gap in the
//! pruning test is squared to match, and one square root at the end
//! produces the returned Euclidean distance.

use super::error::KdTreeError;
use super::node::NodeId;
use super::KdTree;
use crate::core::types::distance_sq_unchecked;

/// Running best candidate for one query.
struct Best {
    /// Node id of the closest point seen so far.
    id: NodeId,
    /// Squared Euclidean distance to that point.
    distance_sq: f64,
}

/// Finds the node nearest to `query`, returning its id and the Euclidean
/// distance. See [`KdTree::find_nearest`] for the public contract.
pub(super) fn find_nearest(tree: &KdTree, query: &[f64]) -> Result<(NodeId, f64), KdTreeError> {
    let root = tree.root().ok_or(KdTreeError::EmptyTreeQuery)?;
    if query.len() != tree.dimension() {
        return Err(KdTreeError::DimensionMismatch {
            expected: tree.dimension(),
            actual: query.len(),
        });
    }

    let mut visited = vec![false; tree.len()];
    let mut best = Best {
        id: root,
        distance_sq: distance_sq_unchecked(query, tree.nodes()[root].point().coordinates()),
    };
    descend(tree, query, root, &mut visited, &mut best);
    Ok((best.id, best.distance_sq.sqrt()))
}

/// Descend phase: walk down from `node` toward the query, marking and
/// scoring every node reached, then hand the childless endpoint to the
/// backtrack phase.
///
/// The entry node is scored as well. On the initial call this repeats
/// the root seeding harmlessly; on re-entry from a backtrack it is what
/// keeps the sibling subtree's own point from being skipped.
fn descend(tree: &KdTree, query: &[f64], node: NodeId, visited: &mut [bool], best: &mut Best) {
    let mut current = node;
    visited[current] = true;
    score(tree, query, current, best);

    loop {
        let n = &tree.nodes()[current];
        let next = match (n.low(), n.high()) {
            (Some(low), _) if query[n.cut_dimension()] <= n.coordinate(n.cut_dimension()) => low,
            (_, Some(high)) => high,
            (Some(low), None) => low,
            (None, None) => break,
        };
        current = next;
        visited[current] = true;
        score(tree, query, current, best);
    }

    backtrack(tree, query, current, visited, best);
}

/// Backtrack phase: from the endpoint of a descent, walk the ancestor
/// chain to the root. At each ancestor whose cut plane is closer than the
/// running best, re-enter the one unvisited child subtree, if any.
fn backtrack(tree: &KdTree, query: &[f64], from: NodeId, visited: &mut [bool], best: &mut Best) {
    let mut ancestor = tree.nodes()[from].parent();
    while let Some(id) = ancestor {
        let n = &tree.nodes()[id];
        let gap = query[n.cut_dimension()] - n.coordinate(n.cut_dimension());
        if gap * gap < best.distance_sq {
            // The sphere around the query crosses this cut plane, so the
            // far side may still hold a closer point.
            let unvisited = n
                .low()
                .filter(|&child| !visited[child])
                .or_else(|| n.high().filter(|&child| !visited[child]));
            if let Some(child) = unvisited {
                descend(tree, query, child, visited, best);
            }
        }
        ancestor = tree.nodes()[id].parent();
    }
}

/// Updates the running best if `node` is closer to the query.
fn score(tree: &KdTree, query: &[f64], node: NodeId, best: &mut Best) {
    let distance_sq = distance_sq_unchecked(query, tree.nodes()[node].point().coordinates());
    if distance_sq < best.distance_sq {
        best.id = node;
        best.distance_sq = distance_sq;
    }
}
