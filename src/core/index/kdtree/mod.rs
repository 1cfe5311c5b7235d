// src/core/index/kdtree/mod.rs

//! Bulk-loaded KD-tree for exact nearest-neighbor queries.
//!
//! The tree is built from a snapshot of the point set by repeated median
//! selection: each node's point is the lower median of its subtree on the
//! node's cut dimension, and the cut dimension rotates with depth. This
//! yields a height-balanced tree without rotations. Queries run a
//! branch-and-bound descend-and-prune search over the arena.

pub use self::error::KdTreeError;
pub use self::node::{Node, NodeId, Side};

mod error;
mod node;
mod search;
mod select;


use crate::core::types::Point;

/// A binary space-partitioning tree over d-dimensional points.
///
/// Owns all nodes in a flat arena indexed by [`NodeId`]. Created empty
/// for a fixed dimension and populated by [`KdTree::build`]; rebuilding
/// discards the prior tree wholesale. Queries take `&self` — the search
/// keeps its transient visited state per query, so concurrent read-only
/// queries are safe by construction.
#[derive(Debug, Clone)]
pub struct KdTree {
    /// All nodes owned by the tree, indexed by [`NodeId`].
    nodes: Vec<Node>,
    /// Arena index of the root, `None` for an empty tree.
    root: Option<NodeId>,
    /// Dimensionality of the points this tree indexes.
    dimension: usize,
}

impl KdTree {
    /// Creates a new, empty KD-tree for points of the given dimension.
    #[must_use]
    pub const fn new(dimension: usize) -> Self {
        Self { nodes: Vec::new(), root: None, dimension }
    }

    /// Dimensionality of the points this tree indexes.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of points in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Arena index of the root, `None` for an empty tree.
    #[must_use]
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Borrows a node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Borrows the point held by a node.
    #[must_use]
    pub fn point(&self, id: NodeId) -> Option<&Point> {
        self.nodes.get(id).map(Node::point)
    }

    /// All nodes owned by the tree, in id order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Height of the tree, 0 when empty.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.root.map_or(0, |root| self.nodes[root].height)
    }

    /// Balance of the root, 0 when empty. Descriptive only.
    #[must_use]
    pub fn balance(&self) -> i32 {
        self.root.map_or(0, |root| self.nodes[root].balance)
    }

    /// Builds a balanced tree from a snapshot of points, discarding any
    /// prior tree. Node ids equal each point's position in `points`.
    ///
    /// An empty snapshot yields an empty tree; subsequent queries report
    /// [`KdTreeError::EmptyTreeQuery`].
    ///
    /// # Errors
    /// Returns `KdTreeError::DimensionMismatch` if the tree's dimension
    /// is zero or any point disagrees with it. The existing tree is left
    /// untouched on error.
    pub fn build(&mut self, points: Vec<Point>) -> Result<(), KdTreeError> {
        if self.dimension == 0 {
            return Err(KdTreeError::DimensionMismatch { expected: 1, actual: 0 });
        }
        for point in &points {
            if point.dimension() != self.dimension {
                return Err(KdTreeError::DimensionMismatch {
                    expected: self.dimension,
                    actual: point.dimension(),
                });
            }
        }

        self.root = None;
        self.nodes = points
            .into_iter()
            .enumerate()
            .map(|(id, point)| Node::new(point, id))
            .collect();
        if self.nodes.is_empty() {
            return Ok(());
        }

        let ids: Vec<NodeId> = (0..self.nodes.len()).collect();
        let median_rank = (ids.len() - 1) / 2;
        let (lower, median, higher) = select::select(&self.nodes, &ids, median_rank, 0)?;
        self.nodes[median].cut_dimension = 0;
        self.root = Some(median);
        self.build_subtree(median, lower, higher, 1 % self.dimension)
    }

    /// Finds the nearest point to `query`, returning the node id (equal
    /// to the point's position in the build input) and the Euclidean
    /// distance. Ties may resolve to any point achieving the minimum.
    ///
    /// # Errors
    /// Returns `KdTreeError::EmptyTreeQuery` if no tree has been built,
    /// or `KdTreeError::DimensionMismatch` if the query length disagrees
    /// with the tree's dimension.
    pub fn find_nearest(&self, query: &[f64]) -> Result<(NodeId, f64), KdTreeError> {
        search::find_nearest(self, query)
    }

    /// Attaches the medians of `lower` and `higher` as children of
    /// `parent`, recursing with the cut dimension rotated one axis per
    /// level. An empty side leaves that child absent.
    fn build_subtree(
        &mut self,
        parent: NodeId,
        lower: Vec<NodeId>,
        higher: Vec<NodeId>,
        dim: usize,
    ) -> Result<(), KdTreeError> {
        let next_dim = (dim + 1) % self.dimension;

        if !lower.is_empty() {
            let median_rank = (lower.len() - 1) / 2;
            let (rec_lower, median, rec_higher) =
                select::select(&self.nodes, &lower, median_rank, dim)?;
            self.nodes[median].cut_dimension = dim;
            self.set_child(parent, Side::Low, median);
            self.build_subtree(median, rec_lower, rec_higher, next_dim)?;
        }

        if !higher.is_empty() {
            let median_rank = (higher.len() - 1) / 2;
            let (rec_lower, median, rec_higher) =
                select::select(&self.nodes, &higher, median_rank, dim)?;
            self.nodes[median].cut_dimension = dim;
            self.set_child(parent, Side::High, median);
            self.build_subtree(median, rec_lower, rec_higher, next_dim)?;
        }

        Ok(())
    }

    /// Installs `child` under `parent` on the given side, wiring the
    /// parent back-reference and refreshing height/balance bookkeeping
    /// up the ancestor chain.
    fn set_child(&mut self, parent: NodeId, side: Side, child: NodeId) {
        match side {
            Side::Low => self.nodes[parent].low = Some(child),
            Side::High => self.nodes[parent].high = Some(child),
        }
        self.nodes[child].parent = Some(parent);
        self.nodes[child].parent_side = Some(side);
        self.calc_balance(parent);
    }

    /// Recomputes height and balance at `start` from its children and
    /// walks upward while either value changed. An incremental fix-up,
    /// not a structural rebalance — it never rotates.
    fn calc_balance(&mut self, start: NodeId) {
        let mut current = Some(start);
        while let Some(id) = current {
            let low_height = self.nodes[id].low.map_or(0, |child| self.nodes[child].height);
            let high_height = self.nodes[id].high.map_or(0, |child| self.nodes[child].height);
            let height = low_height.max(high_height) + 1;
            let balance = high_height as i32 - low_height as i32;

            let node = &mut self.nodes[id];
            if node.height == height && node.balance == balance {
                break;
            }
            node.height = height;
            node.balance = balance;
            current = node.parent;
        }
    }
}
