// src/core/index/kdtree/node.rs

//! Arena-indexed KD-tree nodes.
//!
//! Nodes live in a flat arena owned by the tree. Child links are owning
//! arena indices; the parent link is a non-owning back-reference used by
//! the backtracking phase of the search. This keeps upward traversal
//! cheap without reference-counting cycles.

use crate::core::types::Point;

/// Index of a node in the tree's arena. Ids are assigned in input order
/// at build time and stay stable for the lifetime of the tree.
pub type NodeId = usize;

/// Which side of its parent a node hangs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Coordinate on the parent's cut dimension is ≤ the parent's.
    Low,
    /// Coordinate on the parent's cut dimension is > the parent's.
    High,
}

/// A tree vertex owning one point.
#[derive(Debug, Clone)]
pub struct Node {
    /// The point this node holds.
    pub(crate) point: Point,
    /// Stable id, equal to the point's position in the build input.
    pub(crate) id: NodeId,
    /// Non-owning back-reference to the parent, `None` for the root.
    pub(crate) parent: Option<NodeId>,
    /// Side of the parent this node hangs on, `None` for the root.
    pub(crate) parent_side: Option<Side>,
    /// Low child: subtree with coordinates ≤ this node's on `cut_dimension`.
    pub(crate) low: Option<NodeId>,
    /// High child: subtree with coordinates > this node's on `cut_dimension`.
    pub(crate) high: Option<NodeId>,
    /// Axis this node splits its descendants on.
    pub(crate) cut_dimension: usize,
    /// 1 + max height of existing children; 1 for a leaf.
    pub(crate) height: u32,
    /// height(high) − height(low), 0 for an absent child. Descriptive
    /// bookkeeping only; nothing rotates to restore it.
    pub(crate) balance: i32,
}

impl Node {
    /// Creates a detached leaf node around a point.
    pub(crate) fn new(point: Point, id: NodeId) -> Self {
        Self {
            point,
            id,
            parent: None,
            parent_side: None,
            low: None,
            high: None,
            cut_dimension: 0,
            height: 1,
            balance: 0,
        }
    }

    /// The point this node holds.
    #[must_use]
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Stable id of this node (position in the build input).
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Parent id, `None` for the root.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Which side of the parent this node hangs on, `None` for the root.
    #[must_use]
    pub const fn parent_side(&self) -> Option<Side> {
        self.parent_side
    }

    /// Low child id, if present.
    #[must_use]
    pub const fn low(&self) -> Option<NodeId> {
        self.low
    }

    /// High child id, if present.
    #[must_use]
    pub const fn high(&self) -> Option<NodeId> {
        self.high
    }

    /// Axis this node splits its descendants on.
    #[must_use]
    pub const fn cut_dimension(&self) -> usize {
        self.cut_dimension
    }

    /// Subtree height (1 for a leaf).
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Height difference between the high and low subtrees.
    #[must_use]
    pub const fn balance(&self) -> i32 {
        self.balance
    }

    /// Whether this node has at least one child.
    #[must_use]
    pub const fn has_children(&self) -> bool {
        self.low.is_some() || self.high.is_some()
    }

    /// Coordinate of this node's point on the given axis.
    pub(crate) fn coordinate(&self, dim: usize) -> f64 {
        self.point.coordinates()[dim]
    }
}
