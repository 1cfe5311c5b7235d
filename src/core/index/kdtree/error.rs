// src/core/index/kdtree/error.rs

use std::fmt;

/// Custom error types for KD-tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KdTreeError {
    /// A point or query coordinate disagrees with the tree's dimension.
    DimensionMismatch { expected: usize, actual: usize },
    /// A query was issued before any tree was built.
    EmptyTreeQuery,
    /// The selector received an out-of-range rank. Unreachable given
    /// correct callers; surfaced instead of returning a wrong answer.
    MalformedSelection(String),
}

impl fmt::Display for KdTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "KD-Tree Dimension Mismatch: expected {}, actual {}", expected, actual)
            }
            Self::EmptyTreeQuery => write!(f, "KD-Tree Empty Tree: no tree has been built"),
            Self::MalformedSelection(msg) => write!(f, "KD-Tree Malformed Selection: {}", msg),
        }
    }
}

impl std::error::Error for KdTreeError {}
