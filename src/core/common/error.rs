use std::fmt;

use crate::core::index::kdtree::KdTreeError;

/// Crate-level error type surfaced by the public API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProximaError {
    /// A point or query coordinate disagrees with the configured dimension.
    DimensionMismatch { expected: usize, actual: usize },
    /// A query was issued before any tree was built.
    EmptyTreeQuery,
    /// An internal invariant was violated; the operation was aborted.
    Internal(String),
    /// The caller supplied data the registry cannot accept, such as a
    /// point with non-finite coordinates.
    InvalidInput { message: String },
}

impl fmt::Display for ProximaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, actual {}", expected, actual)
            }
            Self::EmptyTreeQuery => write!(f, "Query issued against an empty tree"),
            Self::Internal(s) => write!(f, "Internal Error: {}", s),
            Self::InvalidInput { message } => write!(f, "Invalid input: {}", message),
        }
    }
}

impl std::error::Error for ProximaError {}

impl From<KdTreeError> for ProximaError {
    fn from(err: KdTreeError) -> Self {
        match err {
            KdTreeError::DimensionMismatch { expected, actual } => {
                Self::DimensionMismatch { expected, actual }
            }
            KdTreeError::EmptyTreeQuery => Self::EmptyTreeQuery,
            KdTreeError::MalformedSelection(msg) => Self::Internal(msg),
        }
    }
}
