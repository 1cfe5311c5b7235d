// src/core/index/mod.rs

//! Spatial index implementations.
//!
//! Currently a single index is provided: a bulk-loaded KD-tree answering
//! exact nearest-neighbor queries. The index is rebuilt wholesale from a
//! snapshot of the point set; there is no incremental maintenance.

pub mod kdtree;
