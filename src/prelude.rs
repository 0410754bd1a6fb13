//! # graphscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the graphscope library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphscope operations
pub use crate::Error;

/// The result type used throughout graphscope
pub use crate::Result;

/// Construction options
pub use crate::{GraphConfig, GraphFlags, StorageKind};

// ================================================================================================
// Graph Model
// ================================================================================================

/// The graph capability contract and its storage backings
pub use crate::{DenseGraph, Graph, SparseGraph};

/// Vertex and edge types
pub use crate::{Edge, Vertex, VertexId, VertexIndex, DEFAULT_UNWEIGHTED_VALUE};

/// Edge-list loading
pub use crate::graph::{load_edge_list, parse_edge_list};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Algorithm entry points
pub use crate::algorithms::{Components, CycleAnalyzer, Dijkstra, Mst, TopoSort, Traverse};

/// Algorithm results
pub use crate::algorithms::{
    ComponentsResult, CycleResult, MstResult, RankedVertex, ShortestPaths, TopoOrder,
};

/// Graphviz export
pub use crate::utils::to_dot;
