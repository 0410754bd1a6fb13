//! Graph data model and storage.
//!
//! This module provides the vertex and edge types, the name-to-id
//! [`VertexIndex`], the object-safe [`Graph`] trait, and its two storage
//! backings.
//!
//! # Architecture
//!
//! - [`VertexId`] / [`Vertex`] - Dense identifiers and the immutable `{name, id}` pair
//! - [`Edge`] - Endpoints plus weight, one per ordered vertex pair
//! - [`VertexIndex`] - Identity authority mapping names to ids and back
//! - [`Graph`] - Capability contract every algorithm is written against
//! - [`DenseGraph`] - Adjacency matrix
//! - [`SparseGraph`] - Ordered adjacency lists
//! - [`GraphChecker`] - Precondition gate shared by the algorithms
//! - [`algorithms`] - Traversal, components, cycles, shortest paths, MST, toposort
//!
//! # Choosing a Storage
//!
//! | Operation | Dense | Sparse |
//! |-----------|-------|--------|
//! | Space | O(V²) | O(V + E) |
//! | `get_edge` | O(1) | O(log d) |
//! | `adjacent_edges` | O(V) | O(d) |
//!
//! Both backings produce identical edge sets, in identical order, for the same
//! sequence of `connect` calls, so algorithm results never depend on the choice.
//!
//! # Examples
//!
//! ```rust
//! use graphscope::{Graph, DenseGraph, SparseGraph};
//!
//! let mut dense = DenseGraph::new(true, true);
//! let mut sparse = SparseGraph::new(true, true);
//! for graph in [&mut dense as &mut dyn Graph, &mut sparse] {
//!     graph.connect("A", "B", 1.0)?;
//!     graph.connect("B", "C", 2.0)?;
//! }
//!
//! assert_eq!(dense.edges(), sparse.edges());
//! # Ok::<(), graphscope::Error>(())
//! ```

pub mod algorithms;

mod checker;
mod dense;
mod edge;
mod index;
mod loader;
mod sparse;
mod traits;
mod vertex;

pub use checker::GraphChecker;
pub use dense::{DenseGraph, DEFAULT_DENSE_CAPACITY};
pub use edge::{Edge, DEFAULT_UNWEIGHTED_VALUE};
pub use index::VertexIndex;
pub use loader::{load_edge_list, parse_edge_list, populate, EdgeSpec};
pub use sparse::SparseGraph;
pub use traits::Graph;
pub use vertex::{Vertex, VertexId};
