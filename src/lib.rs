// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # graphscope
//!
//! An in-memory graph engine: a vertex/edge data model with two interchangeable
//! storage backings and a set of classic algorithms written once against a
//! single graph trait.
//!
//! ## Features
//!
//! - **Two storage backings** - [`DenseGraph`] (adjacency matrix) and [`SparseGraph`]
//!   (ordered adjacency lists), identical in behaviour
//! - **Runtime selection** - [`GraphConfig::build`] returns a `Box<dyn Graph>`
//! - **Traversal** - DFS and BFS with visitor callbacks, stack-safe on deep graphs
//! - **Connectivity** - Connected components via union-find, cycle enumeration
//! - **Paths and trees** - Dijkstra with early stop, lazy Prim and Kruskal
//! - **Ordering** - Kahn's topological sort with depth ranks
//! - **Presentation** - Text renderings of graphs and results, Graphviz export
//!
//! ## Quick Start
//!
//! ```rust
//! use graphscope::prelude::*;
//!
//! let mut graph = SparseGraph::new(true, true);
//! graph.connect("A", "B", 3.0)?;
//! graph.connect("A", "C", 1.0)?;
//! graph.connect("C", "B", 1.0)?;
//!
//! let paths = Dijkstra::new(&graph)?.compute("A", None)?;
//! assert_eq!(paths.distance("B"), Some(2.0));
//! # Ok::<(), graphscope::Error>(())
//! ```
//!
//! ### Loading Edge Lists
//!
//! ```rust
//! use graphscope::{graph::load_edge_list, algorithms::Mst, GraphConfig};
//!
//! let text = "
//!     A B 4
//!     B C 1
//!     A C 2
//! ";
//! let graph = load_edge_list(text, GraphConfig::weighted())?;
//! let tree = Mst::new(graph.as_ref())?.kruskal();
//! assert_eq!(tree.total_weight(), 3.0);
//! # Ok::<(), graphscope::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Algorithms check their preconditions when they are constructed and return
//! [`Error`] before any work is done. Queries on finished results never fail;
//! they answer with `None`, an empty list or `false`.
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events at `debug` and
//! `trace` level (edge overwrites, algorithm completion, cycle discoveries,
//! early termination). Install any subscriber to see them.

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use graphscope::prelude::*;
///
/// let mut graph = DenseGraph::new(false, false);
/// graph.link("A", "B")?;
/// assert_eq!(Components::new(&graph)?.compute().component_count(), 1);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub mod prelude;

/// Graph construction options.
pub mod config;

/// Graph data model, storage backings and algorithms.
pub mod graph;

/// Supporting utilities: union-find and Graphviz export.
pub mod utils;

pub use graph::algorithms;

/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use graphscope::{Graph, Result, SparseGraph};
///
/// fn triangle() -> Result<SparseGraph> {
///     let mut graph = SparseGraph::new(false, false);
///     graph.link("A", "B")?;
///     graph.link("B", "C")?;
///     graph.link("C", "A")?;
///     Ok(graph)
/// }
/// assert_eq!(triangle()?.vertex_count(), 3);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `graphscope` Error type
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::Mst, Error, Graph, SparseGraph};
///
/// let mut graph = SparseGraph::new(false, true);
/// graph.connect("A", "B", 1.0)?;
/// graph.connect("C", "D", 1.0)?;
///
/// match Mst::new(&graph) {
///     Err(Error::Disconnected { components }) => assert_eq!(components, 2),
///     other => panic!("unexpected: {other:?}"),
/// }
/// # Ok::<(), graphscope::Error>(())
/// ```
pub use error::Error;

pub use config::{GraphConfig, GraphFlags, StorageKind};
pub use graph::{
    DenseGraph, Edge, Graph, SparseGraph, Vertex, VertexId, VertexIndex, DEFAULT_UNWEIGHTED_VALUE,
};
