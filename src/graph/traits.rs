//! The graph capability contract.
//!
//! Every algorithm in [`crate::algorithms`] is written against the [`Graph`]
//! trait, never against a concrete storage type. Swapping [`DenseGraph`] for
//! [`SparseGraph`] therefore never changes a result, only its cost profile.
//!
//! # Design Principles
//!
//! ## Object Safety
//!
//! Adjacency queries return owned `Vec<Edge>` rather than `impl Iterator`, so
//! the trait stays object safe and callers can hold a `Box<dyn Graph>` built
//! from a runtime [`GraphConfig`](crate::GraphConfig).
//!
//! ## Deterministic Order
//!
//! Both [`Graph::edges`] and [`Graph::adjacent_edges`] report edges in
//! ascending id order. Algorithm output, including tie-breaking, depends only on
//! the sequence of `connect` calls.
//!
//! [`DenseGraph`]: crate::DenseGraph
//! [`SparseGraph`]: crate::SparseGraph

use crate::{
    graph::{Edge, Vertex, VertexId, VertexIndex, DEFAULT_UNWEIGHTED_VALUE},
    Error, Result,
};

/// Capability contract shared by all graph storage backings.
///
/// # Required Methods
///
/// - [`is_directed`](Graph::is_directed) / [`is_weighted`](Graph::is_weighted) - Fixed at construction
/// - [`connect`](Graph::connect) - Inserts or overwrites an edge
/// - [`get_edge`](Graph::get_edge) - Point lookup by id pair
/// - [`edges`](Graph::edges) / [`adjacent_edges`](Graph::adjacent_edges) - Edge enumeration
/// - [`vertex_index`](Graph::vertex_index) - Name/id authority
/// - [`edge_count`](Graph::edge_count) / [`clear`](Graph::clear)
///
/// # Examples
///
/// ```rust
/// use graphscope::{Graph, SparseGraph};
///
/// fn out_degree(graph: &dyn Graph, name: &str) -> usize {
///     graph
///         .vertex(name)
///         .map_or(0, |v| graph.adjacent_edges(v.id()).len())
/// }
///
/// let mut graph = SparseGraph::new(true, false);
/// graph.link("A", "B")?;
/// graph.link("A", "C")?;
///
/// assert_eq!(out_degree(&graph, "A"), 2);
/// assert_eq!(out_degree(&graph, "Z"), 0);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub trait Graph {
    /// Returns `true` if edges are one-way.
    fn is_directed(&self) -> bool;

    /// Returns `true` if algorithms should honour stored weights.
    fn is_weighted(&self) -> bool;

    /// Connects `from` to `to` with the given weight.
    ///
    /// Vertices are created on demand. Connecting a vertex to itself is a
    /// silent no-op. Reconnecting an existing pair overwrites its weight and
    /// leaves [`edge_count`](Graph::edge_count) unchanged. On undirected
    /// graphs the mirror edge `to -> from` is written as well.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertexName`] if either name is empty or
    /// whitespace only.
    fn connect(&mut self, from: &str, to: &str, weight: f64) -> Result<()>;

    /// Returns the edge stored for the ordered pair `(from, to)`.
    ///
    /// `None` if either id is out of range, the ids are equal, or no edge is
    /// stored.
    fn get_edge(&self, from: VertexId, to: VertexId) -> Option<Edge>;

    /// Returns every stored edge in ascending `(from, to)` id order.
    fn edges(&self) -> Vec<Edge>;

    /// Returns the outgoing edges of `vertex` in ascending destination id order.
    ///
    /// Empty for an out-of-range id.
    fn adjacent_edges(&self, vertex: VertexId) -> Vec<Edge>;

    /// Returns the vertex index owned by this graph.
    fn vertex_index(&self) -> &VertexIndex;

    /// Returns the number of stored directed edge entries.
    ///
    /// An undirected connection contributes two entries.
    fn edge_count(&self) -> usize;

    /// Removes every vertex and edge. Vertex ids restart at 0.
    fn clear(&mut self);

    /// Connects `from` to `to` with [`DEFAULT_UNWEIGHTED_VALUE`].
    ///
    /// # Errors
    ///
    /// Same as [`connect`](Graph::connect).
    fn link(&mut self, from: &str, to: &str) -> Result<()> {
        self.connect(from, to, DEFAULT_UNWEIGHTED_VALUE)
    }

    /// Returns all vertices in ascending id order.
    fn vertices(&self) -> &[Vertex] {
        self.vertex_index().vertices()
    }

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertex_index().len()
    }

    /// Returns `true` if the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.vertex_index().is_empty()
    }

    /// Looks up a vertex by name.
    fn vertex(&self, name: &str) -> Option<&Vertex> {
        self.vertex_index().vertex(name)
    }
}

/// Validates a vertex name passed to `connect`.
pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidVertexName);
    }
    Ok(())
}
