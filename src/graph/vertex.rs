//! Vertex identity types.
//!
//! This module provides [`VertexId`], a strongly-typed dense identifier, and
//! [`Vertex`], the immutable `{name, id}` pair every graph hands out. The
//! newtype keeps vertex indices from being confused with other integers such as
//! component counts or path positions.

use std::{fmt, sync::Arc};

/// A strongly-typed identifier for vertices within a graph.
///
/// `VertexId` wraps a `usize` index. Ids are assigned sequentially starting
/// from 0 by [`VertexIndex::create_vertex`](crate::graph::VertexIndex::create_vertex)
/// and restart at 0 after a graph is cleared. Algorithms use them to index
/// per-vertex arrays in O(1).
///
/// # Examples
///
/// ```rust
/// use graphscope::VertexId;
///
/// let id = VertexId::new(3);
/// assert_eq!(id.index(), 3);
/// assert_eq!(format!("{id}"), "v3");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw index value.
    ///
    /// Normal usage obtains ids from a graph's vertex index; this constructor is
    /// mostly useful for lookups such as [`Graph::get_edge`](crate::Graph::get_edge).
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw 0-based index of this identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(id: VertexId) -> Self {
        id.0
    }
}

/// An immutable vertex: a name plus the dense id it was assigned.
///
/// Identity is by name: within one graph two vertices with the same name are
/// the same vertex and carry the same id. The name is shared through an
/// [`Arc<str>`], so cloning a `Vertex` (which every [`Edge`](crate::Edge) does)
/// never copies the string.
///
/// # Examples
///
/// ```rust
/// use graphscope::{Graph, SparseGraph};
///
/// let mut graph = SparseGraph::new(false, false);
/// graph.link("A", "B")?;
///
/// let b = graph.vertex("B").unwrap();
/// assert_eq!(b.name(), "B");
/// assert_eq!(b.id().index(), 1);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Vertex {
    name: Arc<str>,
    id: VertexId,
}

impl Vertex {
    pub(crate) fn new(name: Arc<str>, id: VertexId) -> Self {
        Vertex { name, id }
    }

    /// Returns the vertex name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the dense id of the vertex.
    #[must_use]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the raw index of the vertex id.
    ///
    /// Shorthand for `vertex.id().index()`; this is the key extractor the
    /// union-find structures are built with.
    #[must_use]
    pub fn index(&self) -> usize {
        self.id.0
    }
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V(id={}, name='{}')", self.id.0, self.name)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
