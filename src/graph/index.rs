//! Name-to-id vertex index.
//!
//! [`VertexIndex`] is the identity authority of a graph. It maps vertex names
//! to dense [`VertexId`]s and back, in the same spirit as a key-indexed graph
//! wrapper: domain keys (here, names) on the outside, contiguous indices on the
//! inside so algorithms can use plain vectors for per-vertex state.

use std::{collections::HashMap, sync::Arc};

use crate::graph::{Vertex, VertexId};

/// Bidirectional mapping between vertex names and dense ids.
///
/// # Invariants
///
/// - Ids form the contiguous range `[0, len)`, in creation order.
/// - A name maps to exactly one vertex for the lifetime of the index.
/// - The index only shrinks through [`clear`](Self::clear), after which ids
///   restart at 0.
///
/// # Examples
///
/// ```rust
/// use graphscope::graph::VertexIndex;
///
/// let mut index = VertexIndex::new();
/// let a = index.create_vertex("A");
/// let b = index.create_vertex("B");
/// let a_again = index.create_vertex("A");
///
/// assert_eq!(a, a_again);
/// assert_eq!(b.id().index(), 1);
/// assert_eq!(index.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VertexIndex {
    /// Vertices in id order
    vertices: Vec<Vertex>,
    /// Map from name to id
    by_name: HashMap<Arc<str>, VertexId>,
}

impl VertexIndex {
    /// Creates a new empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the existing vertex for `name`, or allocates the next id for it.
    ///
    /// This method is idempotent: repeated calls with the same name return the
    /// same vertex.
    pub fn create_vertex(&mut self, name: &str) -> Vertex {
        if let Some(&id) = self.by_name.get(name) {
            return self.vertices[id.index()].clone();
        }

        let id = VertexId::new(self.vertices.len());
        let name: Arc<str> = Arc::from(name);
        let vertex = Vertex::new(name.clone(), id);
        self.vertices.push(vertex.clone());
        self.by_name.insert(name, id);
        vertex
    }

    /// Returns the vertex with the given name, if indexed.
    #[must_use]
    pub fn vertex(&self, name: &str) -> Option<&Vertex> {
        self.by_name
            .get(name)
            .map(|id| &self.vertices[id.index()])
    }

    /// Returns the vertex with the given id, if in range.
    #[must_use]
    pub fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// Returns the id assigned to `name`, if indexed.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<VertexId> {
        self.by_name.get(name).copied()
    }

    /// Returns all vertices in ascending id order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the number of indexed vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if no vertex has been indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if `id` lies inside `[0, len)`.
    #[must_use]
    pub fn contains_id(&self, id: VertexId) -> bool {
        id.index() < self.vertices.len()
    }

    /// Removes every vertex; the next created vertex gets id 0 again.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.by_name.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut index = VertexIndex::new();
        for (i, name) in ["A", "B", "C"].iter().enumerate() {
            assert_eq!(index.create_vertex(name).id(), VertexId::new(i));
        }
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_idempotent_create() {
        let mut index = VertexIndex::new();
        let first = index.create_vertex("A");
        let second = index.create_vertex("A");

        assert_eq!(first, second);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_lookup_both_directions() {
        let mut index = VertexIndex::new();
        index.create_vertex("A");
        let b = index.create_vertex("B");

        assert_eq!(index.vertex("B"), Some(&b));
        assert_eq!(index.vertex_by_id(VertexId::new(1)), Some(&b));
        assert_eq!(index.id_of("B"), Some(VertexId::new(1)));
        assert!(index.vertex("Z").is_none());
        assert!(index.vertex_by_id(VertexId::new(9)).is_none());
        assert!(index.contains_id(VertexId::new(1)));
        assert!(!index.contains_id(VertexId::new(2)));
    }

    #[test]
    fn test_clear_restarts_ids() {
        let mut index = VertexIndex::new();
        index.create_vertex("A");
        index.create_vertex("B");
        index.clear();

        assert!(index.is_empty());
        assert!(index.vertex("A").is_none());
        assert_eq!(index.create_vertex("C").id(), VertexId::new(0));
    }

    #[test]
    fn test_vertices_in_id_order() {
        let mut index = VertexIndex::new();
        index.create_vertex("X");
        index.create_vertex("Y");

        let names: Vec<&str> = index.vertices().iter().map(Vertex::name).collect();
        assert_eq!(names, vec!["X", "Y"]);
    }
}
