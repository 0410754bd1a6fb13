//! Shared precondition gate for algorithms.
//!
//! Every algorithm validates its graph once, when it is constructed, through a
//! [`GraphChecker`]. Checks return `Result<&Self>` so they chain with `?`:
//!
//! ```rust
//! use graphscope::{graph::GraphChecker, Graph, SparseGraph};
//!
//! let mut graph = SparseGraph::new(false, true);
//! graph.connect("A", "B", 1.0)?;
//!
//! GraphChecker::new(&graph)
//!     .check_empty()?
//!     .check_directed(false)?
//!     .check_weighted(true)?;
//! # Ok::<(), graphscope::Error>(())
//! ```

use crate::{
    graph::{Graph, Vertex},
    Error, Result,
};

/// Precondition checks over a borrowed graph.
#[derive(Debug, Clone, Copy)]
pub struct GraphChecker<'g, G: ?Sized> {
    graph: &'g G,
}

impl<'g, G: Graph + ?Sized> GraphChecker<'g, G> {
    /// Creates a checker for `graph`.
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        GraphChecker { graph }
    }

    /// Returns the checked graph.
    #[must_use]
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Fails with [`Error::EmptyGraph`] if the graph has no vertices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGraph`] when the graph is empty.
    pub fn check_empty(&self) -> Result<&Self> {
        if self.graph.is_empty() {
            return Err(Error::EmptyGraph);
        }
        Ok(self)
    }

    /// Fails unless the graph's directedness equals `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectedMismatch`] on mismatch.
    pub fn check_directed(&self, expected: bool) -> Result<&Self> {
        if self.graph.is_directed() != expected {
            return Err(Error::DirectedMismatch { expected });
        }
        Ok(self)
    }

    /// Fails unless the graph's weightedness equals `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WeightedMismatch`] on mismatch.
    pub fn check_weighted(&self, expected: bool) -> Result<&Self> {
        if self.graph.is_weighted() != expected {
            return Err(Error::WeightedMismatch { expected });
        }
        Ok(self)
    }

    /// Resolves a vertex by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if the name is unknown and `required`
    /// is set, or [`Error::VertexNotFound`] if it is unknown and optional.
    pub fn check_vertex(&self, name: &str, required: bool) -> Result<&'g Vertex> {
        match self.graph.vertex(name) {
            Some(vertex) => Ok(vertex),
            None if required => Err(Error::UnknownVertex(name.to_string())),
            None => Err(Error::VertexNotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DenseGraph, SparseGraph};

    #[test]
    fn test_check_empty() {
        let graph = SparseGraph::new(true, false);
        let checker = GraphChecker::new(&graph);
        assert_eq!(checker.check_empty().err(), Some(Error::EmptyGraph));
    }

    #[test]
    fn test_check_chain() {
        let mut graph = DenseGraph::new(true, false);
        graph.link("A", "B").unwrap();
        let checker = GraphChecker::new(&graph);

        assert!(checker
            .check_empty()
            .and_then(|c| c.check_directed(true))
            .and_then(|c| c.check_weighted(false))
            .is_ok());
        assert_eq!(
            checker.check_directed(false).err(),
            Some(Error::DirectedMismatch { expected: false })
        );
        assert_eq!(
            checker.check_weighted(true).err(),
            Some(Error::WeightedMismatch { expected: true })
        );
    }

    #[test]
    fn test_check_vertex() {
        let mut graph = SparseGraph::new(false, false);
        graph.link("A", "B").unwrap();
        let checker = GraphChecker::new(&graph);

        assert_eq!(checker.check_vertex("B", true).unwrap().name(), "B");

        let required = checker.check_vertex("Z", true).unwrap_err();
        assert_eq!(required, Error::UnknownVertex("Z".to_string()));
        assert!(!required.is_not_found());

        let optional = checker.check_vertex("Z", false).unwrap_err();
        assert!(optional.is_not_found());
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut graph = SparseGraph::new(false, false);
        graph.link("A", "B").unwrap();
        let dynamic: &dyn Graph = &graph;
        assert!(GraphChecker::new(dynamic).check_empty().is_ok());
    }
}
