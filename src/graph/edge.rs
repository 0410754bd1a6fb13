//! Edge records.
//!
//! An [`Edge`] is a value object: it carries its endpoints and weight but has
//! no identity of its own. Graphs store at most one edge per ordered
//! `(from, to)` pair, so two edges are interchangeable whenever their
//! endpoints and weight match.

use std::fmt;

use crate::graph::Vertex;

/// Weight used for unweighted graphs and for edges connected without one.
///
/// Unweighted computations substitute this value for whatever weight is
/// stored on an edge.
pub const DEFAULT_UNWEIGHTED_VALUE: f64 = 1.0;

/// A directed edge between two vertices.
///
/// Undirected graphs store each connection as two mirrored `Edge` records with
/// the same weight, so [`Graph::adjacent_edges`](crate::Graph::adjacent_edges)
/// always reports edges leaving the queried vertex.
///
/// # Examples
///
/// ```rust
/// use graphscope::{Graph, DenseGraph};
///
/// let mut graph = DenseGraph::new(false, true);
/// graph.connect("A", "B", 2.5)?;
///
/// let edge = graph.adjacent_edges(graph.vertex("B").unwrap().id()).remove(0);
/// assert_eq!(edge.from().name(), "B");
/// assert_eq!(edge.to().name(), "A");
/// assert_eq!(edge.weight(), 2.5);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Clone, PartialEq)]
pub struct Edge {
    from: Vertex,
    to: Vertex,
    weight: f64,
}

impl Edge {
    pub(crate) fn new(from: Vertex, to: Vertex, weight: f64) -> Self {
        Edge { from, to, weight }
    }

    /// Returns the source vertex.
    #[must_use]
    pub fn from(&self) -> &Vertex {
        &self.from
    }

    /// Returns the target vertex.
    #[must_use]
    pub fn to(&self) -> &Vertex {
        &self.to
    }

    /// Returns the stored weight.
    ///
    /// For unweighted graphs this is whatever the caller passed to `connect`;
    /// algorithms use [`Edge::cost`] instead.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the weight an algorithm should charge for this edge.
    ///
    /// This is the stored weight on weighted graphs and
    /// [`DEFAULT_UNWEIGHTED_VALUE`] otherwise.
    #[must_use]
    pub fn cost(&self, weighted: bool) -> f64 {
        if weighted {
            self.weight
        } else {
            DEFAULT_UNWEIGHTED_VALUE
        }
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "E(from={}, to={}, weight={})",
            self.from.name(),
            self.to.name(),
            self.weight
        )
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} --{}-> {}",
            self.from.name(),
            self.weight,
            self.to.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::VertexId;
    use std::sync::Arc;

    fn edge(weight: f64) -> Edge {
        Edge::new(
            Vertex::new(Arc::from("A"), VertexId::new(0)),
            Vertex::new(Arc::from("B"), VertexId::new(1)),
            weight,
        )
    }

    #[test]
    fn test_edge_accessors() {
        let e = edge(3.5);
        assert_eq!(e.from().name(), "A");
        assert_eq!(e.to().name(), "B");
        assert_eq!(e.weight(), 3.5);
    }

    #[test]
    fn test_edge_cost_ignores_weight_when_unweighted() {
        let e = edge(7.0);
        assert_eq!(e.cost(true), 7.0);
        assert_eq!(e.cost(false), DEFAULT_UNWEIGHTED_VALUE);
    }

    #[test]
    fn test_edge_value_equality() {
        assert_eq!(edge(1.0), edge(1.0));
        assert_ne!(edge(1.0), edge(2.0));
    }

    #[test]
    fn test_edge_formatting() {
        assert_eq!(format!("{:?}", edge(2.0)), "E(from=A, to=B, weight=2)");
        assert_eq!(format!("{}", edge(2.0)), "A --2-> B");
    }
}
