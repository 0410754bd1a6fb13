//! Minimum spanning trees.

use std::{collections::BinaryHeap, fmt};

use tracing::debug;

use crate::{
    graph::{
        algorithms::{Components, HeapEntry},
        Edge, Graph, GraphChecker, Vertex,
    },
    utils::UnionFind,
    Error, Result,
};

/// Minimum spanning tree builder for connected, weighted, undirected graphs.
///
/// Both strategies pop edges from a min-heap ordered by weight, ties in
/// insertion order, and produce trees of equal total weight.
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::Mst, Graph, SparseGraph};
///
/// let mut graph = SparseGraph::new(false, true);
/// graph.connect("A", "B", 1.0)?;
/// graph.connect("B", "C", 2.0)?;
/// graph.connect("A", "C", 5.0)?;
///
/// let mst = Mst::new(&graph)?;
/// let prim = mst.lazy_prim();
/// let kruskal = mst.kruskal();
///
/// assert_eq!(prim.total_weight(), 3.0);
/// assert_eq!(kruskal.total_weight(), 3.0);
/// assert!(prim.is_spanning_tree(graph.vertex_count()));
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Mst<'g, G: ?Sized> {
    graph: &'g G,
}

impl<'g, G: Graph + ?Sized> Mst<'g, G> {
    /// Creates the builder.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyGraph`] if the graph has no vertices
    /// - [`Error::DirectedMismatch`] if the graph is directed
    /// - [`Error::WeightedMismatch`] if the graph is unweighted
    /// - [`Error::Disconnected`] if the graph has more than one component
    pub fn new(graph: &'g G) -> Result<Self> {
        GraphChecker::new(graph)
            .check_empty()?
            .check_directed(false)?
            .check_weighted(true)?;

        let components = Components::new(graph)?.compute().component_count();
        if components != 1 {
            return Err(Error::Disconnected { components });
        }
        Ok(Mst { graph })
    }

    /// Lazy Prim: grows the tree from vertex id 0, keeping every edge seen from
    /// the tree in one heap and discarding stale entries when popped.
    #[must_use]
    pub fn lazy_prim(&self) -> MstResult {
        let mut result = MstResult::default();
        let Some(start) = self.graph.vertices().first() else {
            return result;
        };

        let mut visited = vec![false; self.graph.vertex_count()];
        let mut seq = 0;
        let mut heap = BinaryHeap::new();

        visited[start.index()] = true;
        for edge in self.graph.adjacent_edges(start.id()) {
            let weight = edge.weight();
            heap.push(HeapEntry::new(edge, weight, &mut seq));
        }

        while let Some(HeapEntry { edge, .. }) = heap.pop() {
            let to = edge.to().clone();
            if visited[to.index()] {
                continue;
            }
            visited[to.index()] = true;
            result.push(edge);

            for next in self.graph.adjacent_edges(to.id()) {
                if !visited[next.to().index()] {
                    let weight = next.weight();
                    heap.push(HeapEntry::new(next, weight, &mut seq));
                }
            }
        }

        debug!(
            edges = result.edge_count(),
            total = result.total_weight,
            "lazy prim finished"
        );
        result
    }

    /// Kruskal: takes edges in ascending weight and keeps each one whose
    /// endpoints are not yet connected.
    #[must_use]
    pub fn kruskal(&self) -> MstResult {
        let mut result = MstResult::default();
        let mut sets = UnionFind::new(Vertex::index as fn(&Vertex) -> usize);
        let target = self.graph.vertex_count().saturating_sub(1);

        let mut seq = 0;
        let mut heap: BinaryHeap<HeapEntry> = self
            .graph
            .edges()
            .into_iter()
            .map(|edge| {
                let weight = edge.weight();
                HeapEntry::new(edge, weight, &mut seq)
            })
            .collect();

        while let Some(HeapEntry { edge, .. }) = heap.pop() {
            if result.edge_count() == target {
                break;
            }
            sets.add(edge.from());
            sets.add(edge.to());
            if sets.union(edge.from(), edge.to()) {
                result.push(edge);
            }
        }

        debug!(
            edges = result.edge_count(),
            total = result.total_weight,
            "kruskal finished"
        );
        result
    }
}

/// A spanning tree produced by [`Mst`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MstResult {
    edges: Vec<Edge>,
    total_weight: f64,
}

impl MstResult {
    fn push(&mut self, edge: Edge) {
        self.total_weight += edge.weight();
        self.edges.push(edge);
    }

    /// Returns the tree edges in acceptance order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the sum of the tree edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Returns the number of tree edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the tree edge weights in acceptance order.
    #[must_use]
    pub fn weights(&self) -> Vec<f64> {
        self.edges.iter().map(Edge::weight).collect()
    }

    /// Returns `true` if the tree has exactly `vertex_count - 1` edges.
    #[must_use]
    pub fn is_spanning_tree(&self, vertex_count: usize) -> bool {
        self.edges.len() + 1 == vertex_count
    }
}

impl fmt::Display for MstResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Minimum Spanning Tree ===")?;
        writeln!(f, "Total Weight: {}", self.total_weight)?;
        writeln!(f, "Edge Count  : {}", self.edges.len())?;
        writeln!(f, "Edges:")?;
        for (i, edge) in self.edges.iter().enumerate() {
            writeln!(
                f,
                "  {}. {} -> {}, weight: {}",
                i + 1,
                edge.from().name(),
                edge.to().name(),
                edge.weight()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DenseGraph, SparseGraph};

    fn create_mst_graph() -> DenseGraph {
        let mut graph = DenseGraph::new(false, true);
        for (from, to, weight) in [
            ("0", "1", 4.0),
            ("0", "5", 8.0),
            ("1", "5", 11.0),
            ("1", "2", 8.0),
            ("5", "6", 7.0),
            ("2", "6", 2.0),
            ("5", "4", 8.0),
            ("4", "6", 4.0),
            ("2", "3", 3.0),
            ("4", "3", 3.0),
        ] {
            graph.connect(from, to, weight).unwrap();
        }
        graph
    }

    #[test]
    fn test_preconditions() {
        let mut directed = SparseGraph::new(true, true);
        directed.connect("A", "B", 1.0).unwrap();
        assert_eq!(
            Mst::new(&directed).err(),
            Some(Error::DirectedMismatch { expected: false })
        );

        let mut unweighted = SparseGraph::new(false, false);
        unweighted.link("A", "B").unwrap();
        assert_eq!(
            Mst::new(&unweighted).err(),
            Some(Error::WeightedMismatch { expected: true })
        );

        let mut split = SparseGraph::new(false, true);
        split.connect("A", "B", 1.0).unwrap();
        split.connect("C", "D", 1.0).unwrap();
        assert_eq!(
            Mst::new(&split).err(),
            Some(Error::Disconnected { components: 2 })
        );
    }

    #[test]
    fn test_lazy_prim() {
        let graph = create_mst_graph();
        let result = Mst::new(&graph).unwrap().lazy_prim();

        assert_eq!(result.total_weight(), 27.0);
        assert_eq!(result.edge_count(), 6);
        assert!(result.is_spanning_tree(graph.vertex_count()));
        assert_eq!(result.edges()[0].from().name(), "0");
    }

    #[test]
    fn test_kruskal() {
        let graph = create_mst_graph();
        let result = Mst::new(&graph).unwrap().kruskal();

        assert_eq!(result.total_weight(), 27.0);
        assert!(result.is_spanning_tree(graph.vertex_count()));
        assert_eq!(result.weights(), vec![2.0, 3.0, 3.0, 4.0, 7.0, 8.0]);
    }

    #[test]
    fn test_strategies_agree() {
        let graph = create_mst_graph();
        let mst = Mst::new(&graph).unwrap();
        let mut prim = mst.lazy_prim().weights();
        let mut kruskal = mst.kruskal().weights();
        prim.sort_by(f64::total_cmp);
        kruskal.sort_by(f64::total_cmp);
        assert_eq!(prim, kruskal);
    }

    #[test]
    fn test_display() {
        let mut graph = SparseGraph::new(false, true);
        graph.connect("A", "B", 1.5).unwrap();
        let text = Mst::new(&graph).unwrap().kruskal().to_string();

        assert_eq!(
            text,
            "=== Minimum Spanning Tree ===\nTotal Weight: 1.5\nEdge Count  : 1\nEdges:\n  1. A -> B, weight: 1.5\n"
        );
    }
}
