//! Topological ordering of directed acyclic graphs.
//!
//! Kahn's algorithm: vertices with no incoming edges are emitted first, and
//! removing a vertex may release its successors. Each emitted vertex carries a
//! *depth*: 0 for the initial sources, one more than the vertex that released
//! it otherwise.

use std::{collections::VecDeque, fmt};

use tracing::debug;

use crate::{
    graph::{algorithms::CycleAnalyzer, Graph, GraphChecker, Vertex},
    Error, Result,
};

/// Topological sorter.
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::TopoSort, Graph, DenseGraph};
///
/// let mut graph = DenseGraph::new(true, false);
/// graph.link("wake", "coffee")?;
/// graph.link("wake", "shower")?;
/// graph.link("coffee", "work")?;
/// graph.link("shower", "work")?;
///
/// let order = TopoSort::new(&graph)?.kahn();
/// assert_eq!(order.to_string(), "wake(0) -> coffee(1) -> shower(1) -> work(2)");
/// assert!(order.position("coffee") < order.position("work"));
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TopoSort<'g, G: ?Sized> {
    graph: &'g G,
}

impl<'g, G: Graph + ?Sized> TopoSort<'g, G> {
    /// Creates the sorter.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyGraph`] if the graph has no vertices
    /// - [`Error::DirectedMismatch`] if the graph is undirected
    /// - [`Error::CyclicGraph`] if the graph contains a cycle
    pub fn new(graph: &'g G) -> Result<Self> {
        GraphChecker::new(graph)
            .check_empty()?
            .check_directed(true)?;

        if CycleAnalyzer::new(graph)?.has_cycle() {
            return Err(Error::CyclicGraph);
        }
        Ok(TopoSort { graph })
    }

    /// Runs Kahn's algorithm.
    #[must_use]
    pub fn kahn(&self) -> TopoOrder {
        let n = self.graph.vertex_count();
        let mut in_degree = vec![0usize; n];
        for edge in self.graph.edges() {
            in_degree[edge.to().index()] += 1;
        }

        let mut queue: VecDeque<RankedVertex> = self
            .graph
            .vertices()
            .iter()
            .filter(|v| in_degree[v.index()] == 0)
            .map(|v| RankedVertex {
                depth: 0,
                vertex: v.clone(),
            })
            .collect();

        let mut processed = vec![false; n];
        let mut sorted = Vec::with_capacity(n);
        while let Some(current) = queue.pop_front() {
            processed[current.vertex.index()] = true;

            for edge in self.graph.adjacent_edges(current.vertex.id()) {
                let next = edge.to();
                if processed[next.index()] {
                    continue;
                }
                let degree = &mut in_degree[next.index()];
                *degree = degree.saturating_sub(1);
                if *degree == 0 {
                    queue.push_back(RankedVertex {
                        depth: current.depth + 1,
                        vertex: next.clone(),
                    });
                }
            }
            sorted.push(current);
        }

        debug!(vertices = sorted.len(), "topological sort finished");
        TopoOrder { sorted }
    }
}

/// A vertex with its Kahn depth.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedVertex {
    /// Number of release steps from an initial source
    pub depth: usize,
    /// The vertex
    pub vertex: Vertex,
}

impl fmt::Display for RankedVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.vertex.name(), self.depth)
    }
}

/// A topological order produced by [`TopoSort::kahn`].
#[derive(Debug, Clone, PartialEq)]
pub struct TopoOrder {
    sorted: Vec<RankedVertex>,
}

impl TopoOrder {
    /// Returns the ranked vertices in emission order.
    #[must_use]
    pub fn sorted(&self) -> &[RankedVertex] {
        &self.sorted
    }

    /// Returns `true` if the order covers `total_vertices` vertices.
    #[must_use]
    pub fn is_valid(&self, total_vertices: usize) -> bool {
        self.sorted.len() == total_vertices
    }

    /// Returns the vertex names in order.
    #[must_use]
    pub fn vertex_names(&self) -> Vec<&str> {
        self.sorted.iter().map(|r| r.vertex.name()).collect()
    }

    /// Returns the position of `name` in the order, if present.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.sorted.iter().position(|r| r.vertex.name() == name)
    }
}

impl fmt::Display for TopoOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sorted.is_empty() {
            return f.write_str("No vertices in the graph");
        }
        for (i, ranked) in self.sorted.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{ranked}")?;
        }
        Ok(())
    }
}
