//! Adjacency-list graph storage.
//!
//! [`SparseGraph`] keeps one ordered map from destination id to weight per
//! vertex. Ordered maps give ascending-destination iteration for free, which is
//! what makes its output identical to [`DenseGraph`](crate::DenseGraph) for the
//! same `connect` sequence.

use std::{collections::BTreeMap, fmt};

use tracing::debug;

use crate::{
    graph::{traits::validate_name, Edge, Graph, VertexId, VertexIndex},
    Result,
};

/// A graph backed by per-vertex ordered adjacency maps.
///
/// Space is O(V + E); edge lookup is O(log d) and a neighbour scan O(d), where
/// `d` is the out-degree.
///
/// # Examples
///
/// ```rust
/// use graphscope::{Graph, SparseGraph};
///
/// let mut graph = SparseGraph::new(true, false);
/// graph.link("A", "C")?;
/// graph.link("A", "B")?;
///
/// let targets: Vec<String> = graph
///     .adjacent_edges(graph.vertex("A").unwrap().id())
///     .iter()
///     .map(|e| e.to().name().to_string())
///     .collect();
/// // ids are assigned in creation order: C=1, B=2
/// assert_eq!(targets, vec!["C", "B"]);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SparseGraph {
    directed: bool,
    weighted: bool,
    adjacency: Vec<BTreeMap<usize, f64>>,
    vertex_index: VertexIndex,
    edge_count: usize,
}

impl SparseGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new(directed: bool, weighted: bool) -> Self {
        SparseGraph {
            directed,
            weighted,
            ..Self::default()
        }
    }

    /// Creates an empty graph with room for `vertices` adjacency maps.
    #[must_use]
    pub fn with_capacity(directed: bool, weighted: bool, vertices: usize) -> Self {
        SparseGraph {
            adjacency: Vec::with_capacity(vertices),
            ..Self::new(directed, weighted)
        }
    }

    /// Returns the out-degree of `vertex`, or 0 for an out-of-range id.
    #[must_use]
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency.get(vertex.index()).map_or(0, BTreeMap::len)
    }

    fn store(&mut self, from: usize, to: usize, weight: f64) {
        let required = from.max(to) + 1;
        if self.adjacency.len() < required {
            self.adjacency.resize_with(required, BTreeMap::new);
        }

        match self.adjacency[from].insert(to, weight) {
            Some(previous) => {
                debug!(from, to, previous, weight, "edge already exists, updating weight");
            }
            None => self.edge_count += 1,
        }
    }

    fn edge_at(&self, from: usize, to: usize, weight: f64) -> Option<Edge> {
        let from = self.vertex_index.vertex_by_id(VertexId::new(from))?;
        let to = self.vertex_index.vertex_by_id(VertexId::new(to))?;
        Some(Edge::new(from.clone(), to.clone(), weight))
    }
}

impl Graph for SparseGraph {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }

    fn connect(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        validate_name(from)?;
        validate_name(to)?;
        if from == to {
            return Ok(());
        }

        let from = self.vertex_index.create_vertex(from).index();
        let to = self.vertex_index.create_vertex(to).index();

        self.store(from, to, weight);
        if !self.directed {
            self.store(to, from, weight);
        }
        Ok(())
    }

    fn get_edge(&self, from: VertexId, to: VertexId) -> Option<Edge> {
        if from == to || !self.vertex_index.contains_id(to) {
            return None;
        }
        let weight = *self.adjacency.get(from.index())?.get(&to.index())?;
        self.edge_at(from.index(), to.index(), weight)
    }

    fn edges(&self) -> Vec<Edge> {
        (0..self.adjacency.len())
            .flat_map(|from| self.adjacent_edges(VertexId::new(from)))
            .collect()
    }

    fn adjacent_edges(&self, vertex: VertexId) -> Vec<Edge> {
        let Some(neighbours) = self.adjacency.get(vertex.index()) else {
            return Vec::new();
        };
        neighbours
            .iter()
            .filter_map(|(&to, &weight)| self.edge_at(vertex.index(), to, weight))
            .collect()
    }

    fn vertex_index(&self) -> &VertexIndex {
        &self.vertex_index
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn clear(&mut self) {
        self.vertex_index.clear();
        self.adjacency.clear();
        self.edge_count = 0;
    }
}

impl fmt::Display for SparseGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph: {}, {}",
            if self.directed { "Directed" } else { "Undirected" },
            if self.weighted { "Weighted" } else { "Unweighted" }
        )?;
        writeln!(f, "Vertices: {}", self.vertex_index.len())?;
        writeln!(f, "Edges: {}", self.edge_count)?;

        writeln!(f)?;
        writeln!(f, "Adjacency List:")?;
        for (from, neighbours) in self.adjacency.iter().enumerate() {
            if neighbours.is_empty() {
                continue;
            }
            let Some(source) = self.vertex_index.vertex_by_id(VertexId::new(from)) else {
                continue;
            };
            write!(f, "{}({}) :", source.name(), from)?;
            for (&to, weight) in neighbours {
                if let Some(target) = self.vertex_index.vertex_by_id(VertexId::new(to)) {
                    write!(
                        f,
                        " {}({}) -- {:.2} -> {}({})",
                        source.name(),
                        from,
                        weight,
                        target.name(),
                        to
                    )?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
