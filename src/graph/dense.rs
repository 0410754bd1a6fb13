//! Adjacency-matrix graph storage.
//!
//! [`DenseGraph`] keeps a flat `capacity × capacity` matrix of `Option<f64>`
//! where `None` means "no edge". Edge lookup is O(1), a neighbour scan is O(V),
//! and space is O(V²) regardless of edge count. Use it for small or nearly
//! complete graphs; prefer [`SparseGraph`](crate::SparseGraph) otherwise.

use std::fmt;

use tracing::debug;

use crate::{
    graph::{traits::validate_name, Edge, Graph, VertexId, VertexIndex},
    Result,
};

/// Matrix side length a fresh graph starts with.
pub const DEFAULT_DENSE_CAPACITY: usize = 2;

/// A graph backed by an adjacency matrix.
///
/// The matrix grows by doubling its side length whenever a new vertex id no
/// longer fits, copying the existing rows into the new layout.
///
/// # Examples
///
/// ```rust
/// use graphscope::{DenseGraph, Graph};
///
/// let mut graph = DenseGraph::new(false, true);
/// graph.connect("A", "B", 4.0)?;
/// graph.connect("B", "C", 1.5)?;
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 4);
/// assert!(graph.capacity() >= 3);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DenseGraph {
    directed: bool,
    weighted: bool,
    /// Row-major matrix of `capacity * capacity` cells
    matrix: Vec<Option<f64>>,
    /// Current side length of the matrix
    capacity: usize,
    /// Side length restored by `clear`
    initial_capacity: usize,
    vertex_index: VertexIndex,
    edge_count: usize,
}

impl DenseGraph {
    /// Creates an empty graph with the default initial capacity.
    #[must_use]
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self::with_capacity(directed, weighted, DEFAULT_DENSE_CAPACITY)
    }

    /// Creates an empty graph whose matrix starts at `capacity × capacity`.
    ///
    /// A capacity of 0 is raised to 1 so that doubling always makes progress.
    #[must_use]
    pub fn with_capacity(directed: bool, weighted: bool, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        DenseGraph {
            directed,
            weighted,
            matrix: vec![None; capacity * capacity],
            capacity,
            initial_capacity: capacity,
            vertex_index: VertexIndex::new(),
            edge_count: 0,
        }
    }

    /// Returns the current side length of the matrix.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the raw matrix cell for `(from, to)`.
    ///
    /// `None` for out-of-range ids as well as for absent edges.
    #[must_use]
    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<f64> {
        if !self.vertex_index.contains_id(from) || !self.vertex_index.contains_id(to) {
            return None;
        }
        self.matrix[self.cell(from.index(), to.index())]
    }

    #[inline]
    fn cell(&self, row: usize, col: usize) -> usize {
        row * self.capacity + col
    }

    fn ensure_capacity(&mut self, required: usize) {
        if required <= self.capacity {
            return;
        }

        let mut new_capacity = self.capacity;
        while new_capacity < required {
            new_capacity *= 2;
        }

        let mut matrix = vec![None; new_capacity * new_capacity];
        for row in 0..self.capacity {
            let old = row * self.capacity;
            let new = row * new_capacity;
            matrix[new..new + self.capacity].copy_from_slice(&self.matrix[old..old + self.capacity]);
        }

        debug!(
            from = self.capacity,
            to = new_capacity,
            "expanding adjacency matrix"
        );
        self.matrix = matrix;
        self.capacity = new_capacity;
    }

    fn store(&mut self, from: usize, to: usize, weight: f64) {
        let cell = self.cell(from, to);
        match self.matrix[cell].replace(weight) {
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

impl Default for DenseGraph {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl Graph for DenseGraph {
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
        self.ensure_capacity(self.vertex_index.len());

        self.store(from, to, weight);
        if !self.directed {
            self.store(to, from, weight);
        }
        Ok(())
    }

    fn get_edge(&self, from: VertexId, to: VertexId) -> Option<Edge> {
        if from == to {
            return None;
        }
        let weight = self.weight(from, to)?;
        self.edge_at(from.index(), to.index(), weight)
    }

    fn edges(&self) -> Vec<Edge> {
        (0..self.vertex_index.len())
            .flat_map(|from| self.adjacent_edges(VertexId::new(from)))
            .collect()
    }

    fn adjacent_edges(&self, vertex: VertexId) -> Vec<Edge> {
        if !self.vertex_index.contains_id(vertex) {
            return Vec::new();
        }

        let from = vertex.index();
        let row = self.cell(from, 0);
        self.matrix[row..row + self.vertex_index.len()]
            .iter()
            .enumerate()
            .filter_map(|(to, cell)| cell.and_then(|weight| self.edge_at(from, to, weight)))
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
        self.capacity = self.initial_capacity;
        self.matrix = vec![None; self.capacity * self.capacity];
        self.edge_count = 0;
    }
}

impl fmt::Display for DenseGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph: {}, {}",
            if self.directed { "Directed" } else { "Undirected" },
            if self.weighted { "Weighted" } else { "Unweighted" }
        )?;
        writeln!(f, "Vertices: {}", self.vertex_index.len())?;
        writeln!(f, "Edges: {}", self.edge_count)?;

        writeln!(f, "Vertex Information:")?;
        for vertex in self.vertex_index.vertices() {
            writeln!(f, "{vertex:?}")?;
        }

        writeln!(f)?;
        writeln!(f, "Adjacency Matrix:")?;
        write!(f, "{:8}", "")?;
        for vertex in self.vertex_index.vertices() {
            write!(f, "{:>8}", format!("{}:{}", vertex.index(), vertex.name()))?;
        }
        writeln!(f)?;

        let n = self.vertex_index.len();
        for vertex in self.vertex_index.vertices() {
            write!(f, "{:>8}", format!("{}:{}", vertex.index(), vertex.name()))?;
            for to in 0..n {
                match self.matrix[self.cell(vertex.index(), to)] {
                    Some(weight) => write!(f, "{weight:>8}")?,
                    None => write!(f, "{:>8}", "nil")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
