//! Connected components of undirected graphs.

use tracing::debug;

use crate::{
    graph::{
        algorithms::traverse::{dfs_walk, WalkEvent},
        Graph, GraphChecker, Vertex, VertexIndex,
    },
    utils::UnionFind,
    Result,
};

type VertexSets = UnionFind<Vertex, fn(&Vertex) -> usize>;

/// Connected-component analysis for undirected graphs.
///
/// One depth-first pass: each undiscovered vertex opens a new component, and
/// every tree edge unions its endpoints in a [`UnionFind`] keyed by vertex id.
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::Components, Graph, DenseGraph};
///
/// let mut graph = DenseGraph::new(false, false);
/// graph.link("A", "B")?;
/// graph.link("B", "C")?;
/// graph.link("X", "Y")?;
///
/// let result = Components::new(&graph)?.compute();
/// assert_eq!(result.component_count(), 2);
/// assert!(result.has_path("A", "C"));
/// assert!(!result.has_path("A", "X"));
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Components<'g, G: ?Sized> {
    graph: &'g G,
}

impl<'g, G: Graph + ?Sized> Components<'g, G> {
    /// Creates the analysis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGraph`](crate::Error::EmptyGraph) for an empty
    /// graph and [`Error::DirectedMismatch`](crate::Error::DirectedMismatch)
    /// for a directed one.
    pub fn new(graph: &'g G) -> Result<Self> {
        GraphChecker::new(graph)
            .check_empty()?
            .check_directed(false)?;
        Ok(Components { graph })
    }

    /// Runs the analysis.
    #[must_use]
    pub fn compute(&self) -> ComponentsResult<'g> {
        let mut sets: VertexSets = UnionFind::new(Vertex::index as fn(&Vertex) -> usize);
        let mut count = 0;

        dfs_walk(self.graph, |event| match event {
            WalkEvent::Root(vertex) => {
                count += 1;
                sets.add(vertex);
            }
            WalkEvent::TreeEdge(edge) => {
                sets.union(edge.from(), edge.to());
            }
            WalkEvent::Visit(_) => {}
        });

        debug!(components = count, "connected components computed");
        ComponentsResult {
            index: self.graph.vertex_index(),
            count,
            sets,
        }
    }
}

/// Outcome of a [`Components`] analysis.
#[derive(Debug)]
pub struct ComponentsResult<'g> {
    index: &'g VertexIndex,
    count: usize,
    sets: VertexSets,
}

impl ComponentsResult<'_> {
    /// Returns the number of connected components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.count
    }

    /// Returns `true` if `from` and `to` lie in the same component.
    ///
    /// `false` if either name is unknown.
    #[must_use]
    pub fn has_path(&self, from: &str, to: &str) -> bool {
        match (self.index.vertex(from), self.index.vertex(to)) {
            (Some(from), Some(to)) => self.sets.is_connected(from, to),
            _ => false,
        }
    }
}
