use thiserror::Error;

/// The generic Error type, which covers every failure this library can return.
///
/// Errors fall into two groups. **Usage errors** are precondition violations
/// (empty graph, wrong directedness or weightedness, malformed or unknown
/// required vertex names, a disconnected graph handed to the MST builder, a
/// cyclic graph handed to the topological sorter). They are raised when an
/// algorithm is constructed or entered, before any computation starts, so a
/// partially valid computation can never be observed.
///
/// **Not-found conditions** are optional lookups that failed. Only
/// [`Error::VertexNotFound`] belongs to this group; callers that can tolerate a
/// missing vertex branch on [`Error::is_not_found`] instead of bailing out.
/// Queries on finished results never use this type: they answer with `None`,
/// an empty list or `false`.
///
/// # Error Categories
///
/// ## Graph Shape Errors
/// - [`Error::EmptyGraph`] - The graph has no vertices
/// - [`Error::DirectedMismatch`] - The graph's directedness is not the expected one
/// - [`Error::WeightedMismatch`] - The graph's weightedness is not the expected one
/// - [`Error::Disconnected`] - The graph has more than one connected component
/// - [`Error::CyclicGraph`] - The graph contains a cycle
///
/// ## Vertex Errors
/// - [`Error::InvalidVertexName`] - A blank vertex name was passed to `connect`
/// - [`Error::UnknownVertex`] - A required vertex does not exist
/// - [`Error::VertexNotFound`] - An optional vertex does not exist
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::Dijkstra, Error, Graph, SparseGraph};
///
/// let mut graph = SparseGraph::new(true, true);
/// graph.connect("A", "B", 2.0)?;
///
/// let dijkstra = Dijkstra::new(&graph)?;
/// match dijkstra.compute("Z", None) {
///     Err(Error::UnknownVertex(name)) => assert_eq!(name, "Z"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The graph has no vertices.
    ///
    /// Every algorithm refuses to run on an empty graph.
    #[error("Graph is empty")]
    EmptyGraph,

    /// The graph's directedness does not match what the algorithm requires.
    ///
    /// `expected` holds the directedness the algorithm asked for.
    #[error("Graph is not {}", if *expected { "directed" } else { "undirected" })]
    DirectedMismatch {
        /// Whether the algorithm expected a directed graph
        expected: bool,
    },

    /// The graph's weightedness does not match what the algorithm requires.
    ///
    /// `expected` holds the weightedness the algorithm asked for.
    #[error("Graph is not {}", if *expected { "weighted" } else { "unweighted" })]
    WeightedMismatch {
        /// Whether the algorithm expected a weighted graph
        expected: bool,
    },

    /// A vertex name passed to `connect` was empty or whitespace only.
    #[error("Vertex names cannot be empty")]
    InvalidVertexName,

    /// A vertex the caller marked as required does not exist.
    ///
    /// This is a usage error: the caller asked for a computation anchored at
    /// a vertex the graph never saw.
    #[error("Vertex '{0}' not found")]
    UnknownVertex(String),

    /// A vertex looked up optionally does not exist.
    ///
    /// This is a not-found condition rather than a misuse. Callers such as the
    /// Dijkstra breakpoint filter drop the name and continue.
    #[error("Vertex '{0}' not found")]
    VertexNotFound(String),

    /// The graph is split into several connected components.
    ///
    /// A minimum spanning tree is only defined for a connected graph.
    #[error("The graph must be connected, found {components} components")]
    Disconnected {
        /// Number of components found
        components: usize,
    },

    /// The graph contains at least one cycle.
    ///
    /// A topological order only exists for directed acyclic graphs.
    #[error("Graph contains cycles, cannot compute topological sort")]
    CyclicGraph,
}

impl Error {
    /// Returns `true` for not-found conditions that a caller may tolerate.
    ///
    /// Every other variant is a usage error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::VertexNotFound(_))
    }
}
