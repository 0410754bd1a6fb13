//! Depth-first and breadth-first traversal.
//!
//! Both walks cover the whole graph: when the current search is exhausted the
//! next root is the lowest-id vertex not yet visited. DFS runs on an explicit
//! frame stack but preserves recursive pre-order semantics, so deep graphs do
//! not exhaust the call stack.

use std::collections::VecDeque;

use crate::{
    graph::{Edge, Graph, GraphChecker, Vertex},
    Result,
};

/// Event reported by the internal walkers.
#[derive(Debug, Clone, Copy)]
pub(crate) enum WalkEvent<'a> {
    /// A vertex that starts a new search tree
    Root(&'a Vertex),
    /// A vertex reached in visit order
    Visit(&'a Vertex),
    /// An edge that reaches a vertex for the first time
    TreeEdge(&'a Edge),
}

/// One level of the explicit DFS stack: the outgoing edges of a vertex and the
/// index of the next edge to examine.
#[derive(Debug)]
pub(crate) struct DfsFrame {
    edges: Vec<Edge>,
    next: usize,
}

impl DfsFrame {
    pub(crate) fn new(edges: Vec<Edge>) -> Self {
        DfsFrame { edges, next: 0 }
    }

    /// Returns the next unexamined edge and advances past it.
    pub(crate) fn advance(&mut self) -> Option<Edge> {
        let edge = self.edges.get(self.next).cloned()?;
        self.next += 1;
        Some(edge)
    }
}

/// Whole-graph depth-first walk reporting roots and tree edges.
pub(crate) fn dfs_walk<G, F>(graph: &G, mut on_event: F)
where
    G: Graph + ?Sized,
    F: FnMut(WalkEvent<'_>),
{
    let mut visited = vec![false; graph.vertex_count()];
    let mut stack: Vec<DfsFrame> = Vec::new();

    for root in graph.vertices() {
        if visited[root.index()] {
            continue;
        }
        visited[root.index()] = true;
        on_event(WalkEvent::Root(root));
        on_event(WalkEvent::Visit(root));
        stack.push(DfsFrame::new(graph.adjacent_edges(root.id())));

        while let Some(frame) = stack.last_mut() {
            let Some(edge) = frame.advance() else {
                stack.pop();
                continue;
            };

            let to = edge.to();
            if visited[to.index()] {
                continue;
            }
            visited[to.index()] = true;
            on_event(WalkEvent::TreeEdge(&edge));
            on_event(WalkEvent::Visit(to));
            stack.push(DfsFrame::new(graph.adjacent_edges(to.id())));
        }
    }
}

/// Whole-graph breadth-first walk reporting roots and tree edges.
///
/// Vertices are marked when enqueued, so each one is reported exactly once,
/// and visited when dequeued: all tree edges of a vertex are reported before
/// the next vertex.
pub(crate) fn bfs_walk<G, F>(graph: &G, mut on_event: F)
where
    G: Graph + ?Sized,
    F: FnMut(WalkEvent<'_>),
{
    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();

    for root in graph.vertices() {
        if visited[root.index()] {
            continue;
        }
        visited[root.index()] = true;
        on_event(WalkEvent::Root(root));
        queue.push_back(root.clone());

        while let Some(current) = queue.pop_front() {
            on_event(WalkEvent::Visit(&current));
            for edge in graph.adjacent_edges(current.id()) {
                let to = edge.to();
                if visited[to.index()] {
                    continue;
                }
                visited[to.index()] = true;
                on_event(WalkEvent::TreeEdge(&edge));
                queue.push_back(to.clone());
            }
        }
    }
}

/// Visitor-driven traversal over a whole graph.
///
/// `on_vertex` fires once per vertex, in visit order. `on_edge` fires only for
/// edges that reach a vertex not yet visited (tree edges). In a depth-first
/// walk the edge is reported immediately before its target; in a
/// breadth-first walk a vertex's tree edges are all reported right after the
/// vertex itself, and each target is reported when it leaves the queue.
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::Traverse, Graph, DenseGraph};
///
/// let mut graph = DenseGraph::new(true, false);
/// graph.link("A", "B")?;
/// graph.link("A", "C")?;
/// graph.link("B", "D")?;
///
/// let traverse = Traverse::new(&graph)?;
/// let names = |order: Vec<graphscope::Vertex>| {
///     order.iter().map(|v| v.name().to_string()).collect::<Vec<_>>()
/// };
/// assert_eq!(names(traverse.dfs_order()), ["A", "B", "D", "C"]);
/// assert_eq!(names(traverse.bfs_order()), ["A", "B", "C", "D"]);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Traverse<'g, G: ?Sized> {
    graph: &'g G,
}

impl<'g, G: Graph + ?Sized> Traverse<'g, G> {
    /// Creates a traversal over `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGraph`](crate::Error::EmptyGraph) if the graph has
    /// no vertices.
    pub fn new(graph: &'g G) -> Result<Self> {
        GraphChecker::new(graph).check_empty()?;
        Ok(Traverse { graph })
    }

    /// Depth-first walk in recursive pre-order, neighbours by ascending id.
    pub fn dfs<V, E>(&self, mut on_vertex: V, mut on_edge: E)
    where
        V: FnMut(&Vertex),
        E: FnMut(&Edge),
    {
        dfs_walk(self.graph, |event| dispatch(event, &mut on_vertex, &mut on_edge));
    }

    /// Breadth-first walk, neighbours by ascending id.
    pub fn bfs<V, E>(&self, mut on_vertex: V, mut on_edge: E)
    where
        V: FnMut(&Vertex),
        E: FnMut(&Edge),
    {
        bfs_walk(self.graph, |event| dispatch(event, &mut on_vertex, &mut on_edge));
    }

    /// Returns the vertices in depth-first visit order.
    #[must_use]
    pub fn dfs_order(&self) -> Vec<Vertex> {
        let mut order = Vec::with_capacity(self.graph.vertex_count());
        self.dfs(|v| order.push(v.clone()), |_| {});
        order
    }

    /// Returns the vertices in breadth-first visit order.
    #[must_use]
    pub fn bfs_order(&self) -> Vec<Vertex> {
        let mut order = Vec::with_capacity(self.graph.vertex_count());
        self.bfs(|v| order.push(v.clone()), |_| {});
        order
    }
}

fn dispatch<V, E>(event: WalkEvent<'_>, on_vertex: &mut V, on_edge: &mut E)
where
    V: FnMut(&Vertex),
    E: FnMut(&Edge),
{
    match event {
        WalkEvent::Root(_) => {}
        WalkEvent::Visit(vertex) => on_vertex(vertex),
        WalkEvent::TreeEdge(edge) => on_edge(edge),
    }
}
