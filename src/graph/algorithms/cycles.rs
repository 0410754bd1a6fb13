//! Cycle enumeration and detection.
//!
//! [`CycleAnalyzer`] runs a depth-first search that keeps two marks per vertex:
//! *visited* (ever entered) and *on stack* (part of the current path). An edge
//! to an on-stack vertex closes a cycle, which is the slice of the current path
//! starting at that vertex.
//!
//! An edge to a vertex that was visited earlier but is no longer on the stack
//! is followed again during full enumeration. Without this re-traversal,
//! cycles that close through an already explored subtree are missed: in
//! `A→B→C→D→A` plus `B→D`, the second cycle `A→B→D→A` is only found by
//! re-entering `D` from `B`.
//!
//! The search runs on an explicit frame stack with a single path buffer that
//! is truncated on backtrack.

use std::{collections::HashSet, fmt, ops::ControlFlow};

use tracing::{debug, trace};

use crate::{
    graph::{algorithms::traverse::DfsFrame, Graph, GraphChecker, Vertex},
    Result,
};

/// Finds the cycles of a graph.
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::CycleAnalyzer, Graph, SparseGraph};
///
/// let mut graph = SparseGraph::new(true, false);
/// graph.link("A", "B")?;
/// graph.link("B", "C")?;
/// graph.link("C", "A")?;
///
/// let analyzer = CycleAnalyzer::new(&graph)?;
/// assert!(analyzer.has_cycle());
///
/// let result = analyzer.find_cycles(false);
/// assert_eq!(result.cycle_count(), 1);
/// assert_eq!(result.render_cycle(&result.cycles()[0]), "  A -> B\n  ↑  ↙\n  C");
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CycleAnalyzer<'g, G: ?Sized> {
    graph: &'g G,
}

impl<'g, G: Graph + ?Sized> CycleAnalyzer<'g, G> {
    /// Creates an analyzer over `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGraph`](crate::Error::EmptyGraph) for an empty graph.
    pub fn new(graph: &'g G) -> Result<Self> {
        GraphChecker::new(graph).check_empty()?;
        Ok(CycleAnalyzer { graph })
    }

    /// Enumerates cycles.
    ///
    /// In full mode every unvisited vertex is tried as a root, finished
    /// vertices are entered again from later branches, and every discovery is
    /// kept (deduplicated by vertex set on undirected graphs). Full mode can be
    /// exponential on dense acyclic graphs.
    ///
    /// With `quick_return` the search is a plain linear DFS that stops at the
    /// first back edge; that cycle is the only one recorded.
    #[must_use]
    pub fn find_cycles(&self, quick_return: bool) -> CycleResult {
        let mut search = Search::new(self.graph, quick_return);

        for root in self.graph.vertices() {
            if search.visited[root.index()] {
                continue;
            }
            if search.run(root).is_break() {
                debug!(root = root.name(), "cycle search stopped at first cycle");
                break;
            }
        }

        debug!(cycles = search.result.cycles.len(), "cycle search finished");
        search.result
    }

    /// Returns `true` if the graph contains at least one cycle.
    ///
    /// Undirected graphs count any edge as a two-vertex cycle.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        self.find_cycles(true).has_cycle()
    }
}

/// Mutable state of one cycle search.
struct Search<'g, G: ?Sized> {
    graph: &'g G,
    quick_return: bool,
    visited: Vec<bool>,
    on_stack: Vec<bool>,
    path: Vec<Vertex>,
    seen: HashSet<String>,
    result: CycleResult,
}

impl<'g, G: Graph + ?Sized> Search<'g, G> {
    fn new(graph: &'g G, quick_return: bool) -> Self {
        let n = graph.vertex_count();
        Search {
            graph,
            quick_return,
            visited: vec![false; n],
            on_stack: vec![false; n],
            path: Vec::new(),
            seen: HashSet::new(),
            result: CycleResult {
                directed: graph.is_directed(),
                cycles: Vec::new(),
            },
        }
    }

    fn enter(&mut self, vertex: &Vertex, stack: &mut Vec<DfsFrame>) {
        trace!(vertex = vertex.name(), depth = stack.len(), "entering vertex");
        self.visited[vertex.index()] = true;
        self.on_stack[vertex.index()] = true;
        self.path.push(vertex.clone());
        stack.push(DfsFrame::new(self.graph.adjacent_edges(vertex.id())));
    }

    fn run(&mut self, root: &Vertex) -> ControlFlow<()> {
        let mut stack = Vec::new();
        self.enter(root, &mut stack);

        while let Some(frame) = stack.last_mut() {
            let Some(edge) = frame.advance() else {
                stack.pop();
                if let Some(done) = self.path.pop() {
                    self.on_stack[done.index()] = false;
                }
                continue;
            };

            let to = edge.to();
            if self.on_stack[to.index()] {
                self.record(to);
                if self.quick_return {
                    self.unwind();
                    return ControlFlow::Break(());
                }
            } else if !self.visited[to.index()] || !self.quick_return {
                // Finished vertices are re-entered only when enumerating
                self.enter(to, &mut stack);
            }
        }
        ControlFlow::Continue(())
    }

    fn record(&mut self, closing: &Vertex) {
        let Some(start) = self.path.iter().position(|v| v.id() == closing.id()) else {
            return;
        };
        let cycle = self.path[start..].to_vec();

        if !self.result.directed {
            let mut names: Vec<&str> = cycle.iter().map(Vertex::name).collect();
            names.sort_unstable();
            if !self.seen.insert(names.join(" ")) {
                return;
            }
        }

        trace!(
            closing = closing.name(),
            length = cycle.len(),
            "cycle found"
        );
        self.result.cycles.push(cycle);
    }

    fn unwind(&mut self) {
        for vertex in self.path.drain(..) {
            self.on_stack[vertex.index()] = false;
        }
    }
}

/// Outcome of a [`CycleAnalyzer`] search.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleResult {
    directed: bool,
    cycles: Vec<Vec<Vertex>>,
}

impl CycleResult {
    /// Returns the discovered cycles in discovery order.
    ///
    /// Each cycle lists its vertices along the edges that form it; the edge
    /// from the last vertex back to the first closes it.
    #[must_use]
    pub fn cycles(&self) -> &[Vec<Vertex>] {
        &self.cycles
    }

    /// Returns the number of discovered cycles.
    #[must_use]
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// Returns `true` if at least one cycle was found.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Returns whether the analysed graph was directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Renders a cycle as a small text diagram.
    ///
    /// Two-vertex cycles render as `A <=> B`. Longer cycles are split after
    /// `ceil(n / 2)` vertices and drawn as a three-line loop: the first half
    /// left to right, a connector line, then the second half right to left.
    ///
    /// ```text
    ///   A -> B -> C
    ///   ↑         ↓
    ///   F <- E <- D
    /// ```
    #[must_use]
    pub fn render_cycle(&self, cycle: &[Vertex]) -> String {
        const INDENT: &str = "  ";

        match cycle {
            [] => return String::new(),
            [only] => return format!("{INDENT}{}", only.name()),
            [a, b] => return format!("{INDENT}{} <=> {}", a.name(), b.name()),
            _ => {}
        }

        let even = cycle.len() % 2 == 0;
        let mid = cycle.len().div_ceil(2);
        fn names(part: &[Vertex]) -> Vec<&str> {
            part.iter().map(Vertex::name).collect()
        }

        let forward = if self.directed { " -> " } else { " - " };
        let backward = if self.directed { " <- " } else { " - " };
        let upper = format!("{INDENT}{}", names(&cycle[..mid]).join(forward));

        let mut lower_names = names(&cycle[mid..]);
        lower_names.reverse();
        let lower = format!("{INDENT}{}", lower_names.join(backward));

        let (left, right, inset) = match (self.directed, even) {
            (true, true) => ("↑", "↓", 2),
            (false, true) => ("|", "|", 2),
            (true, false) => ("↑", "↙", 4),
            (false, false) => ("|", "/", 3),
        };
        let width = upper.chars().count() - INDENT.len();
        let middle = format!(
            "{INDENT}{left}{}{right}",
            " ".repeat(width.saturating_sub(inset))
        );

        format!("{upper}\n{middle}\n{lower}")
    }
}

impl fmt::Display for CycleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cycles found: {}", self.cycles.len())?;
        for (i, cycle) in self.cycles.iter().enumerate() {
            let names: Vec<&str> = cycle.iter().map(Vertex::name).collect();
            writeln!(
                f,
                "Cycle {}: {} vertices [{}]",
                i + 1,
                cycle.len(),
                names.join(" ")
            )?;
            writeln!(f, "{}", self.render_cycle(cycle))?;
            writeln!(f)?;
        }
        Ok(())
    }
}
