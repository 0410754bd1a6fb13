//! Single-source shortest paths.
//!
//! Classic Dijkstra over a binary min-heap of `(edge, cumulative cost)` entries.
//! Stale heap entries are skipped when popped instead of being decreased in
//! place. Unweighted graphs charge [`DEFAULT_UNWEIGHTED_VALUE`] per edge.
//!
//! An optional set of *breakpoints* ends the search early: once every
//! breakpoint has been finalised the remaining vertices are left as they are.
//!
//! [`DEFAULT_UNWEIGHTED_VALUE`]: crate::DEFAULT_UNWEIGHTED_VALUE

use std::{
    collections::{BTreeMap, BinaryHeap, HashSet},
    fmt::{self, Write},
};

use tracing::{debug, trace};

use crate::{
    graph::{algorithms::HeapEntry, Edge, Graph, GraphChecker, Vertex, VertexId, VertexIndex},
    Result,
};

/// Shortest-path solver.
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::Dijkstra, Graph, SparseGraph};
///
/// let mut graph = SparseGraph::new(true, true);
/// graph.connect("A", "B", 3.0)?;
/// graph.connect("A", "C", 1.0)?;
/// graph.connect("C", "B", 1.0)?;
///
/// let paths = Dijkstra::new(&graph)?.compute("A", None)?;
/// assert_eq!(paths.distance("B"), Some(2.0));
///
/// let route = paths.routes("B");
/// let hops: Vec<&str> = route.iter().map(|e| e.to().name()).collect();
/// assert_eq!(hops, ["C", "B"]);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra<'g, G: ?Sized> {
    graph: &'g G,
}

impl<'g, G: Graph + ?Sized> Dijkstra<'g, G> {
    /// Creates a solver over `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGraph`](crate::Error::EmptyGraph) for an empty graph.
    pub fn new(graph: &'g G) -> Result<Self> {
        GraphChecker::new(graph).check_empty()?;
        Ok(Dijkstra { graph })
    }

    /// Computes shortest paths from `source`.
    ///
    /// With `breakpoints`, the search stops as soon as every named vertex has
    /// been finalised. Names that do not resolve are ignored, as is the source
    /// itself; if nothing remains the search runs to completion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`](crate::Error::UnknownVertex) if `source`
    /// is not in the graph.
    pub fn compute(&self, source: &str, breakpoints: Option<&[&str]>) -> Result<ShortestPaths<'g>> {
        let checker = GraphChecker::new(self.graph);
        let source = checker.check_vertex(source, true)?;
        let mut pending = match breakpoints {
            Some(names) => self.resolve_breakpoints(&checker, names, source.id())?,
            None => None,
        };

        let n = self.graph.vertex_count();
        let weighted = self.graph.is_weighted();
        let mut completed = vec![false; n];
        let mut distance: Vec<Option<f64>> = vec![None; n];
        let mut path_from: Vec<Option<Edge>> = vec![None; n];

        let mut seq = 0;
        let mut heap = BinaryHeap::new();
        for edge in self.graph.adjacent_edges(source.id()) {
            let cost = edge.cost(weighted);
            let to = edge.to().index();
            distance[to] = Some(cost);
            path_from[to] = Some(edge.clone());
            heap.push(HeapEntry::new(edge, cost, &mut seq));
        }
        completed[source.index()] = true;
        distance[source.index()] = Some(0.0);
        path_from[source.index()] = None;

        debug!(source = source.name(), "computing shortest paths");
        while let Some(entry) = heap.pop() {
            let pivot = entry.edge.to();
            if completed[pivot.index()] {
                continue;
            }
            let Some(base) = distance[pivot.index()] else {
                continue;
            };

            for edge in self.graph.adjacent_edges(pivot.id()) {
                let to = edge.to().index();
                if completed[to] {
                    continue;
                }
                let candidate = base + edge.cost(weighted);
                if distance[to].map_or(true, |current| candidate < current) {
                    distance[to] = Some(candidate);
                    path_from[to] = Some(edge.clone());
                    heap.push(HeapEntry::new(edge, candidate, &mut seq));
                }
            }

            completed[pivot.index()] = true;
            trace!(vertex = pivot.name(), distance = base, "vertex finalised");

            if let Some(remaining) = pending.as_mut() {
                remaining.remove(&pivot.id());
                if remaining.is_empty() {
                    debug!(at = pivot.name(), "all breakpoints reached, stopping early");
                    break;
                }
            }
        }

        Ok(ShortestPaths {
            source: source.clone(),
            index: self.graph.vertex_index(),
            distance,
            path_from,
            weighted,
        })
    }

    fn resolve_breakpoints(
        &self,
        checker: &GraphChecker<'g, G>,
        names: &[&str],
        source: VertexId,
    ) -> Result<Option<HashSet<VertexId>>> {
        let mut ids = HashSet::new();
        for name in names {
            match checker.check_vertex(name, false) {
                Ok(vertex) if vertex.id() != source => {
                    ids.insert(vertex.id());
                }
                Ok(_) => {}
                Err(err) if err.is_not_found() => {
                    trace!(breakpoint = *name, "ignoring unknown breakpoint");
                }
                Err(err) => return Err(err),
            }
        }
        Ok((!ids.is_empty()).then_some(ids))
    }
}

/// Shortest paths from one source, as produced by [`Dijkstra::compute`].
///
/// After an early stop, vertices that were reached but not finalised keep their
/// tentative distance and route.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g> {
    source: Vertex,
    index: &'g VertexIndex,
    distance: Vec<Option<f64>>,
    path_from: Vec<Option<Edge>>,
    weighted: bool,
}

impl ShortestPaths<'_> {
    /// Returns the source vertex.
    #[must_use]
    pub fn source(&self) -> &Vertex {
        &self.source
    }

    /// Returns the edges from the source to `dest`, in travel order.
    ///
    /// Empty if `dest` is unknown, unreachable, or the source itself.
    #[must_use]
    pub fn routes(&self, dest: &str) -> Vec<Edge> {
        let Some(mut current) = self.index.vertex(dest) else {
            return Vec::new();
        };

        let mut reversed = Vec::new();
        while current.id() != self.source.id() && reversed.len() < self.path_from.len() {
            let Some(edge) = self.path_from.get(current.index()).and_then(Option::as_ref) else {
                break;
            };
            reversed.push(edge.clone());
            current = edge.from();
        }
        reversed.reverse();
        reversed
    }

    /// Returns the shortest known distance to `dest`.
    #[must_use]
    pub fn distance(&self, dest: &str) -> Option<f64> {
        let vertex = self.index.vertex(dest)?;
        self.distance.get(vertex.index()).copied().flatten()
    }

    /// Returns `true` if `dest` was reached.
    #[must_use]
    pub fn has_path(&self, dest: &str) -> bool {
        self.distance(dest).is_some()
    }

    /// Returns the distance of every reached vertex, keyed by name.
    #[must_use]
    pub fn all_distances(&self) -> BTreeMap<String, f64> {
        self.index
            .vertices()
            .iter()
            .filter_map(|v| Some((v.name().to_string(), self.distance.get(v.index()).copied().flatten()?)))
            .collect()
    }

    /// Renders one route as a short report.
    ///
    /// ```text
    /// Shortest Path:
    ///   source: [A] target: [F]
    /// Distance: 4 = 1 + 2 + 1
    /// Route: [A] --1-> [C] --2-> [E] --1-> [F]
    /// ```
    #[must_use]
    pub fn render_route(&self, route: &[Edge]) -> String {
        let Some(last) = route.last() else {
            return "No route found".to_string();
        };

        let mut out = String::new();
        let target = last.to();
        let total = self
            .distance
            .get(target.index())
            .copied()
            .flatten()
            .unwrap_or_default();
        let costs: Vec<String> = route
            .iter()
            .map(|e| e.cost(self.weighted).to_string())
            .collect();

        let _ = writeln!(out, "Shortest Path:");
        let _ = writeln!(
            out,
            "  source: [{}] target: [{}]",
            self.source.name(),
            target.name()
        );
        let _ = writeln!(out, "Distance: {total} = {}", costs.join(" + "));
        let _ = write!(out, "Route:");
        for edge in route {
            let _ = write!(out, " [{}] --{}->", edge.from().name(), edge.cost(self.weighted));
        }
        let _ = write!(out, " [{}]", target.name());
        out
    }
}

impl fmt::Display for ShortestPaths<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Dijkstra Shortest Paths from [{}] ===",
            self.source.name()
        )?;
        for vertex in self.index.vertices() {
            if vertex.id() == self.source.id() {
                continue;
            }
            let route = self.routes(vertex.name());
            if route.is_empty() {
                writeln!(f, "No path to [{}]", vertex.name())?;
            } else {
                writeln!(f, "{}", self.render_route(&route))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DenseGraph, Error, SparseGraph};

    fn create_route_graph() -> SparseGraph {
        let mut graph = SparseGraph::new(true, true);
        for (from, to, weight) in [
            ("A", "B", 3.0),
            ("A", "C", 1.0),
            ("B", "D", 3.0),
            ("C", "B", 1.0),
            ("C", "D", 5.0),
            ("C", "E", 2.0),
            ("D", "F", 2.0),
            ("E", "F", 1.0),
            ("B", "F", 8.0),
        ] {
            graph.connect(from, to, weight).unwrap();
        }
        graph
    }

    fn hops(route: &[Edge]) -> Vec<&str> {
        route.iter().map(|e| e.to().name()).collect()
    }

    #[test]
    fn test_preconditions() {
        let empty = DenseGraph::new(true, true);
        assert_eq!(Dijkstra::new(&empty).err(), Some(Error::EmptyGraph));

        let graph = create_route_graph();
        let err = Dijkstra::new(&graph).unwrap().compute("Z", None).unwrap_err();
        assert_eq!(err, Error::UnknownVertex("Z".to_string()));
    }

    #[test]
    fn test_distances() {
        let graph = create_route_graph();
        let paths = Dijkstra::new(&graph).unwrap().compute("A", None).unwrap();

        assert_eq!(paths.source().name(), "A");
        assert_eq!(paths.distance("A"), Some(0.0));
        assert_eq!(paths.distance("B"), Some(2.0));
        assert_eq!(paths.distance("C"), Some(1.0));
        assert_eq!(paths.distance("D"), Some(5.0));
        assert_eq!(paths.distance("E"), Some(3.0));
        assert_eq!(paths.distance("F"), Some(4.0));
        assert_eq!(hops(&paths.routes("F")), ["C", "E", "F"]);
        assert!(paths.routes("A").is_empty());
    }

    #[test]
    fn test_unreachable_and_unknown() {
        let mut graph = SparseGraph::new(true, true);
        graph.connect("A", "B", 1.0).unwrap();
        graph.connect("C", "A", 1.0).unwrap();

        let paths = Dijkstra::new(&graph).unwrap().compute("A", None).unwrap();
        assert!(!paths.has_path("C"));
        assert!(paths.routes("C").is_empty());
        assert!(paths.distance("nowhere").is_none());
        assert!(paths.routes("nowhere").is_empty());
    }

    #[test]
    fn test_unweighted_counts_hops() {
        let mut graph = SparseGraph::new(true, false);
        graph.connect("A", "B", 10.0).unwrap();
        graph.connect("B", "C", 10.0).unwrap();
        graph.connect("A", "C", 50.0).unwrap();

        let paths = Dijkstra::new(&graph).unwrap().compute("A", None).unwrap();
        assert_eq!(paths.distance("C"), Some(1.0));
        assert_eq!(paths.distance("B"), Some(1.0));
    }

    #[test]
    fn test_breakpoints_stop_early() {
        let graph = create_route_graph();
        let dijkstra = Dijkstra::new(&graph).unwrap();

        let paths = dijkstra.compute("A", Some(&["C"])).unwrap();
        assert_eq!(paths.distance("C"), Some(1.0));
        // F was never relaxed before the stop
        assert!(!paths.has_path("F"));
    }

    #[test]
    fn test_breakpoints_unknown_or_source_ignored() {
        let graph = create_route_graph();
        let dijkstra = Dijkstra::new(&graph).unwrap();

        let paths = dijkstra.compute("A", Some(&["A", "missing"])).unwrap();
        assert_eq!(paths.distance("F"), Some(4.0));
        assert_eq!(paths.all_distances().len(), 6);
    }

    #[test]
    fn test_all_distances_sorted_by_name() {
        let graph = create_route_graph();
        let paths = Dijkstra::new(&graph).unwrap().compute("C", None).unwrap();

        let distances = paths.all_distances();
        let keys: Vec<&str> = distances.keys().map(String::as_str).collect();
        assert_eq!(keys, ["B", "C", "D", "E", "F"]);
        assert_eq!(distances["F"], 3.0);
    }

    #[test]
    fn test_render_route() {
        let graph = create_route_graph();
        let paths = Dijkstra::new(&graph).unwrap().compute("A", None).unwrap();

        let text = paths.render_route(&paths.routes("F"));
        assert_eq!(
            text,
            "Shortest Path:\n  source: [A] target: [F]\nDistance: 4 = 1 + 2 + 1\nRoute: [A] --1-> [C] --2-> [E] --1-> [F]"
        );
        assert_eq!(paths.render_route(&[]), "No route found");
    }

    #[test]
    fn test_display_reports_unreachable() {
        let mut graph = SparseGraph::new(true, true);
        graph.connect("A", "B", 1.0).unwrap();
        graph.connect("C", "A", 1.0).unwrap();

        let text = Dijkstra::new(&graph)
            .unwrap()
            .compute("A", None)
            .unwrap()
            .to_string();
        assert!(text.starts_with("=== Dijkstra Shortest Paths from [A] ===\n"));
        assert!(text.contains("target: [B]"));
        assert!(text.contains("No path to [C]"));
    }
}
