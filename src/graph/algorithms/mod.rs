//! Graph algorithms.
//!
//! Every algorithm follows the same shape: a constructor borrows the graph and
//! validates its preconditions through [`GraphChecker`](crate::graph::GraphChecker),
//! failing fast with a usage error, and a compute method produces an immutable
//! result that borrows the graph's vertex index for name lookups.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`Traverse`] - Depth-first and breadth-first walks with visitor callbacks
//!
//! ## Connectivity
//!
//! - [`Components`] - Connected components of an undirected graph via union-find
//! - [`CycleAnalyzer`] - Cycle enumeration, or a quick yes/no answer
//!
//! ## Paths and Trees
//!
//! - [`Dijkstra`] - Single-source shortest paths with optional early stop
//! - [`Mst`] - Minimum spanning tree by lazy Prim or Kruskal
//!
//! ## Ordering
//!
//! - [`TopoSort`] - Kahn's topological sort with depth ranks
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Preconditions |
//! |-----------|-----------------|---------------|
//! | DFS/BFS | O(V + E) | non-empty |
//! | Components | O(V + E) | non-empty, undirected |
//! | Cycles | exponential worst case; quick mode O(V + E) | non-empty |
//! | Dijkstra | O(E log E) | non-empty |
//! | MST | O(E log E) | non-empty, undirected, weighted, connected |
//! | Topological Sort | O(V + E) | non-empty, directed, acyclic |
//!
//! # Examples
//!
//! ```rust
//! use graphscope::{algorithms::{Components, TopoSort}, Graph, SparseGraph};
//!
//! let mut undirected = SparseGraph::new(false, false);
//! undirected.link("A", "B")?;
//! undirected.link("C", "D")?;
//! let components = Components::new(&undirected)?.compute();
//! assert_eq!(components.component_count(), 2);
//! assert!(!components.has_path("A", "D"));
//!
//! let mut dag = SparseGraph::new(true, false);
//! dag.link("shirt", "tie")?;
//! dag.link("tie", "jacket")?;
//! let order = TopoSort::new(&dag)?.kahn();
//! assert_eq!(order.vertex_names(), vec!["shirt", "tie", "jacket"]);
//! # Ok::<(), graphscope::Error>(())
//! ```

mod components;
mod cycles;
mod dijkstra;
mod mst;
mod topological;
mod traverse;

pub use components::{Components, ComponentsResult};
pub use cycles::{CycleAnalyzer, CycleResult};
pub use dijkstra::{Dijkstra, ShortestPaths};
pub use mst::{Mst, MstResult};
pub use topological::{RankedVertex, TopoOrder, TopoSort};
pub use traverse::Traverse;

use std::cmp::Ordering;

use crate::graph::Edge;

/// Min-heap entry for [`std::collections::BinaryHeap`].
///
/// Ordered by ascending `cost`, ties broken by ascending insertion sequence so
/// that equal-cost entries pop in FIFO order.
#[derive(Debug, Clone)]
pub(crate) struct HeapEntry {
    pub(crate) cost: f64,
    seq: u64,
    pub(crate) edge: Edge,
}

impl HeapEntry {
    pub(crate) fn new(edge: Edge, cost: f64, seq: &mut u64) -> Self {
        let entry = HeapEntry {
            cost,
            seq: *seq,
            edge,
        };
        *seq += 1;
        entry
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behaviour
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
