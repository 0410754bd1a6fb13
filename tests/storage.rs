//! Storage integration tests.
//!
//! These tests check the behaviour both backings must share: identical edge
//! sets for identical `connect` sequences, overwrite semantics, and a clean
//! reset on `clear`.

use std::collections::BTreeMap;

use graphscope::{
    algorithms::{CycleAnalyzer, CycleResult, Dijkstra, Traverse},
    graph::populate,
    DenseGraph, Error, Graph, SparseGraph, VertexId,
};
use proptest::prelude::*;

/// A `connect` call as generated by proptest: endpoint indices plus an integral weight.
type Connection = (u8, u8, u32);

fn apply(graph: &mut dyn Graph, connections: &[Connection]) {
    for &(from, to, weight) in connections {
        graph
            .connect(&format!("v{from}"), &format!("v{to}"), f64::from(weight))
            .unwrap();
    }
}

fn names(vertices: &[graphscope::Vertex]) -> Vec<String> {
    vertices.iter().map(|v| v.name().to_string()).collect()
}

/// Shortest distances from the first vertex and the full cycle set, or `None`
/// for an empty graph.
fn analyse(graph: &DenseGraph) -> Option<(BTreeMap<String, f64>, CycleResult)> {
    let source = graph.vertices().first()?.name().to_string();
    let distances = Dijkstra::new(graph)
        .ok()?
        .compute(&source, None)
        .ok()?
        .all_distances();
    let cycles = CycleAnalyzer::new(graph).ok()?.find_cycles(false);
    Some((distances, cycles))
}

proptest! {
    #[test]
    fn dense_and_sparse_agree(
        connections in prop::collection::vec((0u8..10, 0u8..10, 1u32..50), 0..60),
        directed in any::<bool>(),
    ) {
        let mut dense = DenseGraph::new(directed, true);
        let mut sparse = SparseGraph::new(directed, true);
        apply(&mut dense, &connections);
        apply(&mut sparse, &connections);

        prop_assert_eq!(dense.vertex_count(), sparse.vertex_count());
        prop_assert_eq!(dense.edge_count(), sparse.edge_count());
        prop_assert_eq!(dense.edges(), sparse.edges());
        prop_assert_eq!(dense.edges().len(), dense.edge_count());

        for vertex in dense.vertices() {
            prop_assert_eq!(
                dense.adjacent_edges(vertex.id()),
                sparse.adjacent_edges(vertex.id())
            );
        }

        if !dense.is_empty() {
            let dense_order = Traverse::new(&dense).unwrap().dfs_order();
            let sparse_order = Traverse::new(&sparse).unwrap().dfs_order();
            prop_assert_eq!(names(&dense_order), names(&sparse_order));
        }
    }

    #[test]
    fn undirected_edges_are_mirrored(
        connections in prop::collection::vec((0u8..8, 0u8..8, 1u32..20), 1..30),
    ) {
        let mut graph = SparseGraph::new(false, true);
        apply(&mut graph, &connections);

        prop_assert_eq!(graph.edge_count() % 2, 0);
        for edge in graph.edges() {
            let mirror = graph.get_edge(edge.to().id(), edge.from().id());
            prop_assert_eq!(mirror.map(|e| e.weight()), Some(edge.weight()));
        }
    }

    #[test]
    fn clear_then_rebuild_is_idempotent(
        connections in prop::collection::vec((0u8..6, 0u8..6, 1u32..10), 0..20),
    ) {
        let mut graph = DenseGraph::with_capacity(true, true, 1);
        apply(&mut graph, &connections);
        let before = graph.edges();
        let capacity = graph.capacity();
        let results = analyse(&graph);

        graph.clear();
        prop_assert!(graph.is_empty());
        prop_assert_eq!(graph.edge_count(), 0);
        prop_assert_eq!(graph.capacity(), 1);

        apply(&mut graph, &connections);
        prop_assert_eq!(graph.edges(), before);
        prop_assert_eq!(graph.capacity(), capacity);
        prop_assert_eq!(analyse(&graph), results);
    }
}

#[test]
fn test_overwrite_keeps_edge_count() {
    let mut dense = DenseGraph::new(false, true);
    let mut sparse = SparseGraph::new(false, true);

    for graph in [&mut dense as &mut dyn Graph, &mut sparse] {
        graph.connect("A", "B", 1.0).unwrap();
        assert_eq!(graph.edge_count(), 2);

        graph.connect("B", "A", 5.0).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.vertex_count(), 2);

        let a = graph.vertex("A").unwrap().id();
        let b = graph.vertex("B").unwrap().id();
        assert_eq!(graph.get_edge(a, b).unwrap().weight(), 5.0);
        assert_eq!(graph.get_edge(b, a).unwrap().weight(), 5.0);
    }
}

#[test]
fn test_invalid_names_rejected() {
    let mut dense = DenseGraph::new(true, false);
    let mut sparse = SparseGraph::new(true, false);

    for graph in [&mut dense as &mut dyn Graph, &mut sparse] {
        assert_eq!(graph.link("", "B"), Err(Error::InvalidVertexName));
        assert_eq!(graph.link("A", "  "), Err(Error::InvalidVertexName));
        assert!(graph.is_empty());

        graph.link("A", "A").unwrap();
        assert!(graph.is_empty());
    }
}

#[test]
fn test_out_of_range_lookups() {
    let mut dense = DenseGraph::new(true, false);
    let mut sparse = SparseGraph::new(true, false);

    for graph in [&mut dense as &mut dyn Graph, &mut sparse] {
        graph.link("A", "B").unwrap();
        let a = VertexId::new(0);
        let far = VertexId::new(42);

        assert!(graph.get_edge(a, far).is_none());
        assert!(graph.get_edge(far, a).is_none());
        assert!(graph.get_edge(a, a).is_none());
        assert!(graph.adjacent_edges(far).is_empty());
    }
}

#[test]
fn test_ids_follow_creation_order() {
    let mut graph = SparseGraph::new(true, false);
    populate(&mut graph, "C A\nB C\n").unwrap();

    let ids: Vec<(String, usize)> = graph
        .vertices()
        .iter()
        .map(|v| (v.name().to_string(), v.index()))
        .collect();
    assert_eq!(
        ids,
        vec![
            ("C".to_string(), 0),
            ("A".to_string(), 1),
            ("B".to_string(), 2)
        ]
    );

    graph.clear();
    graph.link("Z", "Y").unwrap();
    assert_eq!(graph.vertex("Z").unwrap().index(), 0);
}

#[test]
fn test_dense_growth() {
    let mut graph = DenseGraph::with_capacity(true, false, 0);
    assert_eq!(graph.capacity(), 1);

    populate(&mut graph, "A B\nB C\nC D\nD E\n").unwrap();
    assert_eq!(graph.capacity(), 8);
    assert_eq!(graph.edge_count(), 4);

    let cycles = CycleAnalyzer::new(&graph).unwrap().find_cycles(false);
    assert!(!cycles.has_cycle());
}

#[test]
fn test_display_renders_both_backings() {
    let mut dense = DenseGraph::new(true, true);
    let mut sparse = SparseGraph::new(true, true);
    for graph in [&mut dense as &mut dyn Graph, &mut sparse] {
        graph.connect("A", "B", 2.0).unwrap();
    }

    let dense_text = dense.to_string();
    let sparse_text = sparse.to_string();
    assert!(dense_text.starts_with("Graph: Directed, Weighted"));
    assert!(sparse_text.starts_with("Graph: Directed, Weighted"));
    assert!(sparse_text.contains("A(0) : A(0) -- 2.00 -> B(1)"));
}
