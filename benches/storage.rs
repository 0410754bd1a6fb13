#![allow(unused)]
extern crate graphscope;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graphscope::{DenseGraph, Graph, SparseGraph};
use std::hint::black_box;

/// Deterministic pseudo-random edge list over `vertices` vertices.
fn edge_list(vertices: usize, edges: usize) -> Vec<(String, String, f64)> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..edges)
        .map(|_| {
            let from = next() as usize % vertices;
            let to = next() as usize % vertices;
            let weight = (next() % 100) as f64 + 1.0;
            (format!("v{from}"), format!("v{to}"), weight)
        })
        .collect()
}

fn fill(graph: &mut dyn Graph, edges: &[(String, String, f64)]) {
    for (from, to, weight) in edges {
        graph.connect(from, to, *weight).unwrap();
    }
}

/// Benchmark edge insertion on both backings
///
/// Dense storage pays for matrix doubling as vertices appear; sparse storage
/// pays per-edge map insertion.
fn bench_connect(c: &mut Criterion) {
    let mut group = c.benchmark_group("connect");
    for &vertices in &[64usize, 256, 1024] {
        let edges = edge_list(vertices, vertices * 4);
        group.throughput(Throughput::Elements(edges.len() as u64));

        group.bench_with_input(BenchmarkId::new("dense", vertices), &edges, |b, edges| {
            b.iter(|| {
                let mut graph = DenseGraph::new(true, true);
                fill(&mut graph, black_box(edges));
                black_box(graph)
            });
        });
        group.bench_with_input(BenchmarkId::new("sparse", vertices), &edges, |b, edges| {
            b.iter(|| {
                let mut graph = SparseGraph::new(true, true);
                fill(&mut graph, black_box(edges));
                black_box(graph)
            });
        });
    }
    group.finish();
}

/// Benchmark a full adjacency scan on both backings
fn bench_adjacency(c: &mut Criterion) {
    let vertices = 512;
    let edges = edge_list(vertices, vertices * 4);

    let mut dense = DenseGraph::new(true, true);
    let mut sparse = SparseGraph::new(true, true);
    fill(&mut dense, &edges);
    fill(&mut sparse, &edges);

    let mut group = c.benchmark_group("adjacent_edges");
    group.bench_function("dense", |b| {
        b.iter(|| {
            for vertex in dense.vertices() {
                black_box(dense.adjacent_edges(vertex.id()));
            }
        });
    });
    group.bench_function("sparse", |b| {
        b.iter(|| {
            for vertex in sparse.vertices() {
                black_box(sparse.adjacent_edges(vertex.id()));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_connect, bench_adjacency);
criterion_main!(benches);
