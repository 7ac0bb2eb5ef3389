//! Criterion benchmarks for colorgraph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use colorgraph::graph::ColorGraph;

const COLORS: [&str; 4] = ["red", "green", "blue", "yellow"];

/// Build a random graph with dense keys 0..node_count.
fn make_graph(node_count: usize, edges_per_node: usize, directed: bool) -> ColorGraph {
    let mut rng = rand::thread_rng();
    let mut graph = ColorGraph::new(directed);

    for key in 0..node_count {
        let color = COLORS[key % COLORS.len()];
        graph.add_node(key as u64, Some(color));
    }

    for u in 0..node_count as u64 {
        for _ in 0..edges_per_node {
            let v = rng.gen_range(0..node_count) as u64;
            let weight = rng.gen_range(0.1..10.0);
            graph
                .add_edge(u, v, None, Some(weight))
                .expect("endpoints exist");
        }
    }

    graph
}

fn bench_mutation(c: &mut Criterion) {
    c.bench_function("add_1000_nodes", |b| {
        b.iter(|| {
            let mut graph = ColorGraph::new(false);
            for key in 0..1000 {
                graph.add_node(key, None);
            }
            graph
        })
    });

    c.bench_function("add_edge_existing_nodes", |b| {
        let mut graph = make_graph(1000, 0, false);
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let u = rng.gen_range(0..1000u64);
            let v = rng.gen_range(0..1000u64);
            graph.add_edge(u, v, None, None).expect("endpoints exist")
        })
    });

    c.bench_function("remove_node_degree_8", |b| {
        b.iter_batched(
            || make_graph(1000, 8, false),
            |mut graph| graph.remove_node(500).expect("node exists"),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_queries(c: &mut Criterion) {
    let graph = make_graph(1000, 8, false);

    c.bench_function("is_node", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| graph.is_node(rng.gen_range(0..2000u64)))
    });

    c.bench_function("neighbors", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| graph.neighbors(rng.gen_range(0..1000u64)))
    });

    c.bench_function("full_adjacency_map", |b| b.iter(|| graph.adjacency()));

    let small = make_graph(200, 4, false);
    c.bench_function("adjacency_matrix_200", |b| {
        b.iter(|| small.adjacency_matrix().expect("dense keys"))
    });
}

criterion_group!(benches, bench_mutation, bench_queries);
criterion_main!(benches);
