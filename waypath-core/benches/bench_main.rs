use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use waypath_core::prelude::*;

/// Square grid with bidirectional edges and weights derived from coordinates
fn grid_graph(side: u32) -> Graph<u32, u32> {
    let mut graph = Graph::with_capacity((side * side) as usize);
    for row in 0..side {
        for col in 0..side {
            let node = row * side + col;
            let weight = 1 + (row * 7 + col * 13) % 10;
            if col + 1 < side {
                graph.add_edge(node, node + 1, weight);
                graph.add_edge(node + 1, node, weight);
            }
            if row + 1 < side {
                graph.add_edge(node, node + side, weight);
                graph.add_edge(node + side, node, weight);
            }
        }
    }
    graph
}

fn bench_queue_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path_tree");

    for side in [16u32, 64] {
        let graph = grid_graph(side);
        for strategy in [QueueStrategy::BinaryHeap, QueueStrategy::SortedVec] {
            let config = SearchConfig::default().with_queue(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), side * side),
                &graph,
                |b, graph| b.iter(|| shortest_path_tree(graph, black_box(&0), None, &config)),
            );
        }
    }

    group.finish();
}

fn bench_find_path(c: &mut Criterion) {
    let side = 64;
    let graph = grid_graph(side);
    let target = side * side - 1;
    let early = SearchConfig::default().with_stop_at_destination(true);

    c.bench_function("find_path_corner_to_corner", |b| {
        b.iter(|| find_path(&graph, black_box(&0), black_box(&target)))
    });
    c.bench_function("find_route_early_exit", |b| {
        b.iter(|| find_route(&graph, black_box(&0), black_box(&(side + 1)), &early))
    });
}

criterion_group!(benches, bench_queue_strategies, bench_find_path);
criterion_main!(benches);
