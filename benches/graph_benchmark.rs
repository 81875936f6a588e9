use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use keygraph::Graph;

/// Ring over `n` vertices plus a chord every `stride` vertices, with varied weights.
fn ring_with_chords(n: usize, stride: usize, is_directed: bool) -> Graph {
    let mut graph = Graph::create(n, is_directed).unwrap();
    for key in 0..n as u64 {
        graph.add_vertex(key).unwrap();
    }
    let n = n as u64;
    for i in 0..n {
        graph.add_edge(i, (i + 1) % n, (i % 7 + 1) as i64).unwrap();
        if i % stride as u64 == 0 {
            graph.add_edge(i, (i * 31 + 17) % n, (i % 13 + 2) as i64).unwrap();
        }
    }
    graph
}

fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");
    for &size in &[100usize, 1000] {
        group.bench_with_input(BenchmarkId::new("ring_with_chords", size), &size, |b, &size| {
            b.iter(|| black_box(ring_with_chords(size, 4, false)));
        });
        let matrix: Vec<Vec<i64>> = (0..size)
            .map(|i| (0..size).map(|j| i64::from((i * 7 + j) % 11 == 0)).collect())
            .collect();
        group.bench_with_input(BenchmarkId::new("from_adjacency_matrix", size), &matrix, |b, m| {
            b.iter(|| black_box(Graph::from_adjacency_matrix(m, keygraph::MatrixKind::Binary, true).unwrap()));
        });
    }
    group.finish();
}

fn bench_graph_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_traversal");
    for &size in &[100usize, 1000] {
        let graph = ring_with_chords(size, 4, false);
        group.bench_with_input(BenchmarkId::new("dfs", size), &graph, |b, g| {
            b.iter(|| {
                let mut count = 0usize;
                g.dfs(0, |_| count += 1).unwrap();
                black_box(count)
            });
        });
        group.bench_with_input(BenchmarkId::new("bfs", size), &graph, |b, g| {
            b.iter(|| {
                let mut count = 0usize;
                g.bfs(0, |_| count += 1).unwrap();
                black_box(count)
            });
        });
        group.bench_with_input(BenchmarkId::new("has_cycle", size), &graph, |b, g| {
            b.iter(|| black_box(g.has_cycle().unwrap()));
        });
    }
    group.finish();
}

fn bench_graph_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_shortest_path");
    for &size in &[100usize, 500] {
        let graph = ring_with_chords(size, 3, true);
        let last = size as u64 - 1;
        group.bench_with_input(BenchmarkId::new("dijkstra", size), &graph, |b, g| {
            b.iter(|| black_box(g.shortest_path_dijkstra(0, last).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("bellman_ford", size), &graph, |b, g| {
            b.iter(|| black_box(g.shortest_path_bellman_ford(0, last).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("unweighted", size), &graph, |b, g| {
            b.iter(|| black_box(g.shortest_path_unweighted(0, last).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_graph_build,
    bench_graph_traversal,
    bench_graph_shortest_path
);
criterion_main!(benches);
