use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scan_sssp::algorithm::traits::ShortestPathAlgorithm;
use scan_sssp::graph::generators::random_graph;
use scan_sssp::{BellmanFord, ScanDijkstra};

fn bench_solvers(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut group = c.benchmark_group("sssp");
    // Edge factor: average number of edges per vertex
    let edge_factor = 2.0;

    for &size in &[100usize, 500, 2_000] {
        let graph = random_graph(size, edge_factor, 1..100, 42).expect("graph generation");

        group.bench_with_input(BenchmarkId::new("ScanDijkstra", size), &graph, |b, g| {
            let solver = ScanDijkstra::new();
            b.iter(|| solver.compute_shortest_paths(g, black_box(0)).expect("solve"))
        });

        if size <= 500 {
            group.bench_with_input(BenchmarkId::new("BellmanFord", size), &graph, |b, g| {
                let solver = BellmanFord::new();
                b.iter(|| solver.compute_shortest_paths(g, black_box(0)).expect("solve"))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
