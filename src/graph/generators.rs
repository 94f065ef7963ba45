use crate::graph::{DirectedGraph, MutableGraph};
use crate::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// Generates a random directed multigraph with `n` vertices and about
/// `edge_factor * n` edges whose costs are drawn from `costs`.
///
/// The same `seed` always yields the same graph. Self-loops and parallel edges
/// may appear, matching what callers can build by hand. An empty `costs` range
/// fails with `Error::EmptyCostRange`.
pub fn random_graph(
    n: usize,
    edge_factor: f64,
    costs: Range<i64>,
    seed: u64,
) -> Result<DirectedGraph<i64>> {
    if costs.is_empty() {
        return Err(Error::EmptyCostRange {
            start: costs.start,
            end: costs.end,
        });
    }

    let mut graph = DirectedGraph::with_capacity(n);
    if n == 0 {
        return Ok(graph);
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let cost = rng.gen_range(costs.clone());
        graph.add_edge(u, v, cost, false)?;
    }

    Ok(graph)
}

/// Generates a `width` x `height` grid where each cell is linked to its
/// right and lower neighbours in both directions with the given cost.
///
/// Vertex `y * width + x` is the cell at column `x`, row `y`.
pub fn grid_graph(width: usize, height: usize, cost: i64) -> Result<DirectedGraph<i64>> {
    let mut graph = DirectedGraph::new();
    graph.add_vertices(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                graph.add_edge(vertex, vertex + 1, cost, true)?;
            }
            if y + 1 < height {
                graph.add_edge(vertex, vertex + width, cost, true)?;
            }
        }
    }

    Ok(graph)
}
