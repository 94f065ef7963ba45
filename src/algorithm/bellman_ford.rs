//! Bellman-Ford single-source shortest paths.
//!
//! Slower than `ScanDijkstra` (O(V * E)) but exact for any edge costs as long
//! as no negative cycle is reachable from the source. Used as a reference
//! when checking the scan solver.

use std::fmt::Debug;
use log::debug;
use num_traits::PrimInt;

use crate::algorithm::{PathResult, ShortestPathAlgorithm};
use crate::graph::Graph;
use crate::{Error, Result};

#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFord;

impl BellmanFord {
    pub fn new() -> Self {
        BellmanFord
    }
}

/// One pass over every edge. Returns the last vertex whose distance improved.
fn relax_all<W, G>(
    graph: &G,
    distances: &mut [Option<W>],
    predecessors: &mut [Option<usize>],
) -> Option<usize>
where
    W: PrimInt + Debug,
    G: Graph<W>,
{
    let mut updated = None;
    for u in 0..graph.vertex_count() {
        let dist_u = match distances[u] {
            Some(d) => d,
            None => continue,
        };
        for (v, cost) in graph.outgoing_edges(u) {
            let candidate = dist_u.saturating_add(cost);
            if distances[v].map_or(true, |current| candidate < current) {
                distances[v] = Some(candidate);
                predecessors[v] = Some(u);
                updated = Some(v);
            }
        }
    }
    updated
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: PrimInt + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "BellmanFord"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<PathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Some(W::zero());

        for round in 1..n {
            if relax_all(graph, &mut distances, &mut predecessors).is_none() {
                debug!("Bellman-Ford from {} converged after {} rounds", source, round);
                return Ok(PathResult::new(source, distances, predecessors));
            }
        }

        // V-th pass: anything still improving sits on or behind a negative cycle
        if let Some(v) = relax_all(graph, &mut distances, &mut predecessors) {
            // n steps back along the predecessors always land on the cycle itself
            let mut on_cycle = v;
            for _ in 0..n {
                on_cycle = predecessors[on_cycle].unwrap_or(on_cycle);
            }
            return Err(Error::NegativeCycle(on_cycle));
        }

        Ok(PathResult::new(source, distances, predecessors))
    }
}
