pub mod traits;
pub mod dijkstra;
pub mod bellman_ford;

pub use traits::{PathResult, ShortestPathAlgorithm};

use std::fmt::Debug;
use num_traits::PrimInt;
use rayon::prelude::*;

use crate::graph::Graph;
use crate::Result;

/// Runs `algorithm` once per source, in parallel, over a shared read-only graph.
///
/// Results come back in the order of `sources`. The first invalid source fails the
/// whole batch.
pub fn solve_many<W, G, A>(
    algorithm: &A,
    graph: &G,
    sources: &[usize],
) -> Result<Vec<PathResult<W>>>
where
    W: PrimInt + Debug + Send,
    G: Graph<W> + Sync,
    A: ShortestPathAlgorithm<W, G> + Sync,
{
    sources
        .par_iter()
        .map(|&source| algorithm.compute_shortest_paths(graph, source))
        .collect()
}
