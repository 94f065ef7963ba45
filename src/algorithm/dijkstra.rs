use std::fmt::Debug;
use log::{debug, trace, warn};
use num_traits::PrimInt;

use crate::algorithm::{PathResult, ShortestPathAlgorithm};
use crate::config::{NegativeWeightPolicy, SolverConfig};
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra's algorithm with a linear selection scan instead of a priority queue
///
/// Each of the V rounds picks the unvisited vertex with the smallest tentative
/// distance (lowest handle on ties) and relaxes its outgoing edges, for
/// O(V² + E) overall.
///
/// Negative costs are not rejected unless the config asks for it. With them
/// present, an already visited vertex can still be improved by a later
/// relaxation, and the distances are not guaranteed to be optimal. Edges into
/// the source are never relaxed.
#[derive(Debug, Default, Clone)]
pub struct ScanDijkstra {
    config: SolverConfig,
}

impl ScanDijkstra {
    /// Creates a new solver with the default configuration
    pub fn new() -> Self {
        ScanDijkstra {
            config: SolverConfig::default(),
        }
    }

    pub fn with_config(config: SolverConfig) -> Self {
        ScanDijkstra { config }
    }

    /// Set how negative edge costs are handled
    pub fn with_negative_weights(mut self, policy: NegativeWeightPolicy) -> Self {
        self.config.negative_weights = policy;
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn check_weights<W, G>(&self, graph: &G) -> Result<()>
    where
        W: PrimInt + Debug,
        G: Graph<W>,
    {
        let (from, to, cost) = match graph.min_edge_weight() {
            Some(edge) if edge.2 < W::zero() => edge,
            _ => return Ok(()),
        };

        match self.config.negative_weights {
            NegativeWeightPolicy::Reject => Err(Error::NegativeWeight {
                from,
                to,
                cost: cost.to_i128().unwrap_or_default(),
            }),
            NegativeWeightPolicy::Allow => {
                warn!(
                    "Graph has negative edge {} -> {} (cost {:?}); distances may not be optimal",
                    from, to, cost
                );
                Ok(())
            }
        }
    }
}

/// Returns the unvisited vertex with the smallest tentative distance.
/// Unreached vertices rank after every reached one; ties go to the lowest handle.
fn select_closest<W>(distances: &[Option<W>], visited: &[bool]) -> Option<usize>
where
    W: PrimInt + Debug,
{
    let mut best: Option<usize> = None;
    for v in (0..distances.len()).filter(|&v| !visited[v]) {
        best = match best {
            None => Some(v),
            Some(b) if is_closer(distances[v], distances[b]) => Some(v),
            keep => keep,
        };
    }
    best
}

fn is_closer<W: PrimInt>(candidate: Option<W>, current: Option<W>) -> bool {
    match (candidate, current) {
        (Some(c), Some(best)) => c < best,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for ScanDijkstra
where
    W: PrimInt + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "ScanDijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<PathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        self.check_weights(graph)?;

        let n = graph.vertex_count();
        debug!(
            "Solving from {} over {} vertices and {} edges",
            source,
            n,
            graph.edge_count()
        );

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        distances[source] = Some(W::zero());

        for _ in 0..n {
            let u = match select_closest(&distances, &visited) {
                Some(u) => u,
                None => break,
            };
            visited[u] = true;

            // Every remaining vertex is unreached, nothing more can be relaxed
            let dist_u = match distances[u] {
                Some(d) => d,
                None => break,
            };

            for (v, cost) in graph.outgoing_edges(u) {
                // The source keeps cost 0 and no predecessor
                if v == source {
                    continue;
                }
                let candidate = dist_u.saturating_add(cost);
                let improves = match distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };
                if improves {
                    trace!("relax {} -> {}: {:?}", u, v, candidate);
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                }
            }
        }

        let result = PathResult::new(source, distances, predecessors);
        debug!(
            "Solve from {} reached {} of {} vertices",
            source,
            result.reachable_count(),
            n
        );
        Ok(result)
    }
}
