use std::collections::HashSet;
use std::fmt::Debug;
use log::warn;
use num_traits::PrimInt;
use crate::data_structures::VertexStack;
use crate::graph::Graph;
use crate::{Error, Result};

/// Result of a shortest path algorithm execution
///
/// A read-only snapshot: later changes to the graph are not reflected here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult<W>
where
    W: PrimInt + Debug,
{
    /// Source vertex ID
    source: usize,

    /// Distances from source to each vertex, `None` for unreached vertices
    distances: Vec<Option<W>>,

    /// Predecessor of each vertex on its best known path, `None` if it has none
    predecessors: Vec<Option<usize>>,
}

impl<W> PathResult<W>
where
    W: PrimInt + Debug,
{
    pub(crate) fn new(
        source: usize,
        distances: Vec<Option<W>>,
        predecessors: Vec<Option<usize>>,
    ) -> Self {
        debug_assert_eq!(distances.len(), predecessors.len());
        PathResult {
            source,
            distances,
            predecessors,
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn distances(&self) -> &[Option<W>] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    /// Number of vertices the graph had when this result was computed
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Cost of the best path found to `target`, or `None` if it was never reached
    pub fn path_cost(&self, target: usize) -> Result<Option<W>> {
        self.distances
            .get(target)
            .copied()
            .ok_or(Error::InvalidVertex(target))
    }

    pub fn is_reachable(&self, target: usize) -> Result<bool> {
        Ok(self.path_cost(target)?.is_some())
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Follows the predecessor chain back from `target` and returns the vertices
    /// from the source to `target`, both inclusive.
    ///
    /// An unreached `target` has no predecessor, so the result is just
    /// `[target]`. Check `path_cost` (or use `try_build_path`) before treating
    /// the sequence as a real path.
    ///
    /// Negative edges can leave a cycle in the predecessor table; walking into
    /// one fails with `Error::NegativeCycle`.
    pub fn build_path(&self, target: usize) -> Result<Vec<usize>> {
        if target >= self.predecessors.len() {
            return Err(Error::InvalidVertex(target));
        }

        let mut stack = VertexStack::new();
        let mut seen = HashSet::new();
        let mut current = Some(target);
        while let Some(vertex) = current {
            if !seen.insert(vertex) {
                warn!(
                    "Cycle in predecessor chain at vertex {} while building path to {}",
                    vertex, target
                );
                return Err(Error::NegativeCycle(vertex));
            }
            stack.push(vertex);
            current = self.predecessors[vertex];
        }

        Ok(stack.drain_lifo())
    }

    /// Like `build_path`, but fails with `Error::PathNotFound` when `target`
    /// was not reached from the source.
    pub fn try_build_path(&self, target: usize) -> Result<Vec<usize>> {
        if !self.is_reachable(target)? {
            return Err(Error::PathNotFound(target));
        }
        self.build_path(target)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: PrimInt + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<PathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
