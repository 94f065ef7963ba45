use crate::algorithm::dijkstra::ScanDijkstra;
use crate::algorithm::{PathResult, ShortestPathAlgorithm};
use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::PrimInt;
use std::fmt::Debug;

/// An outgoing arc stored in its source vertex's adjacency list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    pub target: usize,
    pub cost: W,
}

/// A directed multigraph using one adjacency list per vertex
///
/// Vertex handles are indices into `adjacency` and are assigned in creation order.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph<W>
where
    W: PrimInt + Debug,
{
    /// Outgoing edges for each vertex, indexed by vertex handle
    adjacency: Vec<Vec<Edge<W>>>,
}

impl<W> DirectedGraph<W>
where
    W: PrimInt + Debug,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: Vec::new(),
        }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// Outgoing edges of `vertex` as stored, or an error for an unknown handle
    pub fn edges(&self, vertex: usize) -> Result<&[Edge<W>]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(Error::InvalidVertex(vertex))
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.adjacency
            .iter()
            .flatten()
            .all(|edge| edge.cost >= W::zero())
    }

    /// Runs the default vertex-selection solver from `source`
    pub fn dijkstra(&self, source: usize) -> Result<PathResult<W>> {
        ScanDijkstra::new().compute_shortest_paths(self, source)
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::InvalidVertex(vertex))
        }
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: PrimInt + Debug,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().map(|e| (e.target, e.cost))),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: PrimInt + Debug,
{
    fn add_vertex(&mut self) -> usize {
        let new_id = self.adjacency.len();
        self.adjacency.push(Vec::new());
        new_id
    }

    fn add_vertices(&mut self, count: usize) {
        self.adjacency
            .resize_with(self.adjacency.len() + count, Vec::new);
    }

    fn add_edge(&mut self, from: usize, to: usize, cost: W, bidirectional: bool) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        self.adjacency[from].push(Edge { target: to, cost });
        if bidirectional {
            self.adjacency[to].push(Edge { target: from, cost });
        }
        Ok(())
    }

    fn remove_edges(&mut self, from: usize, to: usize) -> Result<usize> {
        self.check_vertex(from)?;

        let outgoing = &mut self.adjacency[from];
        let len_before = outgoing.len();
        outgoing.retain(|edge| edge.target != to);
        Ok(len_before - outgoing.len())
    }
}
