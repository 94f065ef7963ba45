use std::fmt::Debug;
use num_traits::PrimInt;

use crate::Result;

/// Trait representing a weighted directed multigraph with dense vertex handles
pub trait Graph<W>: Debug
where
    W: PrimInt + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, counting parallel edges separately
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's at least one edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edge_multiplicity(from, to) > 0
    }

    /// Number of parallel edges stored from `from` to `to`
    fn edge_multiplicity(&self, from: usize, to: usize) -> usize {
        if !self.has_vertex(from) {
            return 0;
        }
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .count()
    }

    /// Smallest edge cost in the graph, with the edge carrying it
    fn min_edge_weight(&self) -> Option<(usize, usize, W)> {
        (0..self.vertex_count())
            .flat_map(|u| self.outgoing_edges(u).map(move |(v, w)| (u, v, w)))
            .min_by_key(|&(_, _, w)| w)
    }
}

/// Trait for mutable graph operations
///
/// Vertices are never removed, so handles stay valid for the graph's lifetime.
pub trait MutableGraph<W>: Graph<W>
where
    W: PrimInt + Debug,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds `count` vertices, equivalent to calling `add_vertex` that many times
    fn add_vertices(&mut self, count: usize) {
        for _ in 0..count {
            self.add_vertex();
        }
    }

    /// Appends an edge `from -> to`; with `bidirectional` also appends `to -> from`.
    /// Existing edges between the pair are left untouched.
    fn add_edge(&mut self, from: usize, to: usize, cost: W, bidirectional: bool) -> Result<()>;

    /// Removes every edge `from -> to` and returns how many were removed
    fn remove_edges(&mut self, from: usize, to: usize) -> Result<usize>;
}
