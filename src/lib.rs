//! Scan SSSP - single-source shortest paths over a mutable, dense-indexed graph
//!
//! Vertices are zero-based handles into a vector of adjacency lists. Edges carry
//! integer costs (negative and zero included) and parallel edges are allowed.
//!
//! The solver is the classic vertex-selection variant of Dijkstra's algorithm:
//! every round scans all unvisited vertices and picks the one with the smallest
//! tentative distance, breaking ties by the lowest handle. No priority queue is
//! used, so a solve costs O(V² + E).

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::ScanDijkstra, solve_many, PathResult,
    ShortestPathAlgorithm,
};
pub use config::{NegativeWeightPolicy, SolverConfig};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::{Graph, MutableGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Negative edge weight {cost} on edge from {from} to {to}")]
    NegativeWeight { from: usize, to: usize, cost: i128 },

    #[error("Negative cycle detected at vertex {0}")]
    NegativeCycle(usize),

    #[error("No path from source to vertex {0}")]
    PathNotFound(usize),

    #[error("Empty edge cost range {start}..{end}")]
    EmptyCostRange { start: i64, end: i64 },

    #[error("Invalid solver configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
