//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::Result;

/// What the solver does when the graph contains a negative edge cost
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeWeightPolicy {
    /// Solve anyway. Distances may be non-optimal on some negative-weight graphs.
    #[default]
    Allow,
    /// Fail with `Error::NegativeWeight` before solving
    Reject,
}

/// Options for `ScanDijkstra`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub negative_weights: NegativeWeightPolicy,
}

impl SolverConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
