//! Instrumented graph searches
//!
//! Every algorithm runs to completion and returns a [`Trace`] of the
//! decisions it took:
//! - `bfs`: breadth-first search, fewest hops
//! - `dfs`: depth-first search over an explicit path stack
//! - `dijkstra`: weighted shortest path with a lazy-deletion heap
//! - `shared`: path rendering, cost reconstruction and step recording

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod shared;


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphTraceError;
use crate::graph::{GraphProvider, VertexId};
use crate::trace::Trace;

pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;

/// The available search algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
        }
    }
}

impl FromStr for Algorithm {
    type Err = GraphTraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            other => Err(GraphTraceError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run `algorithm` from `start`.
///
/// With `end` set the search stops at the target and the trace carries the
/// path cost. Without it every vertex reachable from `start` is explored and
/// the cost is 0.
pub fn run(
    algorithm: Algorithm,
    graph: &dyn GraphProvider,
    start: VertexId,
    end: Option<VertexId>,
) -> Trace {
    match algorithm {
        Algorithm::Bfs => bfs(graph, start, end),
        Algorithm::Dfs => dfs(graph, start, end),
        Algorithm::Dijkstra => dijkstra(graph, start, end),
    }
}
