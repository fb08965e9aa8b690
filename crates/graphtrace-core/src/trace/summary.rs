use serde::Serialize;

use super::Trace;
use crate::graph::{Graph, VertexId, Weight};
use crate::search::Algorithm;

/// One row of an algorithm comparison: size of the input, length of the
/// trace, cost found and the textbook complexity estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub algorithm: Algorithm,
    pub start: VertexId,
    pub end: Option<VertexId>,
    pub vertices: usize,
    pub edges: usize,
    pub steps: usize,
    pub cost: Weight,
    pub complexity: String,
}

impl Summary {
    pub fn new(trace: &Trace, graph: &Graph) -> Self {
        let vertices = graph.vertex_count();
        let edges = graph.edge_count();
        Self {
            algorithm: trace.algorithm,
            start: trace.start,
            end: trace.end,
            vertices,
            edges,
            steps: trace.len(),
            cost: trace.cost,
            complexity: complexity(trace.algorithm, vertices, edges),
        }
    }

    /// `start->target`, or `start->All` for an exhaustive run
    pub fn route_label(&self) -> String {
        match self.end {
            Some(end) => format!("{}->{}", self.start, end),
            None => format!("{}->All", self.start),
        }
    }

    /// The cost, or `-` when no path was found or requested
    pub fn cost_label(&self) -> String {
        if self.cost > 0 {
            self.cost.to_string()
        } else {
            "-".to_string()
        }
    }
}

/// Complexity class with its value for this input size
pub fn complexity(algorithm: Algorithm, vertices: usize, edges: usize) -> String {
    let size = vertices + edges;
    match algorithm {
        Algorithm::Bfs | Algorithm::Dfs => format!("O(V+E) ~ {}", size),
        Algorithm::Dijkstra => {
            let estimate = if vertices > 0 {
                (size as f64 * (vertices as f64).log2()) as u64
            } else {
                0
            };
            format!("O((V+E)logV) ~ {}", estimate)
        }
    }
}
