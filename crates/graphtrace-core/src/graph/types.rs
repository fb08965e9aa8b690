use serde::Serialize;

/// Identifier of a vertex. Graph files use plain integers.
pub type VertexId = i64;

/// Weight of a single edge.
///
/// Weights are expected to be non-negative. Negative weights are accepted
/// by the store but make Dijkstra's results meaningless.
pub type Weight = i64;

/// Weight used when an edge is added without one
pub const DEFAULT_WEIGHT: Weight = 1;

/// A weighted edge as listed by [`Graph::edges`](super::Graph::edges)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Self { from, to, weight }
    }
}
