use super::types::{VertexId, Weight};
use super::Graph;

/// Read-only view of a weighted graph, as needed by the search algorithms
pub trait GraphProvider {
    /// Whether `id` is a vertex of the graph
    fn contains(&self, id: VertexId) -> bool;

    /// Total number of vertices, reachable or not
    fn vertex_count(&self) -> usize;

    /// Outgoing `(neighbor, weight)` pairs of `id`, ascending by neighbor id
    fn sorted_neighbors(&self, id: VertexId) -> Vec<(VertexId, Weight)>;

    /// Weight of the first stored `(from, to)` entry
    fn weight(&self, from: VertexId, to: VertexId) -> Option<Weight>;
}

impl GraphProvider for Graph {
    fn contains(&self, id: VertexId) -> bool {
        Graph::contains(self, id)
    }

    fn vertex_count(&self) -> usize {
        Graph::vertex_count(self)
    }

    fn sorted_neighbors(&self, id: VertexId) -> Vec<(VertexId, Weight)> {
        Graph::sorted_neighbors(self, id)
    }

    fn weight(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        Graph::weight(self, from, to)
    }
}
