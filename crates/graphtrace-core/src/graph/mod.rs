//! Weighted adjacency-list graph store
//!
//! Provides the mutable graph the search algorithms run against:
//! - idempotent vertex insertion and removal
//! - edge upsert and removal, mirrored on both sides when undirected
//! - loading from edge-list or square-matrix text files

pub mod load;
pub mod provider;
pub mod types;


use std::collections::BTreeMap;
use std::fmt::Write as _;

pub use load::{load_graph_file, parse_graph, GraphFormat, LoadOptions, LoadedGraph};
pub use provider::GraphProvider;
pub use types::{Edge, VertexId, Weight, DEFAULT_WEIGHT};

/// Adjacency-list weighted graph, directed or undirected.
///
/// Neighbor lists keep insertion order. There is at most one entry per
/// ordered `(from, to)` pair: adding an existing edge overwrites its weight.
/// In undirected mode every entry `(u, v, w)` has a mirror `(v, u, w)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<VertexId, Vec<(VertexId, Weight)>>,
    directed: bool,
}

fn upsert(list: &mut Vec<(VertexId, Weight)>, to: VertexId, weight: Weight) {
    match list.iter_mut().find(|(neighbor, _)| *neighbor == to) {
        Some(entry) => entry.1 = weight,
        None => list.push((to, weight)),
    }
}

impl Graph {
    /// Create an empty graph
    pub fn new(directed: bool) -> Self {
        Self {
            adjacency: BTreeMap::new(),
            directed,
        }
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    /// Switch between directed and undirected mode.
    ///
    /// The adjacency is rebuilt by re-adding every stored arc under the new
    /// mode. Going undirected mirrors each arc; when both `(u, v)` and
    /// `(v, u)` exist with different weights the later one wins.
    pub fn set_directed(&mut self, directed: bool) {
        if self.directed == directed {
            return;
        }

        let arcs: Vec<(VertexId, VertexId, Weight)> = self
            .adjacency
            .iter()
            .flat_map(|(&from, list)| list.iter().map(move |&(to, w)| (from, to, w)))
            .collect();

        for list in self.adjacency.values_mut() {
            list.clear();
        }
        self.directed = directed;

        for (from, to, weight) in arcs {
            self.add_edge(from, to, weight);
        }
    }

    /// Insert `id` with no neighbors. No-op if it already exists.
    pub fn add_vertex(&mut self, id: VertexId) {
        self.adjacency.entry(id).or_default();
    }

    /// Add or update the edge `(from, to)`, creating missing endpoints
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) {
        self.add_vertex(from);
        self.add_vertex(to);

        if let Some(list) = self.adjacency.get_mut(&from) {
            upsert(list, to, weight);
        }
        // A self-loop is its own mirror
        if !self.directed && from != to {
            if let Some(list) = self.adjacency.get_mut(&to) {
                upsert(list, from, weight);
            }
        }
    }

    /// Delete the edge `(from, to)` (and its mirror if undirected)
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) {
        if let Some(list) = self.adjacency.get_mut(&from) {
            list.retain(|(neighbor, _)| *neighbor != to);
        }
        if !self.directed {
            if let Some(list) = self.adjacency.get_mut(&to) {
                list.retain(|(neighbor, _)| *neighbor != from);
            }
        }
    }

    /// Delete `id` and every entry referring to it
    pub fn remove_vertex(&mut self, id: VertexId) {
        if self.adjacency.remove(&id).is_none() {
            return;
        }
        for list in self.adjacency.values_mut() {
            list.retain(|(neighbor, _)| *neighbor != id);
        }
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.adjacency.contains_key(&id)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges. Mirrored pairs of an undirected graph count once.
    pub fn edge_count(&self) -> usize {
        if self.directed {
            self.adjacency.values().map(Vec::len).sum()
        } else {
            self.edges().len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Vertex ids in ascending order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Neighbors of `id` in insertion order; empty if `id` is unknown
    pub fn neighbors(&self, id: VertexId) -> &[(VertexId, Weight)] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Neighbors of `id` ordered by neighbor id
    pub fn sorted_neighbors(&self, id: VertexId) -> Vec<(VertexId, Weight)> {
        let mut neighbors = self.neighbors(id).to_vec();
        neighbors.sort_by_key(|&(neighbor, _)| neighbor);
        neighbors
    }

    /// Weight of `(from, to)`; the first matching entry wins
    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        self.neighbors(from)
            .iter()
            .find(|(neighbor, _)| *neighbor == to)
            .map(|&(_, weight)| weight)
    }

    /// All edges, ordered by source then insertion order.
    ///
    /// Undirected graphs list each mirrored pair once, as `from <= to`.
    pub fn edges(&self) -> Vec<Edge> {
        self.adjacency
            .iter()
            .flat_map(|(&from, list)| {
                list.iter()
                    .map(move |&(to, weight)| Edge::new(from, to, weight))
            })
            .filter(|edge| self.directed || edge.from <= edge.to)
            .collect()
    }

    /// Render the graph as an edge list, one `from to weight` per line.
    ///
    /// Isolated vertices cannot be expressed in this format and are dropped.
    pub fn to_edge_list(&self) -> String {
        let mut out = String::new();
        for edge in self.edges() {
            let _ = writeln!(out, "{} {} {}", edge.from, edge.to, edge.weight);
        }
        out
    }
}
