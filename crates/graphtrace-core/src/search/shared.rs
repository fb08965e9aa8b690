use std::collections::HashMap;

use tracing::debug;

use super::Algorithm;
use crate::graph::{GraphProvider, VertexId, Weight};
use crate::trace::{format_path, Event, Outcome, Step, Trace};

/// Frontier snapshot once the run is over and nothing is pending
pub const FRONTIER_EMPTY: &str = "[]";

/// Frontier snapshot for the final path highlight
pub const FRONTIER_DONE: &str = "done";

/// Parent pointers of a search tree; the root maps to `None`
pub type ParentMap = HashMap<VertexId, Option<VertexId>>;

/// Render vertices as `[a, b, c]`
pub fn format_list<I>(nodes: I) -> String
where
    I: IntoIterator<Item = VertexId>,
{
    let items: Vec<String> = nodes.into_iter().map(|n| n.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Route from the root of `parent` to `node`, root first.
///
/// A vertex without a parent entry is its own route.
pub fn route_to(parent: &ParentMap, node: VertexId) -> Vec<VertexId> {
    let mut route = vec![node];
    let mut current = node;
    while let Some(&Some(prev)) = parent.get(&current) {
        route.push(prev);
        current = prev;
    }
    route.reverse();
    route
}

/// Arrow-joined route from the root of `parent` to `node`
pub fn path_string(parent: &ParentMap, node: VertexId) -> String {
    format_path(&route_to(parent, node))
}

/// Sum the weights along the parent chain from `end` back to `start`.
///
/// Weights are looked up in the graph as it is now. A broken chain costs 0,
/// a missing edge contributes 0. The sum saturates at the `Weight` bounds.
pub fn cost_from_parents(
    graph: &dyn GraphProvider,
    parent: &ParentMap,
    start: VertexId,
    end: VertexId,
) -> Weight {
    let mut cost = 0;
    let mut current = end;
    while current != start {
        let Some(&Some(prev)) = parent.get(&current) else {
            return 0;
        };
        cost = graph.weight(prev, current).unwrap_or(0).saturating_add(cost);
        current = prev;
    }
    cost
}

/// Sum the weights between consecutive vertices of `route`, saturating
pub fn cost_along(graph: &dyn GraphProvider, route: &[VertexId]) -> Weight {
    route
        .windows(2)
        .map(|pair| graph.weight(pair[0], pair[1]).unwrap_or(0))
        .fold(0, Weight::saturating_add)
}

/// Append-only step buffer shared by the algorithms
#[derive(Debug, Default)]
pub struct Recorder {
    steps: Vec<Step>,
}

impl Recorder {
    pub fn emit(
        &mut self,
        event: Event,
        description: impl Into<String>,
        path: impl Into<String>,
        frontier: impl Into<String>,
        line: Option<usize>,
    ) {
        self.steps.push(Step {
            event,
            description: description.into(),
            path: path.into(),
            frontier: frontier.into(),
            line,
        });
    }

    /// Emit the final path: its first vertex, then one edge and one vertex
    /// per hop. Nothing is emitted for an empty route.
    pub fn highlight_path(&mut self, route: &[VertexId], path: &str) {
        let Some(&first) = route.first() else {
            return;
        };
        self.emit(
            Event::HighlightPathNode { node: first },
            "Color the path",
            path,
            FRONTIER_DONE,
            None,
        );
        for pair in route.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            self.emit(
                Event::HighlightPathEdge { from, to },
                format!("Path: {} -> {}", from, to),
                path,
                FRONTIER_DONE,
                None,
            );
            self.emit(
                Event::HighlightPathNode { node: to },
                "Color the path",
                path,
                FRONTIER_DONE,
                None,
            );
        }
    }

    pub fn finish(
        self,
        algorithm: Algorithm,
        start: VertexId,
        end: Option<VertexId>,
        cost: Weight,
        outcome: Outcome,
    ) -> Trace {
        debug!(
            algorithm = %algorithm,
            steps = self.steps.len(),
            cost,
            outcome = ?outcome,
            "search_complete"
        );
        Trace {
            algorithm,
            start,
            end,
            steps: self.steps,
            cost,
            outcome,
        }
    }
}
