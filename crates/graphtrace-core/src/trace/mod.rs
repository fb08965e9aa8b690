//! Event traces produced by the search algorithms
//!
//! A [`Trace`] is the complete, ordered list of [`Step`]s emitted by one
//! run, plus the cost of the path that was found. It is a plain value:
//! editing the graph afterwards does not affect it.

pub mod pseudocode;
pub mod replay;
pub mod summary;

use std::fmt;

use serde::Serialize;

use crate::graph::{VertexId, Weight};
use crate::search::Algorithm;

pub use pseudocode::pseudocode;
pub use replay::{Replay, ReplayState};
pub use summary::Summary;

/// A single decision taken by a search algorithm.
///
/// Each variant carries only the vertices meaningful to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// A vertex was reached, enqueued, found, or finished
    Visit { node: VertexId },
    /// A vertex was taken off the frontier (or resumed, in DFS)
    Processing { node: VertexId },
    /// The loop condition over the frontier is evaluated
    CheckLoop,
    /// An edge out of the current vertex is examined
    CheckEdge { from: VertexId, to: VertexId },
    /// An edge is followed to a newly discovered or improved vertex
    Traverse { from: VertexId, to: VertexId },
    /// A tentative distance was lowered
    UpdateDist { node: VertexId, dist: Weight },
    /// DFS returned from `to` to `from` without success
    Backtrack { from: VertexId, to: VertexId },
    /// The target could not be reached from `start`
    NotFound { start: VertexId },
    /// Final path, vertex by vertex
    HighlightPathNode { node: VertexId },
    /// Final path, edge by edge
    HighlightPathEdge { from: VertexId, to: VertexId },
}

/// Fieldless discriminant of [`Event`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Visit,
    Processing,
    CheckLoop,
    CheckEdge,
    Traverse,
    UpdateDist,
    Backtrack,
    NotFound,
    HighlightPathNode,
    HighlightPathEdge,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Visit => "visit",
            StepKind::Processing => "processing",
            StepKind::CheckLoop => "check_loop",
            StepKind::CheckEdge => "check_edge",
            StepKind::Traverse => "traverse",
            StepKind::UpdateDist => "update_dist",
            StepKind::Backtrack => "backtrack",
            StepKind::NotFound => "not_found",
            StepKind::HighlightPathNode => "highlight_path_node",
            StepKind::HighlightPathEdge => "highlight_path_edge",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Event {
    pub fn kind(&self) -> StepKind {
        match self {
            Event::Visit { .. } => StepKind::Visit,
            Event::Processing { .. } => StepKind::Processing,
            Event::CheckLoop => StepKind::CheckLoop,
            Event::CheckEdge { .. } => StepKind::CheckEdge,
            Event::Traverse { .. } => StepKind::Traverse,
            Event::UpdateDist { .. } => StepKind::UpdateDist,
            Event::Backtrack { .. } => StepKind::Backtrack,
            Event::NotFound { .. } => StepKind::NotFound,
            Event::HighlightPathNode { .. } => StepKind::HighlightPathNode,
            Event::HighlightPathEdge { .. } => StepKind::HighlightPathEdge,
        }
    }

    /// The vertex the event is about, if any
    pub fn primary(&self) -> Option<VertexId> {
        match *self {
            Event::Visit { node }
            | Event::Processing { node }
            | Event::UpdateDist { node, .. }
            | Event::HighlightPathNode { node } => Some(node),
            Event::CheckEdge { from, .. }
            | Event::Traverse { from, .. }
            | Event::Backtrack { from, .. }
            | Event::HighlightPathEdge { from, .. } => Some(from),
            Event::NotFound { start } => Some(start),
            Event::CheckLoop => None,
        }
    }

    /// The second value of the event: the far end of an edge, or the new
    /// distance for [`Event::UpdateDist`]
    pub fn secondary(&self) -> Option<i64> {
        match *self {
            Event::CheckEdge { to, .. }
            | Event::Traverse { to, .. }
            | Event::Backtrack { to, .. }
            | Event::HighlightPathEdge { to, .. } => Some(to),
            Event::UpdateDist { dist, .. } => Some(dist),
            _ => None,
        }
    }

    /// Whether the event refers to `vertex` in any position
    pub fn mentions(&self, vertex: VertexId) -> bool {
        match *self {
            Event::UpdateDist { node, .. } => node == vertex,
            _ => self.primary() == Some(vertex) || self.secondary() == Some(vertex),
        }
    }
}

/// An emitted event together with the snapshots taken when it was emitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    #[serde(flatten)]
    pub event: Event,
    pub description: String,
    /// Best-known path to the vertex being processed, e.g. `1 -> 3 -> 2`
    pub path: String,
    /// Contents of the frontier, e.g. `[2, 5]` or `[(1, 3), (4, 2)]`
    pub frontier: String,
    /// Index into [`pseudocode`] for the running algorithm
    pub line: Option<usize>,
}

impl Step {
    pub fn kind(&self) -> StepKind {
        self.event.kind()
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The target was reached
    Found,
    /// The frontier ran out (or, with no target, the run completed)
    Exhausted,
}

/// Everything one algorithm run emitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    pub algorithm: Algorithm,
    pub start: VertexId,
    pub end: Option<VertexId>,
    pub steps: Vec<Step>,
    /// Total weight of the found path; 0 without a target or when unreachable
    pub cost: Weight,
    pub outcome: Outcome,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn found(&self) -> bool {
        self.outcome == Outcome::Found
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> + '_ {
        self.steps.iter().map(|step| &step.event)
    }

    /// Highlighted path, read back from the [`Event::HighlightPathNode`] events
    pub fn path(&self) -> Vec<VertexId> {
        self.events()
            .filter_map(|event| match *event {
                Event::HighlightPathNode { node } => Some(node),
                _ => None,
            })
            .collect()
    }

    /// Highlighted path edges, read back from the [`Event::HighlightPathEdge`] events
    pub fn path_edges(&self) -> Vec<(VertexId, VertexId)> {
        self.events()
            .filter_map(|event| match *event {
                Event::HighlightPathEdge { from, to } => Some((from, to)),
                _ => None,
            })
            .collect()
    }

    /// Number of steps of the given kind
    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|step| step.kind() == kind).count()
    }
}

/// Render a path as `a -> b -> c`
pub fn format_path(nodes: &[VertexId]) -> String {
    nodes
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_serializes_flat() {
        let step = Step {
            event: Event::CheckEdge { from: 1, to: 3 },
            description: "Consider 3".to_string(),
            path: "1".to_string(),
            frontier: "[2]".to_string(),
            line: Some(4),
        };
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["kind"], "check_edge");
        assert_eq!(json["from"], 1);
        assert_eq!(json["to"], 3);
        assert_eq!(json["line"], 4);
        assert_eq!(json["frontier"], "[2]");
    }

    #[test]
    fn test_check_loop_has_no_vertices() {
        let json = serde_json::to_value(Event::CheckLoop).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "check_loop" }));
        assert_eq!(Event::CheckLoop.primary(), None);
    }

    #[test]
    fn test_kind_names_match_serde_tags() {
        let events = [
            Event::Visit { node: 1 },
            Event::Processing { node: 1 },
            Event::CheckLoop,
            Event::CheckEdge { from: 1, to: 2 },
            Event::Traverse { from: 1, to: 2 },
            Event::UpdateDist { node: 2, dist: 5 },
            Event::Backtrack { from: 1, to: 2 },
            Event::NotFound { start: 1 },
            Event::HighlightPathNode { node: 1 },
            Event::HighlightPathEdge { from: 1, to: 2 },
        ];
        for event in events {
            let json = serde_json::to_value(event).unwrap();
            assert_eq!(json["kind"], event.kind().as_str());
        }
    }

    #[test]
    fn test_update_dist_does_not_mention_distance() {
        let event = Event::UpdateDist { node: 2, dist: 4 };
        assert!(event.mentions(2));
        assert!(!event.mentions(4));
        assert_eq!(event.secondary(), Some(4));
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&[1, 3, 2]), "1 -> 3 -> 2");
        assert_eq!(format_path(&[7]), "7");
        assert_eq!(format_path(&[]), "");
    }
}
