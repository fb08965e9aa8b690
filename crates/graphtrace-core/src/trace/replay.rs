//! Step-by-step replay of a finished trace
//!
//! A [`Replay`] walks a [`Trace`] one event at a time and keeps the state a
//! renderer needs: which vertex is being processed, what has been visited,
//! the current distances and the highlighted path. The state after `n`
//! steps depends only on the first `n` events.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::{Event, Step, StepKind, Trace};
use crate::graph::{VertexId, Weight};
use crate::search::Algorithm;

/// State reconstructed from a prefix of a trace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplayState {
    /// Number of steps applied so far
    pub position: usize,
    /// Kind of the last applied step
    pub last_kind: Option<StepKind>,
    pub description: String,
    /// Vertex most recently taken off the frontier
    pub current: Option<VertexId>,
    /// Edge most recently examined or followed
    pub active_edge: Option<(VertexId, VertexId)>,
    /// Vertices that produced a `visit` event
    pub visited: BTreeSet<VertexId>,
    /// Vertices that produced a `processing` event
    pub processed: BTreeSet<VertexId>,
    /// Latest tentative distances (Dijkstra only)
    pub distances: BTreeMap<VertexId, Weight>,
    pub path_nodes: Vec<VertexId>,
    pub path_edges: Vec<(VertexId, VertexId)>,
    /// Path snapshot of the last applied step
    pub path: String,
    /// Frontier snapshot of the last applied step
    pub frontier: String,
    pub line: Option<usize>,
    pub not_found: bool,
}

impl ReplayState {
    fn initial(trace: &Trace) -> Self {
        let mut state = Self::default();
        if trace.algorithm == Algorithm::Dijkstra {
            state.distances.insert(trace.start, 0);
        }
        state
    }

    fn apply(&mut self, step: &Step) {
        match step.event {
            Event::Visit { node } => {
                self.visited.insert(node);
            }
            Event::Processing { node } => {
                self.current = Some(node);
                self.processed.insert(node);
            }
            Event::CheckLoop => {}
            Event::CheckEdge { from, to }
            | Event::Traverse { from, to }
            | Event::Backtrack { from, to } => {
                self.active_edge = Some((from, to));
            }
            Event::UpdateDist { node, dist } => {
                self.distances.insert(node, dist);
            }
            Event::NotFound { .. } => {
                self.not_found = true;
            }
            Event::HighlightPathNode { node } => {
                self.path_nodes.push(node);
            }
            Event::HighlightPathEdge { from, to } => {
                self.path_edges.push((from, to));
            }
        }

        self.position += 1;
        self.last_kind = Some(step.kind());
        self.description.clone_from(&step.description);
        self.path.clone_from(&step.path);
        self.frontier.clone_from(&step.frontier);
        self.line = step.line;
    }
}

/// Cursor over a trace
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    trace: &'a Trace,
    state: ReplayState,
}

impl<'a> Replay<'a> {
    pub fn new(trace: &'a Trace) -> Self {
        Self {
            trace,
            state: ReplayState::initial(trace),
        }
    }

    pub fn trace(&self) -> &'a Trace {
        self.trace
    }

    pub fn state(&self) -> &ReplayState {
        &self.state
    }

    pub fn position(&self) -> usize {
        self.state.position
    }

    pub fn is_finished(&self) -> bool {
        self.state.position >= self.trace.steps.len()
    }

    /// Apply the next step and return it, or `None` at the end of the trace
    pub fn step(&mut self) -> Option<&'a Step> {
        let step = self.trace.steps.get(self.state.position)?;
        self.state.apply(step);
        Some(step)
    }

    /// Go back to before the first step
    pub fn reset(&mut self) {
        self.state = ReplayState::initial(self.trace);
    }

    /// Move so that exactly `position` steps are applied (clamped to the
    /// trace length). Moving backwards replays from the start.
    pub fn seek(&mut self, position: usize) -> &ReplayState {
        let target = position.min(self.trace.steps.len());
        if target < self.state.position {
            self.reset();
        }
        while self.state.position < target {
            self.step();
        }
        &self.state
    }

    /// Apply every remaining step
    pub fn finish(&mut self) -> &ReplayState {
        self.seek(self.trace.steps.len())
    }
}
