use std::collections::HashSet;

use super::shared::{cost_along, format_list, Recorder, FRONTIER_DONE, FRONTIER_EMPTY};
use super::Algorithm;
use crate::graph::{GraphProvider, VertexId, Weight};
use crate::trace::{format_path, Event, Outcome, Trace};

/// One vertex on the live path, with the neighbors still to examine
struct Frame {
    node: VertexId,
    neighbors: Vec<(VertexId, Weight)>,
    next: usize,
}

/// State tracked during a depth-first search
struct DfsState<'g> {
    graph: &'g dyn GraphProvider,
    end: Option<VertexId>,
    total: usize,
    visited: HashSet<VertexId>,
    frames: Vec<Frame>,
    recorder: Recorder,
}

impl<'g> DfsState<'g> {
    fn stack(&self) -> Vec<VertexId> {
        self.frames.iter().map(|frame| frame.node).collect()
    }

    fn path(&self) -> String {
        format_path(&self.stack())
    }

    fn frontier(&self) -> String {
        format_list(self.stack())
    }

    fn emit(&mut self, event: Event, description: String, line: usize) {
        let (path, frontier) = (self.path(), self.frontier());
        self.recorder.emit(event, description, path, frontier, Some(line));
    }

    /// Push `u` onto the path. Returns true when the search is complete.
    fn enter(&mut self, u: VertexId) -> bool {
        self.visited.insert(u);
        self.frames.push(Frame {
            node: u,
            neighbors: self.graph.sorted_neighbors(u),
            next: 0,
        });
        self.emit(Event::Processing { node: u }, format!("Explore {}", u), 1);

        let target_found = self.end == Some(u);
        let all_visited = self.end.is_none() && self.visited.len() == self.total;
        if target_found || all_visited {
            let description = if target_found {
                format!("Found target {}!", u)
            } else {
                "Every vertex visited!".to_string()
            };
            let path = self.path();
            self.recorder.emit(
                Event::Visit { node: u },
                description,
                path,
                FRONTIER_DONE,
                Some(2),
            );
            return true;
        }
        false
    }

    /// Advance the top frame by one neighbor, or unwind it. Returns
    /// `Some(found)` once the search is over.
    fn advance(&mut self) -> Option<bool> {
        let Some(top) = self.frames.last_mut() else {
            return Some(false);
        };
        let u = top.node;

        if let Some(&(v, _)) = top.neighbors.get(top.next) {
            top.next += 1;
            self.emit(Event::CheckEdge { from: u, to: v }, format!("Consider {}", v), 3);
            if self.visited.contains(&v) {
                self.emit(
                    Event::CheckEdge { from: u, to: v },
                    format!("{} already visited, skip", v),
                    6,
                );
            } else {
                self.emit(Event::Traverse { from: u, to: v }, format!("Descend into {}", v), 5);
                if self.enter(v) {
                    return Some(true);
                }
            }
            return None;
        }

        self.frames.pop();
        self.emit(Event::Visit { node: u }, format!("Done exploring {}", u), 7);
        if let Some(parent) = self.frames.last().map(|frame| frame.node) {
            self.emit(
                Event::Backtrack { from: parent, to: u },
                format!("Backtrack to {}", parent),
                7,
            );
            self.emit(
                Event::Processing { node: parent },
                format!("Resume {}", parent),
                3,
            );
        }
        None
    }
}

/// Depth-first search from `start` over an explicit path stack.
///
/// Without a target the run ends once every vertex of the graph has been
/// visited, or, on a disconnected graph, when the start vertex's component
/// is drained. On success the live path is highlighted; its cost is
/// reported only when a target was requested.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dfs(graph: &dyn GraphProvider, start: VertexId, end: Option<VertexId>) -> Trace {
    let mut state = DfsState {
        graph,
        end,
        total: graph.vertex_count(),
        visited: HashSet::new(),
        frames: Vec::new(),
        recorder: Recorder::default(),
    };

    let found = if state.enter(start) {
        true
    } else {
        loop {
            if let Some(found) = state.advance() {
                break found;
            }
        }
    };

    let route = state.stack();
    let mut recorder = state.recorder;
    match (found, end) {
        (true, Some(_)) => {
            recorder.highlight_path(&route, &format_path(&route));
            let cost = cost_along(graph, &route);
            recorder.finish(Algorithm::Dfs, start, end, cost, Outcome::Found)
        }
        (true, None) => {
            recorder.highlight_path(&route, &format_path(&route));
            recorder.finish(Algorithm::Dfs, start, end, 0, Outcome::Exhausted)
        }
        (false, Some(target)) => {
            recorder.emit(
                Event::NotFound { start },
                format!("{} not found!", target),
                "",
                FRONTIER_EMPTY,
                Some(7),
            );
            recorder.finish(Algorithm::Dfs, start, end, 0, Outcome::Exhausted)
        }
        (false, None) => recorder.finish(Algorithm::Dfs, start, end, 0, Outcome::Exhausted),
    }
}
