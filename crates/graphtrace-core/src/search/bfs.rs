use std::collections::{HashSet, VecDeque};

use super::shared::{
    cost_from_parents, format_list, path_string, route_to, ParentMap, Recorder, FRONTIER_EMPTY,
};
use super::Algorithm;
use crate::graph::{GraphProvider, VertexId};
use crate::trace::{Event, Outcome, Trace};

/// Breadth-first search from `start`.
///
/// Vertices are marked visited when enqueued, so each is processed at most
/// once. Weights are ignored while searching; the returned cost sums the
/// weights along the hop-shortest path.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn bfs(graph: &dyn GraphProvider, start: VertexId, end: Option<VertexId>) -> Trace {
    let mut recorder = Recorder::default();
    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut parent = ParentMap::from([(start, None)]);
    let mut path = start.to_string();

    recorder.emit(
        Event::Visit { node: start },
        "Start BFS",
        &path,
        format_list(queue.iter().copied()),
        Some(0),
    );

    while !queue.is_empty() {
        recorder.emit(
            Event::CheckLoop,
            "Check the queue",
            &path,
            format_list(queue.iter().copied()),
            Some(1),
        );
        let Some(u) = queue.pop_front() else {
            break;
        };
        path = path_string(&parent, u);
        recorder.emit(
            Event::Processing { node: u },
            format!("Dequeue {}", u),
            &path,
            format_list(queue.iter().copied()),
            Some(2),
        );

        if end == Some(u) {
            recorder.emit(
                Event::Visit { node: u },
                format!("Found {}!", u),
                &path,
                FRONTIER_EMPTY,
                Some(3),
            );
            recorder.highlight_path(&route_to(&parent, u), &path);
            let cost = cost_from_parents(graph, &parent, start, u);
            return recorder.finish(Algorithm::Bfs, start, end, cost, Outcome::Found);
        }

        for (v, _) in graph.sorted_neighbors(u) {
            recorder.emit(
                Event::CheckEdge { from: u, to: v },
                format!("Consider {}", v),
                &path,
                format_list(queue.iter().copied()),
                Some(4),
            );
            if visited.insert(v) {
                parent.insert(v, Some(u));
                queue.push_back(v);
                recorder.emit(
                    Event::Traverse { from: u, to: v },
                    format!("Follow edge ({}, {})", u, v),
                    &path,
                    format_list(queue.iter().copied()),
                    Some(6),
                );
                recorder.emit(
                    Event::Visit { node: v },
                    format!("Enqueue {}", v),
                    &path,
                    format_list(queue.iter().copied()),
                    Some(6),
                );
            }
        }
    }

    if let Some(target) = end {
        recorder.emit(
            Event::NotFound { start },
            format!("{} not found!", target),
            &path,
            FRONTIER_EMPTY,
            Some(7),
        );
    }
    recorder.finish(Algorithm::Bfs, start, end, 0, Outcome::Exhausted)
}
