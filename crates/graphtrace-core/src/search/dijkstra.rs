use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use super::shared::{path_string, route_to, ParentMap, Recorder, FRONTIER_EMPTY};
use super::Algorithm;
use crate::graph::{GraphProvider, VertexId, Weight};
use crate::trace::{Event, Outcome, Trace};


/// Min-heap of `(distance, vertex)`; ties pop the lower vertex id first
type Frontier = BinaryHeap<Reverse<(Weight, VertexId)>>;

/// Render the heap as `[(d, v), ...]` in pop order
fn format_heap(heap: &Frontier) -> String {
    let mut entries: Vec<(Weight, VertexId)> = heap.iter().map(|Reverse(entry)| *entry).collect();
    entries.sort_unstable();
    let items: Vec<String> = entries
        .iter()
        .map(|(dist, node)| format!("({}, {})", dist, node))
        .collect();
    format!("[{}]", items.join(", "))
}

fn format_dist(dist: Option<Weight>) -> String {
    dist.map_or_else(|| "inf".to_string(), |d| d.to_string())
}

/// State tracked during Dijkstra traversal
struct DijkstraState {
    /// Best known distance; absent means infinity
    dist: HashMap<VertexId, Weight>,
    heap: Frontier,
    parent: ParentMap,
    recorder: Recorder,
}

impl DijkstraState {
    fn new(start: VertexId) -> Self {
        Self {
            dist: HashMap::from([(start, 0)]),
            heap: BinaryHeap::from([Reverse((0, start))]),
            parent: ParentMap::from([(start, None)]),
            recorder: Recorder::default(),
        }
    }

    fn is_stale(&self, dist: Weight, node: VertexId) -> bool {
        self.dist.get(&node).is_some_and(|&best| dist > best)
    }

    /// Relax `(u, v)` given `u`'s settled distance
    fn relax(&mut self, u: VertexId, v: VertexId, weight: Weight, du: Weight, path: &str) {
        let candidate = du.saturating_add(weight);
        let old = self.dist.get(&v).copied();
        let improves = match old {
            Some(current) => candidate < current,
            None => true,
        };
        if !improves {
            return;
        }

        self.dist.insert(v, candidate);
        self.heap.push(Reverse((candidate, v)));
        self.parent.insert(v, Some(u));
        let frontier = format_heap(&self.heap);
        self.recorder.emit(
            Event::Traverse { from: u, to: v },
            format!("Relax: {} -> {}", format_dist(old), candidate),
            path,
            frontier.as_str(),
            Some(7),
        );
        self.recorder.emit(
            Event::UpdateDist {
                node: v,
                dist: candidate,
            },
            "Push onto PQ",
            path,
            frontier,
            Some(7),
        );
    }
}

/// Dijkstra's shortest path from `start` with lazy deletion.
///
/// Improved distances push a fresh heap entry instead of decreasing the old
/// one; outdated entries are dropped without an event when popped. Negative
/// weights are not supported.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dijkstra(graph: &dyn GraphProvider, start: VertexId, end: Option<VertexId>) -> Trace {
    let mut state = DijkstraState::new(start);
    let mut path = start.to_string();

    state.recorder.emit(
        Event::Visit { node: start },
        "Initialize",
        &path,
        format_heap(&state.heap),
        Some(0),
    );

    while let Some(&Reverse((_, head))) = state.heap.peek() {
        state.recorder.emit(
            Event::CheckLoop,
            "Check the PQ",
            path_string(&state.parent, head),
            format_heap(&state.heap),
            Some(1),
        );
        let Some(Reverse((d, u))) = state.heap.pop() else {
            break;
        };
        if state.is_stale(d, u) {
            tracing::trace!(node = u, dist = d, "skip_stale_entry");
            continue;
        }

        path = path_string(&state.parent, u);
        state.recorder.emit(
            Event::Processing { node: u },
            format!("Pop {} (d={})", u, d),
            &path,
            format_heap(&state.heap),
            Some(2),
        );

        if end == Some(u) {
            state.recorder.emit(
                Event::Visit { node: u },
                format!("Found {}!", u),
                &path,
                FRONTIER_EMPTY,
                Some(4),
            );
            let route = route_to(&state.parent, u);
            state.recorder.highlight_path(&route, &path);
            return state
                .recorder
                .finish(Algorithm::Dijkstra, start, end, d, Outcome::Found);
        }

        for (v, weight) in graph.sorted_neighbors(u) {
            state.recorder.emit(
                Event::CheckEdge { from: u, to: v },
                format!("Consider {} (w={})", v, weight),
                &path,
                format_heap(&state.heap),
                Some(5),
            );
            state.relax(u, v, weight, d, &path);
        }
    }

    if let Some(target) = end {
        state.recorder.emit(
            Event::NotFound { start },
            format!("{} not found!", target),
            &path,
            FRONTIER_EMPTY,
            Some(8),
        );
    }
    state
        .recorder
        .finish(Algorithm::Dijkstra, start, end, 0, Outcome::Exhausted)
}
