//! End-to-end traversal scenarios over small hand-built graphs

use graphtrace_core::graph::{parse_graph, GraphFormat, LoadOptions};
use graphtrace_core::trace::{Replay, Summary};
use graphtrace_core::{run, Algorithm, Event, Graph, Outcome, StepKind};

fn weighted_triangle() -> Graph {
    let options = LoadOptions {
        format: Some(GraphFormat::EdgeList),
        ..LoadOptions::default()
    };
    parse_graph("1 2 4\n1 3 1\n3 2 1\n", &options).unwrap().graph
}

#[test]
fn test_dijkstra_takes_the_light_detour() {
    let graph = weighted_triangle();
    let trace = run(Algorithm::Dijkstra, &graph, 1, Some(2));

    assert_eq!(trace.path(), vec![1, 3, 2]);
    assert_eq!(trace.cost, 2);
}

#[test]
fn test_bfs_takes_the_direct_edge() {
    let graph = weighted_triangle();
    let trace = run(Algorithm::Bfs, &graph, 1, Some(2));

    assert_eq!(trace.path(), vec![1, 2]);
    assert_eq!(trace.cost, 4);
}

#[test]
fn test_dfs_never_touches_isolated_vertex() {
    let mut graph = weighted_triangle();
    graph.add_vertex(4);
    let trace = run(Algorithm::Dfs, &graph, 1, None);

    assert!(!trace.is_empty());
    assert!(trace.events().all(|event| !event.mentions(4)));
    assert_eq!(trace.cost, 0);
}

/// Test that the final highlight is always node, then edge and node per hop
#[test]
fn test_highlight_alternates_nodes_and_edges() {
    let graph = weighted_triangle();
    for algorithm in Algorithm::ALL {
        let trace = run(algorithm, &graph, 1, Some(2));
        let tail: Vec<StepKind> = trace
            .steps
            .iter()
            .map(|step| step.kind())
            .skip_while(|kind| *kind != StepKind::HighlightPathNode)
            .collect();

        assert_eq!(tail.len(), 2 * trace.path_edges().len() + 1);
        for (i, kind) in tail.iter().enumerate() {
            let expected = if i % 2 == 0 {
                StepKind::HighlightPathNode
            } else {
                StepKind::HighlightPathEdge
            };
            assert_eq!(*kind, expected, "{} highlight at {}", algorithm, i);
        }
    }
}

#[test]
fn test_directed_graph_blocks_reverse_route() {
    let options = LoadOptions {
        directed: true,
        format: Some(GraphFormat::EdgeList),
        ..LoadOptions::default()
    };
    let graph = parse_graph("1 2 1\n2 3 1\n", &options).unwrap().graph;

    for algorithm in Algorithm::ALL {
        let forward = run(algorithm, &graph, 1, Some(3));
        let backward = run(algorithm, &graph, 3, Some(1));

        assert_eq!(forward.outcome, Outcome::Found);
        assert_eq!(forward.cost, 2);
        assert_eq!(backward.outcome, Outcome::Exhausted);
        assert_eq!(backward.cost, 0);
        assert!(matches!(
            backward.steps.last().map(|s| s.event),
            Some(Event::NotFound { start: 3 })
        ));
    }
}

/// Test that editing the graph after a run leaves the trace untouched
#[test]
fn test_trace_is_a_snapshot() {
    let mut graph = weighted_triangle();
    let trace = run(Algorithm::Dijkstra, &graph, 1, Some(2));
    let before = trace.clone();

    graph.remove_vertex(3);
    graph.add_edge(1, 2, 1);

    assert_eq!(trace, before);
    assert_eq!(run(Algorithm::Dijkstra, &graph, 1, Some(2)).path(), vec![1, 2]);
}

#[test]
fn test_replay_reaches_the_found_path() {
    let graph = weighted_triangle();
    let trace = run(Algorithm::Bfs, &graph, 1, Some(3));
    let mut replay = Replay::new(&trace);
    let state = replay.finish();

    assert_eq!(state.path_nodes, vec![1, 3]);
    assert!(state.visited.contains(&3));
    assert_eq!(state.current, Some(3));
}

#[test]
fn test_summary_rows() {
    let graph = weighted_triangle();
    let rows: Vec<Summary> = Algorithm::ALL
        .iter()
        .map(|&algorithm| Summary::new(&run(algorithm, &graph, 1, Some(2)), &graph))
        .collect();

    assert_eq!(rows[0].cost, 4);
    assert_eq!(rows[2].cost, 2);
    assert!(rows.iter().all(|row| row.vertices == 3 && row.edges == 3));
    assert!(rows.iter().all(|row| row.route_label() == "1->2"));
}
