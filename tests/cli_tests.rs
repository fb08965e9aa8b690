//! Integration tests for the graphtrace CLI
//!
//! These tests run the graphtrace binary against small graph files.

mod support;

use predicates::prelude::*;
use tempfile::tempdir;

use support::{graphtrace, stdout_json, write_graph, TRIANGLE};

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    graphtrace(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: graphtrace"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("pseudocode"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    let dir = tempdir().unwrap();
    graphtrace(&dir)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("graphtrace "));
}

// ============================================================================
// run
// ============================================================================

#[test]
fn test_run_dijkstra_human() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "g.txt", TRIANGLE);

    graphtrace(&dir)
        .args(["run", "--input-format", "edge-list", "-a", "dijkstra"])
        .arg(&file)
        .args(["--start", "1", "--end", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dijkstra from 1 to 2"))
        .stdout(predicate::str::contains("update_dist(2, 4)"))
        .stdout(predicate::str::contains("Path: 1 -> 3 -> 2"))
        .stdout(predicate::str::contains("Cost: 2"));
}

#[test]
fn test_run_bfs_takes_direct_edge() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "g.txt", TRIANGLE);

    graphtrace(&dir)
        .args(["run", "--input-format", "edge-list", "-a", "bfs"])
        .arg(&file)
        .args(["-s", "1", "-e", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: 1 -> 2"))
        .stdout(predicate::str::contains("Cost: 4"));
}

#[test]
fn test_run_quiet_prints_only_result() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "g.txt", TRIANGLE);

    graphtrace(&dir)
        .args(["--quiet", "run", "--input-format", "edge-list"])
        .arg(&file)
        .args(["-s", "1", "-e", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("check_edge").not())
        .stdout(predicate::str::contains("Path: 1 -> 3"));
}

#[test]
fn test_run_with_pseudocode_lines() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "g.txt", TRIANGLE);

    graphtrace(&dir)
        .args(["run", "--input-format", "edge-list", "-a", "bfs", "--pseudocode"])
        .arg(&file)
        .args(["-s", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line 2: u = Q.dequeue()"))
        .stdout(predicate::str::contains("Explored everything reachable from 1"));
}

#[test]
fn test_run_json() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "g.txt", TRIANGLE);

    let output = graphtrace(&dir)
        .args(["--format", "json", "run", "--input-format", "edge-list"])
        .args(["-a", "dijkstra"])
        .arg(&file)
        .args(["-s", "1", "-e", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["cost"], 2);
    assert_eq!(json["found"], true);
    assert_eq!(json["outcome"], "found");
    assert_eq!(json["path"], serde_json::json!([1, 3, 2]));

    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps[0]["kind"], "visit");
    assert_eq!(steps[0]["node"], 1);
    assert_eq!(steps[0]["frontier"], "[(0, 1)]");
    assert_eq!(steps[1]["kind"], "check_loop");
    assert_eq!(steps.last().unwrap()["kind"], "highlight_path_node");
}

#[test]
fn test_run_records() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "g.txt", TRIANGLE);

    graphtrace(&dir)
        .args(["--format", "records", "run", "--input-format", "edge-list"])
        .args(["-a", "dijkstra"])
        .arg(&file)
        .args(["-s", "1", "-e", "2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H graphtrace=1 records=1 mode=run algorithm=dijkstra start=1 end=2 found=true cost=2",
        ))
        .stdout(predicate::str::contains("S 1 visit node=1 line=0"))
        .stdout(predicate::str::contains("S 2 check_loop line=1"))
        .stdout(predicate::str::contains("\nP 1 3 2\n"));
}

#[test]
fn test_run_unreachable_target() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "g.txt", "1 2 1\n3 4 1\n");

    graphtrace(&dir)
        .args(["run", "--input-format", "edge-list", "-a", "dfs"])
        .arg(&file)
        .args(["-s", "1", "-e", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not_found(1)"))
        .stdout(predicate::str::contains("No path from 1 to 4"));
}

#[test]
fn test_run_directed_flag() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "g.txt", "1 2 1\n2 3 1\n");

    graphtrace(&dir)
        .args(["--directed", "run", "--input-format", "edge-list"])
        .arg(&file)
        .args(["-s", "3", "-e", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from 3 to 1"));

    graphtrace(&dir)
        .args(["run", "--input-format", "edge-list"])
        .arg(&file)
        .args(["-s", "3", "-e", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: 3 -> 2 -> 1"));
}

#[test]
fn test_run_default_weight() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "g.txt", "1 2\n2 3\n1 3 9\n");

    graphtrace(&dir)
        .args(["run", "--input-format", "edge-list", "-a", "dijkstra"])
        .args(["--default-weight", "2"])
        .arg(&file)
        .args(["-s", "1", "-e", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost: 4"));
}

// ============================================================================
// compare
// ============================================================================

#[test]
fn test_compare_human() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "g.txt", TRIANGLE);

    graphtrace(&dir)
        .args(["compare", "--input-format", "edge-list"])
        .arg(&file)
        .args(["-s", "1", "-e", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALGORITHM"))
        .stdout(predicate::str::contains("O(V+E) ~ 6"))
        .stdout(predicate::str::contains("O((V+E)logV)"))
        .stdout(predicate::str::contains("1 -> 3 -> 2"));
}

#[test]
fn test_compare_json() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "g.txt", TRIANGLE);

    let output = graphtrace(&dir)
        .args(["--format", "json", "compare", "--input-format", "edge-list"])
        .arg(&file)
        .args(["-s", "1", "-e", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["graph"]["vertices"], 3);
    assert_eq!(json["graph"]["edges"], 3);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["algorithm"], "bfs");
    assert_eq!(results[0]["cost"], 4);
    assert_eq!(results[2]["algorithm"], "dijkstra");
    assert_eq!(results[2]["cost"], 2);
    assert_eq!(results[2]["path"], serde_json::json!([1, 3, 2]));
}

#[test]
fn test_compare_records_exhaustive() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "g.txt", TRIANGLE);

    graphtrace(&dir)
        .args(["--format", "records", "compare", "--input-format", "edge-list"])
        .arg(&file)
        .args(["-s", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R algorithm=bfs route=1->All"))
        .stdout(predicate::str::contains("cost=0 found=false"));
}

// ============================================================================
// state
// ============================================================================

#[test]
fn test_state_before_first_step() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "g.txt", TRIANGLE);

    graphtrace(&dir)
        .args(["state", "--input-format", "edge-list", "-a", "bfs"])
        .arg(&file)
        .args(["-s", "1", "-e", "2", "--step", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("step 0 of"))
        .stdout(predicate::str::contains("Event:       (none)"));
}

#[test]
fn test_state_json_mid_trace() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "g.txt", TRIANGLE);

    let output = graphtrace(&dir)
        .args(["--format", "json", "state", "--input-format", "edge-list"])
        .args(["-a", "bfs"])
        .arg(&file)
        .args(["-s", "1", "-e", "2", "-k", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["step"]["kind"], "processing");
    assert_eq!(json["state"]["position"], 3);
    assert_eq!(json["state"]["current"], 1);
    assert_eq!(json["state"]["frontier"], "[]");
}

#[test]
fn test_state_step_out_of_range() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "g.txt", TRIANGLE);

    graphtrace(&dir)
        .args(["state", "--input-format", "edge-list"])
        .arg(&file)
        .args(["-s", "1", "-e", "2", "--step", "1000"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid step"));
}

// ============================================================================
// pseudocode and info
// ============================================================================

#[test]
fn test_pseudocode_listing() {
    let dir = tempdir().unwrap();
    graphtrace(&dir)
        .args(["pseudocode", "dfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" 0  DFS(u):"))
        .stdout(predicate::str::contains(" 7    backtrack from u"));
}

#[test]
fn test_pseudocode_json() {
    let dir = tempdir().unwrap();
    let output = graphtrace(&dir)
        .args(["--format", "json", "pseudocode", "dijkstra"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["lines"].as_array().unwrap().len(), 9);
}

#[test]
fn test_info_detects_matrix() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "m.txt", "0 2 0\n2 0 5\n0 5 0\n");

    graphtrace(&dir)
        .arg("info")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Format:    matrix"))
        .stdout(predicate::str::contains("Vertices:  3"))
        .stdout(predicate::str::contains("Edges:     2"));
}

#[test]
fn test_info_records_lists_edges() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "g.txt", "4 3\n1 2 7\n2 3 1\n3 4 2\n");

    graphtrace(&dir)
        .args(["--format", "records", "info"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("format=edge-list"))
        .stdout(predicate::str::contains("E 1 2 7"))
        .stdout(predicate::str::contains("E 3 4 2"));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_graph_file() {
    let dir = tempdir().unwrap();
    graphtrace(&dir)
        .args(["run", "absent.txt", "-s", "1"])
        .current_dir(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph file not found"));
}

#[test]
fn test_malformed_graph_file() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "bad.txt", "1 2 1\n2 x 1\n");

    graphtrace(&dir)
        .args(["run", "--input-format", "edge-list"])
        .arg(&file)
        .args(["-s", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_empty_graph_file() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "empty.txt", "\n\n");

    graphtrace(&dir)
        .arg("info")
        .arg(&file)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_unknown_algorithm_json_envelope() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "g.txt", TRIANGLE);

    let output = graphtrace(&dir)
        .args(["--format", "json", "run", "-a", "astar"])
        .arg(&file)
        .args(["-s", "1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 2);
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_dijkstra_rejects_negative_weights() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "g.txt", "1 2 -3\n2 3 1\n");

    graphtrace(&dir)
        .args(["run", "--input-format", "edge-list", "-a", "dijkstra"])
        .arg(&file)
        .args(["-s", "1", "-e", "3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("negative edge weights"));
}
