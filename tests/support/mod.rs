use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Weighted triangle: the direct edge 1-2 is heavier than 1-3-2
pub const TRIANGLE: &str = "1 2 4\n1 3 1\n3 2 1\n";

/// Get a Command for graphtrace with an isolated config directory
pub fn graphtrace(config_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("graphtrace");
    cmd.env("GRAPHTRACE_CONFIG_DIR", config_dir.path())
        .env_remove("GRAPHTRACE_CONFIG")
        .env_remove("GRAPHTRACE_LOG");
    cmd
}

/// Write a graph file into `dir` and return its path
pub fn write_graph(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Parse stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
