//! Graph file loading
//!
//! Two text layouts are accepted and told apart automatically:
//! - edge list: `from to [weight]` per line, optionally preceded by a
//!   `V E` style header line
//! - square matrix: `n` lines of `n` integers, where a positive cell at
//!   row `r`, column `c` is an edge `(r + 1, c + 1)` of that weight

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use super::types::{VertexId, Weight, DEFAULT_WEIGHT};
use super::Graph;
use crate::error::{GraphTraceError, Result};

/// Layout detected for a graph file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphFormat {
    EdgeList,
    Matrix,
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphFormat::EdgeList => write!(f, "edge-list"),
            GraphFormat::Matrix => write!(f, "matrix"),
        }
    }
}

/// Options controlling how graph text is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub directed: bool,
    /// Weight for edge-list lines that omit one
    pub default_weight: Weight,
    /// Force a layout instead of detecting it. A three-line edge list with
    /// weights is indistinguishable from a 3x3 matrix.
    pub format: Option<GraphFormat>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            directed: false,
            default_weight: DEFAULT_WEIGHT,
            format: None,
        }
    }
}

/// A parsed graph together with the layout it was read from
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub graph: Graph,
    pub format: GraphFormat,
}

/// One non-blank input line with its 1-based line number
struct Row {
    line: usize,
    values: Vec<i64>,
}

/// Vertices and `(from, to, weight)` edges read from the rows
type Parsed = (BTreeSet<VertexId>, Vec<(VertexId, VertexId, Weight)>);

fn tokenize(text: &str) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let values = trimmed
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|e| GraphTraceError::parse(idx + 1, format!("{:?}: {}", token, e)))
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(Row {
            line: idx + 1,
            values,
        });
    }
    Ok(rows)
}

fn is_matrix(rows: &[Row]) -> bool {
    rows.len() > 1 && rows.len() == rows[0].values.len()
}

/// A short first line is a `V E` header when the body below it is not
/// itself made of two-column edges
fn has_header(rows: &[Row]) -> bool {
    if rows.len() < 2 {
        return false;
    }
    match rows[0].values.len() {
        0 | 1 => true,
        2 => rows[1].values.len() > 2,
        _ => false,
    }
}

fn matrix_edges(rows: &[Row]) -> Result<Parsed> {
    let size = rows.len();
    let mut vertices = BTreeSet::new();
    let mut edges = Vec::new();

    for (r, row) in rows.iter().enumerate() {
        if row.values.len() != size {
            return Err(GraphTraceError::parse(
                row.line,
                format!("expected {} columns, found {}", size, row.values.len()),
            ));
        }
        let from = r as VertexId + 1;
        vertices.insert(from);
        for (c, &weight) in row.values.iter().enumerate() {
            if weight > 0 {
                edges.push((from, c as VertexId + 1, weight));
            }
        }
    }

    Ok((vertices, edges))
}

fn edge_list_edges(rows: &[Row], default_weight: Weight) -> Parsed {
    let skip = usize::from(has_header(rows));
    let mut vertices = BTreeSet::new();
    let mut edges = Vec::new();

    for row in &rows[skip..] {
        if let [from, to, rest @ ..] = row.values.as_slice() {
            let weight = rest.first().copied().unwrap_or(default_weight);
            vertices.insert(*from);
            vertices.insert(*to);
            edges.push((*from, *to, weight));
        }
    }

    (vertices, edges)
}

/// Parse graph text in either layout
pub fn parse_graph(text: &str, opts: &LoadOptions) -> Result<LoadedGraph> {
    let rows = tokenize(text)?;
    if rows.is_empty() {
        return Err(GraphTraceError::EmptyGraph);
    }

    let format = opts.format.unwrap_or(if is_matrix(&rows) {
        GraphFormat::Matrix
    } else {
        GraphFormat::EdgeList
    });
    let (vertices, edges) = match format {
        GraphFormat::Matrix => matrix_edges(&rows)?,
        GraphFormat::EdgeList => edge_list_edges(&rows, opts.default_weight),
    };

    let mut graph = Graph::new(opts.directed);
    for vertex in vertices {
        graph.add_vertex(vertex);
    }
    for (from, to, weight) in edges {
        graph.add_edge(from, to, weight);
    }

    debug!(
        format = %format,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        directed = opts.directed,
        "parse_graph"
    );

    Ok(LoadedGraph { graph, format })
}

/// Read and parse a graph file
pub fn load_graph_file(path: &Path, opts: &LoadOptions) -> Result<LoadedGraph> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GraphTraceError::not_found("graph file", path.display())
        } else {
            GraphTraceError::Io(e)
        }
    })?;
    parse_graph(&content, opts)
}
