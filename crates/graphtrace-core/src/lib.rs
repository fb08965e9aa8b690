//! Graphtrace Core Library
//!
//! Weighted graph store plus BFS, DFS and Dijkstra searches that record
//! every decision they take as an ordered, replayable event trace.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod search;
pub mod trace;

pub use graph::{Edge, Graph, GraphProvider, VertexId, Weight};
pub use search::{run, Algorithm};
pub use trace::{Event, Outcome, Step, StepKind, Trace};
