use serde::{Deserialize, Serialize};

use crate::graph::{Weight, DEFAULT_WEIGHT};
use crate::search::Algorithm;

/// Settings read from `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Treat loaded graphs as directed
    pub directed: bool,

    /// Algorithm used when `--algorithm` is not given
    pub algorithm: Algorithm,

    /// Weight for edge-list lines without a third column
    pub default_weight: Weight,

    /// Print the pseudocode line next to each step
    pub show_pseudocode: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            directed: false,
            algorithm: Algorithm::Bfs,
            default_weight: DEFAULT_WEIGHT,
            show_pseudocode: false,
        }
    }
}
