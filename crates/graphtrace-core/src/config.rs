//! User configuration for graphtrace
//!
//! Stored as TOML in `<config dir>/graphtrace/config.toml`. Every key is
//! optional; command-line flags take precedence over the file.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{GraphTraceError, Result};

pub use types::TraceConfig;

const CONFIG_DIR: &str = "graphtrace";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "GRAPHTRACE_CONFIG_DIR";

impl TraceConfig {
    /// Default location, honoring `GRAPHTRACE_CONFIG_DIR`
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphTraceError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: TraceConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file, creating its directory
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphTraceError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load the configuration in effect.
    ///
    /// An explicit path must exist. The default location may be absent, in
    /// which case defaults apply.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(GraphTraceError::not_found(
                    "config file",
                    path.display().to_string(),
                ));
            }
            debug!(path = %path.display(), "load_config");
            return Self::load(path);
        }

        let path = Self::default_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "no_config_file");
            return Ok(Self::default());
        }
        debug!(path = %path.display(), "load_config");
        Self::load(&path)
    }
}
