//! Configuration for hopgraph
//!
//! Read from a TOML file passed with `--config`; every field is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HopgraphError, Result};
use crate::graph::{Weight, DEFAULT_WEIGHT};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopgraphConfig {
    /// Edge-list loading behavior
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// How edge-list files are turned into graphs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Mode used when the file has no `G`/`D` marker line
    #[serde(default)]
    pub undirected: bool,

    /// Weight for edges written without one
    #[serde(default = "default_weight")]
    pub default_weight: Weight,

    /// Abort on the first rejected vertex or edge instead of skipping it
    #[serde(default)]
    pub strict: bool,
}

fn default_weight() -> Weight {
    DEFAULT_WEIGHT
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            undirected: false,
            default_weight: DEFAULT_WEIGHT,
            strict: false,
        }
    }
}

/// Output defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// List each undirected edge once instead of once per direction
    #[serde(default)]
    pub unique_edges: bool,
}

impl HopgraphConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(HopgraphError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        let config: HopgraphConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
