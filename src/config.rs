//! Graph behavior configuration
//!
//! Policy knobs for edge insertion and spanning-tree construction. A
//! `GraphConfig` is attached to every [`crate::graph::Graph`] at
//! construction time and may be loaded from or saved to a TOML file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// How `add_edge` treats a destination vertex that was never registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingEndpoint {
    /// Register the destination as a new vertex (default)
    #[default]
    AutoRegister,
    /// Reject the edge without mutating the graph
    Reject,
}

impl std::str::FromStr for MissingEndpoint {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto-register" => Ok(MissingEndpoint::AutoRegister),
            "reject" => Ok(MissingEndpoint::Reject),
            other => Err(format!(
                "unknown missing-endpoint policy '{}' (expected: auto-register, reject)",
                other
            )),
        }
    }
}

/// Cycle detection rule used by Kruskal's algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CycleCheck {
    /// Track connected components with union-find (default)
    #[default]
    UnionFind,
    /// Accept an edge whenever either endpoint is still unvisited.
    /// Cheaper, but only valid for edge orderings that never reconnect
    /// two already-built tree fragments.
    VisitedOnly,
}

impl std::str::FromStr for CycleCheck {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "union-find" => Ok(CycleCheck::UnionFind),
            "visited-only" => Ok(CycleCheck::VisitedOnly),
            other => Err(format!(
                "unknown cycle check '{}' (expected: union-find, visited-only)",
                other
            )),
        }
    }
}

/// Graph behavior configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Policy for directed edges whose destination vertex is unknown
    #[serde(default)]
    pub missing_endpoint: MissingEndpoint,

    /// Treat a directed edge duplicating an existing (from, to) pair as a
    /// no-op instead of appending a parallel edge
    #[serde(default)]
    pub dedup_parallel_edges: bool,

    /// Cycle detection rule for Kruskal's algorithm
    #[serde(default)]
    pub cycle_check: CycleCheck,
}

impl GraphConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GraphConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::failed_operation("serialize config", e))?;
        fs::write(path, content)?;
        Ok(())
    }
}
