//! Output format handling for trellis results
//!
//! Supports two output formats:
//! - human: readable, concise output for terminal use
//! - json: stable, machine-readable JSON
//!
//! JSON output follows serde_json conventions: non-finite distances
//! (unreachable vertices) render as `null`.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::types::{PathResult, SpanningTree, Weight};

/// Output format for rendered results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(GraphError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a Dijkstra distance map, one vertex per line in human output
pub fn render_distances(
    distances: &HashMap<String, Weight>,
    format: OutputFormat,
) -> Result<String> {
    // Sort for stable output regardless of map iteration order
    let sorted: BTreeMap<&String, &Weight> = distances.iter().collect();

    match format {
        OutputFormat::Human => {
            let lines: Vec<String> = sorted
                .iter()
                .map(|(vertex, weight)| format!("{} {}", vertex, weight))
                .collect();
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&sorted)?),
    }
}

/// Render a path search result
pub fn render_path(result: &PathResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => {
            if !result.found {
                return Ok(format!("no path from {} to {}", result.from, result.to));
            }
            Ok(format!(
                "{} ({} edges)",
                result.path.join(" -> "),
                result.path_length
            ))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

/// Render a spanning tree, one accepted edge per line in human output
pub fn render_spanning_tree(tree: &SpanningTree, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => {
            let mut lines: Vec<String> = tree
                .edges
                .iter()
                .map(|edge| format!("{} - {} ({})", edge.from, edge.to, edge.weight))
                .collect();
            lines.push(format!("total weight: {}", tree.total_weight));
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tree)?),
    }
}
