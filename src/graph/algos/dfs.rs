use std::collections::HashSet;

use crate::error::{GraphError, Result};
use crate::graph::types::PathResult;
use crate::graph::GraphSource;

/// Depth-first pre-order visitation from `start`, following adjacency
/// insertion order
#[tracing::instrument(skip(source), fields(start = %start))]
pub fn dfs_order(source: &dyn GraphSource, start: &str) -> Result<Vec<String>> {
    if !source.contains_vertex(start) {
        return Err(GraphError::vertex_not_found(start));
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut order = Vec::new();
    visit(source, start, &mut visited, &mut order);
    Ok(order)
}

fn visit(
    source: &dyn GraphSource,
    current: &str,
    visited: &mut HashSet<String>,
    order: &mut Vec<String>,
) {
    visited.insert(current.to_string());
    order.push(current.to_string());

    for neighbor in source.neighbors(current) {
        if !visited.contains(&neighbor.to) {
            visit(source, &neighbor.to, visited, order);
        }
    }
}

/// Depth-first path search with backtracking.
///
/// The path accumulates end-to-start as successful recursion unwinds and
/// is reversed before being returned. When a branch fails, both the path
/// accumulator and the visited mark of the failing vertex are undone, so
/// other branches may reach that vertex through a different route.
#[tracing::instrument(skip(source), fields(from = %from, to = %to))]
pub fn find_path(source: &dyn GraphSource, from: &str, to: &str) -> Result<PathResult> {
    for endpoint in [from, to] {
        if !source.contains_vertex(endpoint) {
            return Err(GraphError::vertex_not_found(endpoint));
        }
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut path = Vec::new();
    let found = search(source, from, to, &mut visited, &mut path);
    path.reverse();

    Ok(PathResult {
        from: from.to_string(),
        to: to.to_string(),
        found,
        path_length: path.len().saturating_sub(1),
        path,
    })
}

fn search(
    source: &dyn GraphSource,
    current: &str,
    to: &str,
    visited: &mut HashSet<String>,
    path: &mut Vec<String>,
) -> bool {
    visited.insert(current.to_string());

    if current == to {
        path.push(current.to_string());
        return true;
    }

    for neighbor in source.neighbors(current) {
        if !visited.contains(&neighbor.to) && search(source, &neighbor.to, to, visited, path) {
            path.push(current.to_string());
            return true;
        }
    }

    // Backtrack so another branch may revisit this vertex
    visited.remove(current);
    false
}
