use std::collections::{HashSet, VecDeque};

use crate::error::{GraphError, Result};
use crate::graph::GraphSource;

/// Breadth-first visitation order from `start`.
///
/// A vertex is marked visited the moment it is first discovered, before it
/// is dequeued; the returned order is therefore discovery order, and within
/// one vertex the neighbors are discovered in adjacency insertion order.
#[tracing::instrument(skip(source), fields(start = %start))]
pub fn bfs_order(source: &dyn GraphSource, start: &str) -> Result<Vec<String>> {
    if !source.contains_vertex(start) {
        return Err(GraphError::vertex_not_found(start));
    }

    let mut order = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<String> = VecDeque::new();

    let start_owned = start.to_string();
    visited.insert(start_owned.clone());
    order.push(start_owned.clone());
    queue.push_back(start_owned);

    while let Some(current) = queue.pop_front() {
        for neighbor in source.neighbors(&current) {
            if !visited.contains(&neighbor.to) {
                visited.insert(neighbor.to.clone());
                order.push(neighbor.to.clone());
                queue.push_back(neighbor.to);
            }
        }
    }

    Ok(order)
}
