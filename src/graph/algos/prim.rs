use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crate::error::{GraphError, Result};
use crate::graph::algos::shared::FrontierEdge;
use crate::graph::types::{Edge, SpanningTree, Weight};
use crate::graph::GraphSource;

/// Minimum spanning tree of the subgraph reachable from `start`.
///
/// Maintains a min-heap of frontier edges, seeded with a synthetic
/// zero-weight self-edge on `start` so the loop has a uniform shape; the
/// synthetic acceptance is discarded before returning. Vertices not
/// reachable from `start` are silently excluded from the tree. Accepted
/// edges are returned in acceptance order together with their total
/// weight.
#[tracing::instrument(skip(source), fields(start = %start))]
pub fn prim(source: &dyn GraphSource, start: &str) -> Result<SpanningTree> {
    if !source.contains_vertex(start) {
        return Err(GraphError::vertex_not_found(start));
    }

    let mut heap: BinaryHeap<Reverse<FrontierEdge>> = BinaryHeap::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut accepted: Vec<Edge> = Vec::new();

    heap.push(Reverse(FrontierEdge {
        from: start.to_string(),
        to: start.to_string(),
        weight: Weight::ZERO,
    }));

    while let Some(Reverse(edge)) = heap.pop() {
        if visited.contains(&edge.to) {
            continue;
        }

        let current = edge.to.clone();
        accepted.push(Edge::new(edge.from, edge.to, edge.weight));
        visited.insert(current.clone());

        for neighbor in source.neighbors(&current) {
            if !visited.contains(&neighbor.to) {
                heap.push(Reverse(FrontierEdge {
                    from: current.clone(),
                    to: neighbor.to,
                    weight: neighbor.weight,
                }));
            }
        }
    }

    // The first acceptance is the synthetic start self-edge
    accepted.remove(0);
    Ok(SpanningTree::from_edges(accepted))
}
