use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::error::{GraphError, Result};
use crate::graph::algos::shared::HeapEntry;
use crate::graph::types::Weight;
use crate::graph::GraphSource;

/// Shortest distance from `start` to every known vertex.
///
/// Edge weights are guaranteed non-negative by insertion-time validation.
/// The distance map is seeded from the full vertex list, so vertices
/// unreachable from `start` appear with `Weight::INFINITY`.
///
/// Uses the lazy-deletion heap variant: relaxation pushes a fresh entry
/// instead of decreasing a key, and superseded entries are skipped when
/// popped.
#[tracing::instrument(skip(source), fields(start = %start))]
pub fn dijkstra(source: &dyn GraphSource, start: &str) -> Result<HashMap<String, Weight>> {
    if !source.contains_vertex(start) {
        return Err(GraphError::vertex_not_found(start));
    }

    let mut distances: HashMap<String, Weight> = source
        .vertex_ids()
        .into_iter()
        .map(|vertex| (vertex, Weight::INFINITY))
        .collect();
    distances.insert(start.to_string(), Weight::ZERO);

    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        vertex: start.to_string(),
        distance: Weight::ZERO,
    }));

    while let Some(Reverse(HeapEntry { vertex, distance })) = heap.pop() {
        // Stale lazy-deletion entry: a shorter path to this vertex was
        // already settled
        let best = distances.get(&vertex).copied().unwrap_or(Weight::INFINITY);
        if distance.value() > best.value() {
            continue;
        }

        for neighbor in source.neighbors(&vertex) {
            let candidate = distance + neighbor.weight;
            let current = distances
                .get(&neighbor.to)
                .copied()
                .unwrap_or(Weight::INFINITY);

            if candidate.value() < current.value() {
                distances.insert(neighbor.to.clone(), candidate);
                heap.push(Reverse(HeapEntry {
                    vertex: neighbor.to,
                    distance: candidate,
                }));
            }
        }
    }

    Ok(distances)
}

/// Shortest distance from `start` to `end`; `Weight::INFINITY` when `end`
/// is unreachable
#[tracing::instrument(skip(source), fields(start = %start, end = %end))]
pub fn dijkstra_to(source: &dyn GraphSource, start: &str, end: &str) -> Result<Weight> {
    if !source.contains_vertex(end) {
        return Err(GraphError::vertex_not_found(end));
    }

    let distances = dijkstra(source, start)?;
    Ok(distances.get(end).copied().unwrap_or(Weight::INFINITY))
}
