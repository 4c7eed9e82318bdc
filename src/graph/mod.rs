//! Weighted graph data structure and algorithms
//!
//! Provides the adjacency-list [`Graph`] plus its query algorithms:
//! - BFS/DFS visitation order and backtracking path search
//! - Dijkstra single-source shortest paths
//! - Kruskal and Prim minimum spanning trees
//! - [`GraphSource`] trait for pluggable adjacency sources

pub mod algos;
pub mod traversal;
pub mod types;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use crate::config::{GraphConfig, MissingEndpoint};
use crate::error::{GraphError, Result};

pub use traversal::GraphSource;
pub use types::{Edge, Neighbor, PathResult, SpanningTree, Weight};

/// A mutable weighted graph over an adjacency-list representation.
///
/// Edges are directed; an undirected insertion stores two directed edges.
/// Per-vertex adjacency order and the global vertex order follow insertion
/// order and are observable through the traversal algorithms.
///
/// The graph is not internally synchronized. Concurrent mutation from
/// multiple threads requires external locking; algorithms read a
/// consistent snapshot on the calling thread and cache nothing between
/// calls.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<String, Vec<Neighbor>>,
    vertices: Vec<String>,
    edges: Vec<Edge>,
    config: GraphConfig,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Insert a vertex with an empty neighbor list. No-op if already present.
    pub fn add_vertex(&mut self, id: &str) {
        if !self.adjacency.contains_key(id) {
            self.adjacency.insert(id.to_string(), Vec::new());
            self.vertices.push(id.to_string());
        }
    }

    /// Append a directed edge `from -> to`.
    ///
    /// The source vertex must exist. A missing destination follows the
    /// configured [`MissingEndpoint`] policy; under the default
    /// auto-register policy it is inserted as a new vertex first, so every
    /// edge endpoint is a known vertex.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        let weight = self.validate_edge(from, to, weight)?;
        if !self.adjacency.contains_key(from) {
            return Err(GraphError::vertex_not_found(from));
        }
        if !self.adjacency.contains_key(to) {
            match self.config.missing_endpoint {
                MissingEndpoint::AutoRegister => {
                    tracing::debug!(vertex = %to, "auto-registering edge destination");
                    self.add_vertex(to);
                }
                MissingEndpoint::Reject => return Err(GraphError::vertex_not_found(to)),
            }
        }
        if self.config.dedup_parallel_edges && self.has_edge(from, to) {
            tracing::debug!(%from, %to, "skipping duplicate edge");
            return Ok(());
        }

        self.push_edge(from, to, weight);
        Ok(())
    }

    /// Append an undirected edge as the directed pair `a -> b` and `b -> a`.
    ///
    /// Both endpoints must already exist; on any rejection no mutation is
    /// performed.
    pub fn add_undirected_edge(&mut self, a: &str, b: &str, weight: f64) -> Result<()> {
        let weight = self.validate_edge(a, b, weight)?;
        for endpoint in [a, b] {
            if !self.adjacency.contains_key(endpoint) {
                return Err(GraphError::vertex_not_found(endpoint));
            }
        }
        if self.config.dedup_parallel_edges && (self.has_edge(a, b) || self.has_edge(b, a)) {
            tracing::debug!(from = %a, to = %b, "skipping duplicate undirected edge");
            return Ok(());
        }

        self.push_edge(a, b, weight);
        self.push_edge(b, a, weight);
        Ok(())
    }

    /// Remove every edge between `a` and `b`, in both orientations.
    ///
    /// Afterward `a`'s neighbor list contains no entry for `b`, `b`'s list
    /// contains no entry for `a`, and the edge list holds neither
    /// orientation.
    pub fn remove_edge(&mut self, a: &str, b: &str) -> Result<()> {
        for endpoint in [a, b] {
            if !self.adjacency.contains_key(endpoint) {
                return Err(GraphError::vertex_not_found(endpoint));
            }
        }

        if let Some(neighbors) = self.adjacency.get_mut(a) {
            neighbors.retain(|n| n.to != b);
        }
        if let Some(neighbors) = self.adjacency.get_mut(b) {
            neighbors.retain(|n| n.to != a);
        }
        self.edges
            .retain(|e| !(e.from == a && e.to == b) && !(e.from == b && e.to == a));
        Ok(())
    }

    /// Remove a vertex together with every edge incident to it
    pub fn remove_vertex(&mut self, id: &str) -> Result<()> {
        if self.adjacency.remove(id).is_none() {
            return Err(GraphError::vertex_not_found(id));
        }
        self.vertices.retain(|v| v != id);
        for neighbors in self.adjacency.values_mut() {
            neighbors.retain(|n| n.to != id);
        }
        self.edges.retain(|e| e.from != id && e.to != id);
        Ok(())
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Outgoing edges of a vertex, in insertion order
    pub fn neighbors(&self, id: &str) -> Option<&[Neighbor]> {
        self.adjacency.get(id).map(Vec::as_slice)
    }

    /// Every known vertex, in insertion order
    pub fn vertex_ids(&self) -> &[String] {
        &self.vertices
    }

    /// Every directed edge ever added, in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Breadth-first visitation order from `start`
    pub fn bfs(&self, start: &str) -> Result<Vec<String>> {
        algos::bfs::bfs_order(self, start)
    }

    /// Depth-first (pre-order) visitation order from `start`
    pub fn dfs(&self, start: &str) -> Result<Vec<String>> {
        algos::dfs::dfs_order(self, start)
    }

    /// Depth-first path search with backtracking
    pub fn find_path(&self, from: &str, to: &str) -> Result<PathResult> {
        algos::dfs::find_path(self, from, to)
    }

    /// Shortest distance from `start` to every known vertex
    pub fn dijkstra(&self, start: &str) -> Result<HashMap<String, Weight>> {
        algos::dijkstra::dijkstra(self, start)
    }

    /// Shortest distance from `start` to `end`
    pub fn dijkstra_to(&self, start: &str, end: &str) -> Result<Weight> {
        algos::dijkstra::dijkstra_to(self, start, end)
    }

    /// Minimum spanning tree over the flat edge list
    pub fn kruskal(&self) -> SpanningTree {
        algos::kruskal::kruskal(self, self.config.cycle_check)
    }

    /// Minimum spanning tree of the subgraph reachable from `start`
    pub fn prim(&self, start: &str) -> Result<SpanningTree> {
        algos::prim::prim(self, start)
    }

    fn validate_edge(&self, from: &str, to: &str, weight: f64) -> Result<Weight> {
        if from == to {
            return Err(GraphError::SelfLoop(from.to_string()));
        }
        let weight = Weight::new(weight);
        if !weight.is_valid_edge_weight() {
            return Err(GraphError::invalid_weight(from, to, weight.value()));
        }
        Ok(weight)
    }

    fn has_edge(&self, from: &str, to: &str) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|neighbors| neighbors.iter().any(|n| n.to == to))
    }

    fn push_edge(&mut self, from: &str, to: &str, weight: Weight) {
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            neighbors.push(Neighbor::new(to, weight));
        }
        self.edges.push(Edge::new(from, to, weight));
    }
}
