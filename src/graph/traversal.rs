use crate::graph::types::{Edge, Neighbor};
use crate::graph::Graph;

/// Trait for providing graph adjacency and vertex/edge inventories
///
/// The traversal and spanning-tree algorithms run against this seam, so
/// they work over any adjacency source, not just an owned [`Graph`].
pub trait GraphSource {
    /// Outgoing edges of a vertex, in insertion order. Unknown vertices
    /// yield an empty list.
    fn neighbors(&self, id: &str) -> Vec<Neighbor>;

    /// Every known vertex, in insertion order
    fn vertex_ids(&self) -> Vec<String>;

    fn contains_vertex(&self, id: &str) -> bool;

    /// Every directed edge ever added, in insertion order
    fn edges(&self) -> Vec<Edge>;
}

impl GraphSource for Graph {
    fn neighbors(&self, id: &str) -> Vec<Neighbor> {
        self.neighbors(id).map(<[Neighbor]>::to_vec).unwrap_or_default()
    }

    fn vertex_ids(&self) -> Vec<String> {
        self.vertex_ids().to_vec()
    }

    fn contains_vertex(&self, id: &str) -> bool {
        self.contains_vertex(id)
    }

    fn edges(&self) -> Vec<Edge> {
        self.edges().to_vec()
    }
}
