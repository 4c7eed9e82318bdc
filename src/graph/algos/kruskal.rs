use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::config::CycleCheck;
use crate::graph::algos::shared::FrontierEdge;
use crate::graph::types::{Edge, SpanningTree};
use crate::graph::GraphSource;

/// Minimum spanning tree over the flat edge list.
///
/// Every recorded edge is pushed through the min-heap and popped in
/// ascending weight order; the acceptance rule is selected by
/// [`CycleCheck`]. Accepted edges are returned in increasing-weight order
/// together with their total weight.
#[tracing::instrument(skip(source), fields(cycle_check = ?cycle_check))]
pub fn kruskal(source: &dyn GraphSource, cycle_check: CycleCheck) -> SpanningTree {
    let mut heap: BinaryHeap<Reverse<FrontierEdge>> = BinaryHeap::new();
    for edge in source.edges() {
        heap.push(Reverse(FrontierEdge {
            from: edge.from,
            to: edge.to,
            weight: edge.weight,
        }));
    }

    let accepted = match cycle_check {
        CycleCheck::UnionFind => accept_union_find(source, heap),
        CycleCheck::VisitedOnly => accept_visited_only(heap),
    };

    SpanningTree::from_edges(accepted)
}

/// Accept an edge when its endpoints lie in different connected components
fn accept_union_find(
    source: &dyn GraphSource,
    mut heap: BinaryHeap<Reverse<FrontierEdge>>,
) -> Vec<Edge> {
    let mut components = DisjointSet::new(source.vertex_ids());
    let mut accepted = Vec::new();

    while let Some(Reverse(edge)) = heap.pop() {
        if components.union(&edge.from, &edge.to) {
            accepted.push(Edge::new(edge.from, edge.to, edge.weight));
        }
    }

    accepted
}

/// Accept an edge when either endpoint is still unvisited, then mark both.
///
/// This is not a component check: an edge reconnecting two already-built
/// fragments is rejected because both endpoints are marked. Valid only for
/// edge orderings that grow a single fragment at a time.
fn accept_visited_only(mut heap: BinaryHeap<Reverse<FrontierEdge>>) -> Vec<Edge> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut accepted = Vec::new();

    while let Some(Reverse(edge)) = heap.pop() {
        if !visited.contains(&edge.from) || !visited.contains(&edge.to) {
            visited.insert(edge.from.clone());
            visited.insert(edge.to.clone());
            accepted.push(Edge::new(edge.from, edge.to, edge.weight));
        }
    }

    accepted
}

/// Union-find over vertex identifiers, with path-halving find and
/// union by rank
struct DisjointSet {
    index: HashMap<String, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(vertices: Vec<String>) -> Self {
        let mut set = DisjointSet {
            index: HashMap::with_capacity(vertices.len()),
            parent: Vec::with_capacity(vertices.len()),
            rank: Vec::with_capacity(vertices.len()),
        };
        for vertex in vertices {
            set.index_of(&vertex);
        }
        set
    }

    fn index_of(&mut self, id: &str) -> usize {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.parent.len();
        self.index.insert(id.to_string(), idx);
        self.parent.push(idx);
        self.rank.push(0);
        idx
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the components of `a` and `b`; false if already joined
    fn union(&mut self, a: &str, b: &str) -> bool {
        let a = self.index_of(a);
        let b = self.index_of(b);
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }
}
