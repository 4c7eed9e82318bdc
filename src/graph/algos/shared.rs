use crate::graph::types::Weight;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated distance)
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub vertex: String,
    pub distance: Weight,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex && self.distance.value() == other.distance.value()
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .value()
            .partial_cmp(&other.distance.value())
            .unwrap()
    }
}

/// Wrapper for BinaryHeap to use as min-heap over candidate edges
/// (ordered by edge weight)
#[derive(Debug, Clone)]
pub struct FrontierEdge {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

impl PartialEq for FrontierEdge {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.weight.value() == other.weight.value()
    }
}

impl Eq for FrontierEdge {}

impl PartialOrd for FrontierEdge {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEdge {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight
            .value()
            .partial_cmp(&other.weight.value())
            .unwrap()
    }
}
