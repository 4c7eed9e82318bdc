//! Trellis Core Library
//!
//! Weighted directed/undirected graphs over an adjacency-list
//! representation, with traversal (BFS, DFS, backtracking path search),
//! single-source shortest paths (Dijkstra), and minimum spanning trees
//! (Kruskal, Prim).

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
