//! Graph algorithm implementations
//!
//! Contains concrete implementations of the graph algorithms:
//! - `bfs`: breadth-first visitation order
//! - `dfs`: depth-first order and backtracking path search
//! - `dijkstra`: single-source shortest paths
//! - `kruskal`: edge-list minimum spanning tree
//! - `prim`: frontier-heap minimum spanning tree
//! - `shared`: heap entry types used by the priority-queue algorithms

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod shared;

pub use bfs::bfs_order;
pub use dfs::{dfs_order, find_path};
pub use dijkstra::{dijkstra, dijkstra_to};
pub use kruskal::kruskal;
pub use prim::prim;
