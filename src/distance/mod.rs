//! Shortest paths over the multigraph.
//!
//! Provides single-source Dijkstra and a dense pairwise cost table used by
//! the odd-vertex matching.

mod dijkstra;
mod matrix;

pub use dijkstra::{dijkstra, shortest_path, ShortestPathTree, UNREACHABLE};
pub use matrix::PairCostMatrix;
