//! Single-source shortest paths (Dijkstra) over a multigraph.
//!
//! # Algorithm
//!
//! The cost of stepping between adjacent vertices is the cheapest of their
//! parallel edges. The next vertex to finalize is chosen by a linear scan
//! over unvisited vertices; among equal distances the lowest index wins, and
//! a tentative distance is only replaced by a strictly smaller one. These two
//! rules fix which of several equal-cost paths is returned.
//!
//! # Complexity
//!
//! O(n²) per source, n = number of vertices.
//!
//! # Reference
//!
//! Dijkstra, E.W. (1959). "A note on two problems in connexion with graphs",
//! *Numerische Mathematik* 1, 269-271.

use crate::error::{PostmanError, Result};
use crate::models::{Multigraph, ShortestPath, Weight};

/// Sentinel cost for vertex pairs with no connecting path.
pub const UNREACHABLE: Weight = Weight::MAX;

/// Distances and predecessors from one origin to every vertex.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    origin: usize,
    dist: Vec<Option<Weight>>,
    prev: Vec<Option<usize>>,
}

impl ShortestPathTree {
    /// The source vertex.
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Distance to `v`, or `None` if `v` is unreachable or out of range.
    pub fn distance(&self, v: usize) -> Option<Weight> {
        self.dist.get(v).copied().flatten()
    }

    /// Distance to `v`, with [`UNREACHABLE`] standing in for infinity.
    pub fn cost_or_sentinel(&self, v: usize) -> Weight {
        self.distance(v).unwrap_or(UNREACHABLE)
    }

    /// Reconstructs the path to `dest`, or `None` if it cannot be reached.
    pub fn path_to(&self, dest: usize) -> Option<ShortestPath> {
        let cost = self.distance(dest)?;
        let mut vertices = vec![dest];
        let mut cur = dest;
        while cur != self.origin {
            cur = self.prev[cur]?;
            vertices.push(cur);
        }
        vertices.reverse();
        Some(ShortestPath { cost, vertices })
    }
}

/// Computes shortest distances from `origin` to every vertex.
///
/// # Errors
///
/// [`PostmanError::InvalidVertex`] if `origin` is not a vertex of `graph`,
/// [`PostmanError::CostOverflow`] if some reachable vertex is farther than
/// [`Weight::MAX`].
///
/// # Examples
///
/// ```
/// use u_postman::models::Multigraph;
/// use u_postman::distance::dijkstra;
///
/// let mut g = Multigraph::new();
/// g.insert_edge(0, 1, 4);
/// g.insert_edge(0, 1, 1);
/// g.insert_edge(1, 2, 2);
/// let tree = dijkstra(&g, 0).unwrap();
/// assert_eq!(tree.distance(2), Some(3));
/// assert_eq!(tree.path_to(2).unwrap().vertices, vec![0, 1, 2]);
/// ```
pub fn dijkstra(graph: &Multigraph, origin: usize) -> Result<ShortestPathTree> {
    graph.check_vertex(origin)?;
    let n = graph.size();
    let mut dist: Vec<Option<Weight>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut overflowed = vec![false; n];
    dist[origin] = Some(0);

    while let Some(u) = next_unvisited(&dist, &visited) {
        visited[u] = true;
        let du = dist[u].unwrap_or(0);
        for v in 0..n {
            if visited[v] || v == u {
                continue;
            }
            let Some(w) = graph.min_weight(u, v) else {
                continue;
            };
            let Some(candidate) = du.checked_add(w) else {
                overflowed[v] = true;
                continue;
            };
            if dist[v].map_or(true, |dv| candidate < dv) {
                dist[v] = Some(candidate);
                prev[v] = Some(u);
            }
        }
    }

    if (0..n).any(|v| overflowed[v] && dist[v].is_none()) {
        return Err(PostmanError::CostOverflow);
    }
    Ok(ShortestPathTree { origin, dist, prev })
}

/// Shortest path between two vertices.
///
/// # Errors
///
/// [`PostmanError::InvalidVertex`] for out-of-range endpoints and
/// [`PostmanError::Unreachable`] when no path exists. A truncated path is
/// never returned.
pub fn shortest_path(graph: &Multigraph, origin: usize, dest: usize) -> Result<ShortestPath> {
    graph.check_vertex(dest)?;
    dijkstra(graph, origin)?
        .path_to(dest)
        .ok_or(PostmanError::Unreachable {
            from: origin,
            to: dest,
        })
}

fn next_unvisited(dist: &[Option<Weight>], visited: &[bool]) -> Option<usize> {
    let mut best: Option<(usize, Weight)> = None;
    for (v, d) in dist.iter().enumerate() {
        if visited[v] {
            continue;
        }
        if let Some(d) = *d {
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((v, d));
            }
        }
    }
    best.map(|(v, _)| v)
}
