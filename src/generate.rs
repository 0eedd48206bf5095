//! Random instance generation for tests and benchmarks.

use rand::Rng;

use crate::models::{Multigraph, Weight};

/// Generates a connected multigraph on `n` vertices.
///
/// A random spanning tree guarantees connectivity; `extra_edges` further
/// edges are then added between random endpoints (parallel edges allowed,
/// self-loops excluded). Weights are drawn from `1..=max_weight`.
///
/// `n == 0` yields the empty graph and `n == 1` a single isolated vertex.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_postman::generate::random_connected_graph;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let g = random_connected_graph(6, 4, 10, &mut rng);
/// assert_eq!(g.size(), 6);
/// assert_eq!(g.edge_count(), 5 + 4);
/// ```
pub fn random_connected_graph<R: Rng>(
    n: usize,
    extra_edges: usize,
    max_weight: Weight,
    rng: &mut R,
) -> Multigraph {
    let mut graph = Multigraph::with_vertices(n);
    if n < 2 {
        return graph;
    }
    let max_weight = max_weight.max(1);

    for v in 1..n {
        let parent = rng.random_range(0..v);
        graph.insert_edge(parent, v, rng.random_range(1..=max_weight));
    }
    for _ in 0..extra_edges {
        let u = rng.random_range(0..n);
        let mut v = rng.random_range(0..n - 1);
        if v >= u {
            v += 1;
        }
        graph.insert_edge(u, v, rng.random_range(1..=max_weight));
    }
    graph
}

/// Generates a cycle `0-1-…-(n-1)-0` plus `chords` random chords.
///
/// Each chord flips the parity of its two endpoints, which makes it easy
/// to steer the number of odd-degree vertices: with distinct endpoints the
/// graph has exactly `2 * chords` odd vertices while `2 * chords <= n`.
pub fn cycle_with_chords<R: Rng>(
    n: usize,
    chords: usize,
    max_weight: Weight,
    rng: &mut R,
) -> Multigraph {
    let mut graph = Multigraph::with_vertices(n);
    if n < 3 {
        return graph;
    }
    let max_weight = max_weight.max(1);
    for v in 0..n {
        graph.insert_edge(v, (v + 1) % n, rng.random_range(1..=max_weight));
    }

    let mut free: Vec<usize> = (0..n).collect();
    for _ in 0..chords.min(n / 2) {
        let a = free.swap_remove(rng.random_range(0..free.len()));
        let b = free.swap_remove(rng.random_range(0..free.len()));
        graph.insert_edge(a, b, rng.random_range(1..=max_weight));
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::odd_vertices;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_connected_and_sized() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = random_connected_graph(10, 5, 9, &mut rng);
        assert_eq!(g.size(), 10);
        assert_eq!(g.edge_count(), 14);
        let tree = crate::distance::dijkstra(&g, 0).expect("valid origin");
        assert!((0..10).all(|v| tree.distance(v).is_some()));
        assert!(g.edges().iter().all(|&(u, v, w)| u != v && (1..=9).contains(&w)));
    }

    #[test]
    fn test_trivial_sizes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_connected_graph(0, 3, 5, &mut rng).size(), 0);
        let single = random_connected_graph(1, 3, 5, &mut rng);
        assert_eq!(single.size(), 1);
        assert_eq!(single.edge_count(), 0);
    }

    #[test]
    fn test_cycle_with_chords_odd_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let g = cycle_with_chords(12, 4, 5, &mut rng);
        assert_eq!(odd_vertices(&g).len(), 8);
        assert_eq!(g.edge_count(), 16);
    }

    #[test]
    fn test_cycle_without_chords_is_eulerian() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(cycle_with_chords(7, 0, 5, &mut rng).is_eulerian());
    }
}
