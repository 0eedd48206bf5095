//! Degree parity analysis.

use crate::models::Multigraph;

/// Returns the odd-degree vertices of `graph` in ascending order.
///
/// Degrees are computed once per vertex. By the handshake lemma the result
/// always has even length.
///
/// # Examples
///
/// ```
/// use u_postman::models::Multigraph;
/// use u_postman::matching::odd_vertices;
///
/// let mut g = Multigraph::new();
/// g.insert_edge(0, 1, 2);
/// g.insert_edge(1, 2, 3);
/// assert_eq!(odd_vertices(&g), vec![0, 2]);
/// ```
pub fn odd_vertices(graph: &Multigraph) -> Vec<usize> {
    let odd: Vec<usize> = graph
        .degrees()
        .into_iter()
        .enumerate()
        .filter(|&(_, d)| d % 2 == 1)
        .map(|(v, _)| v)
        .collect();
    debug_assert!(odd.len() % 2 == 0, "handshake lemma violated");
    odd
}
