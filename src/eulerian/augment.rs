//! Edge duplication along matched shortest paths.

use tracing::{debug, instrument};

use crate::error::{PostmanError, Result};
use crate::models::{checked_sum, Augmentation, DuplicatedEdge, Matching, Multigraph};

/// Duplicates every edge on every matched path exactly once.
///
/// Each step `(a, b)` gains one parallel edge whose weight is the cheapest
/// existing `(a, b)` weight. Matched endpoints gain one degree and interior
/// path vertices gain two, so a perfect matching over all odd vertices
/// leaves the graph Eulerian.
///
/// The graph is only mutated once every step has been checked.
///
/// # Errors
///
/// [`PostmanError::Unreachable`] if a path step is not an edge of `graph`,
/// [`PostmanError::CostOverflow`] if the added weight overflows.
///
/// # Examples
///
/// ```
/// use u_postman::models::Multigraph;
/// use u_postman::matching::{min_weight_perfect_matching, odd_vertices};
/// use u_postman::eulerian::augment;
///
/// let mut g = Multigraph::new();
/// g.insert_edge(0, 1, 2);
/// g.insert_edge(1, 2, 3);
/// let m = min_weight_perfect_matching(&g, &odd_vertices(&g)).unwrap();
/// let aug = augment(&mut g, &m).unwrap();
/// assert_eq!(aug.added_cost, 5);
/// assert!(g.is_eulerian());
/// ```
#[instrument(skip_all, fields(pairs = matching.pairs.len()))]
pub fn augment(graph: &mut Multigraph, matching: &Matching) -> Result<Augmentation> {
    let mut duplicated = Vec::new();
    for pair in &matching.pairs {
        for (u, v) in pair.path.steps() {
            let weight = graph
                .min_weight(u, v)
                .ok_or(PostmanError::Unreachable { from: u, to: v })?;
            duplicated.push(DuplicatedEdge { u, v, weight });
        }
    }

    let added_cost = checked_sum(duplicated.iter().map(|e| e.weight))?;
    for e in &duplicated {
        graph.insert_edge(e.u, e.v, e.weight);
    }

    debug!(edges = duplicated.len(), added_cost, "augmented graph");
    Ok(Augmentation {
        duplicated,
        added_cost,
    })
}
