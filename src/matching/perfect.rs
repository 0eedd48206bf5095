//! Exact minimum-weight perfect matching by exhaustive enumeration.
//!
//! # Algorithm
//!
//! Fix the first remaining vertex, pair it with each other remaining vertex
//! in ascending order, and recurse on what is left. Every subtree returns its
//! own best `(cost, pairs)`; a candidate replaces the incumbent only when it
//! is strictly cheaper, so the first minimal pairing found wins ties. Costs
//! are added with checked arithmetic and a pairing whose total overflows is
//! never a candidate, so the [`UNREACHABLE`](crate::distance::UNREACHABLE)
//! sentinel acts as infinity.
//!
//! # Complexity
//!
//! (2k−1)!! complete pairings for 2k vertices: 945 at 10, ~2·10⁶ at 16,
//! ~6.5·10⁸ at 20. This is exact by construction and only practical for
//! small odd-vertex counts; the solver enforces a configurable ceiling.

use tracing::{debug, instrument};

use crate::distance::PairCostMatrix;
use crate::error::{PostmanError, Result};
use crate::models::{MatchedPair, Matching, Multigraph, Weight};

/// Finds the cheapest pairing of the table indices in `remaining`.
///
/// Returns the total cost and the pairs as `(first, partner)` table indices.
/// An empty slice costs nothing. Returns `None` for an odd-length slice, or
/// when every pairing's total overflows a [`Weight`].
///
/// # Examples
///
/// ```
/// use u_postman::distance::PairCostMatrix;
/// use u_postman::matching::min_cost_pairing;
///
/// // 0-1: 1, 0-2: 9, 0-3: 9, 1-2: 9, 1-3: 9, 2-3: 1
/// let costs = vec![
///     0, 1, 9, 9,
///     1, 0, 9, 9,
///     9, 9, 0, 1,
///     9, 9, 1, 0,
/// ];
/// let table = PairCostMatrix::from_costs(vec![0, 1, 2, 3], costs).unwrap();
/// let (cost, pairs) = min_cost_pairing(&table, &[0, 1, 2, 3]).unwrap();
/// assert_eq!(cost, 2);
/// assert_eq!(pairs, vec![(0, 1), (2, 3)]);
/// ```
pub fn min_cost_pairing(
    costs: &PairCostMatrix,
    remaining: &[usize],
) -> Option<(Weight, Vec<(usize, usize)>)> {
    let Some((&first, rest)) = remaining.split_first() else {
        return Some((0, Vec::new()));
    };

    let mut best: Option<(Weight, Vec<(usize, usize)>)> = None;
    for (pos, &partner) in rest.iter().enumerate() {
        let mut others = rest.to_vec();
        others.remove(pos);
        let Some((sub_cost, mut sub_pairs)) = min_cost_pairing(costs, &others) else {
            continue;
        };
        let Some(cost) = costs.cost(first, partner).checked_add(sub_cost) else {
            continue;
        };
        if best.as_ref().map_or(true, |(b, _)| cost < *b) {
            sub_pairs.insert(0, (first, partner));
            best = Some((cost, sub_pairs));
        }
    }

    best
}

/// Number of distinct perfect pairings of `n` vertices, saturating.
///
/// Zero for odd `n`.
pub fn pairing_count(n: usize) -> u128 {
    if n % 2 == 1 {
        return 0;
    }
    (1..n)
        .step_by(2)
        .fold(1u128, |acc, f| acc.saturating_mul(f as u128))
}

/// Computes the minimum-weight perfect matching over `odd` using
/// shortest-path costs in `graph`.
///
/// # Errors
///
/// - [`PostmanError::OddCardinality`] if `odd` has odd length
/// - [`PostmanError::InvalidVertex`] for an out-of-range vertex
/// - [`PostmanError::Unreachable`] if any two vertices are disconnected
/// - [`PostmanError::CostOverflow`] if no pairing's cost fits in a [`Weight`]
///
/// # Examples
///
/// ```
/// use u_postman::models::Multigraph;
/// use u_postman::matching::{min_weight_perfect_matching, odd_vertices};
///
/// let mut g = Multigraph::new();
/// g.insert_edge(0, 1, 2);
/// g.insert_edge(1, 2, 3);
/// let m = min_weight_perfect_matching(&g, &odd_vertices(&g)).unwrap();
/// assert_eq!(m.total_cost, 5);
/// assert_eq!(m.pairs[0].path.vertices, vec![0, 1, 2]);
/// ```
#[instrument(skip_all, fields(odd = odd.len()))]
pub fn min_weight_perfect_matching(graph: &Multigraph, odd: &[usize]) -> Result<Matching> {
    if odd.len() % 2 == 1 {
        return Err(PostmanError::OddCardinality { count: odd.len() });
    }
    if odd.is_empty() {
        return Ok(Matching::default());
    }

    let table = PairCostMatrix::build(graph, odd)?;
    let indices: Vec<usize> = (0..table.size()).collect();
    let (total_cost, index_pairs) =
        min_cost_pairing(&table, &indices).ok_or(PostmanError::CostOverflow)?;

    let mut pairs = Vec::with_capacity(index_pairs.len());
    for (i, j) in index_pairs {
        let (u, v) = (table.vertex(i), table.vertex(j));
        let path = table
            .path(i, j)
            .cloned()
            .ok_or(PostmanError::Unreachable { from: u, to: v })?;
        pairs.push(MatchedPair { u, v, path });
    }

    debug!(total_cost, pairs = pairs.len(), "matched odd vertices");
    Ok(Matching { pairs, total_cost })
}
