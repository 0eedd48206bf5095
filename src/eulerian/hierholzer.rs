//! Eulerian circuit construction (Hierholzer).
//!
//! # Algorithm
//!
//! Keep a stack seeded with the start vertex. While the top vertex still has
//! an unused edge, take the first one in ascending neighbor order, consume
//! that instance in both directions, and push the neighbor. When the top has
//! no unused edges, pop it onto the output. The pop sequence is the circuit
//! in reverse; it is reversed so the walk reads in traversal order.
//!
//! # Complexity
//!
//! O(n·m) with the linear neighbor scan, m = number of edge instances.
//!
//! # Reference
//!
//! Hierholzer, C. & Wiener, C. (1873). "Über die Möglichkeit, einen
//! Linienzug ohne Wiederholung und ohne Unterbrechung zu umfahren",
//! *Mathematische Annalen* 6(1), 30-32.

use tracing::{instrument, trace};

use crate::error::{PostmanError, Result};
use crate::matching::odd_vertices;
use crate::models::{EulerianCircuit, Multigraph, Weight};

/// Builds a closed walk from `start` that uses every edge of `graph` once.
///
/// Works on a private copy; `graph` is left untouched. A graph without edges
/// yields the single-vertex walk `[start]`, and a graph without vertices
/// yields an empty walk.
///
/// # Errors
///
/// - [`PostmanError::InvalidVertex`] if `start` is out of range
/// - [`PostmanError::NotEulerian`] if any vertex has odd degree
/// - [`PostmanError::Disconnected`] if some edges are unreachable from `start`
/// - [`PostmanError::CostOverflow`] if the circuit cost overflows
///
/// # Examples
///
/// ```
/// use u_postman::models::Multigraph;
/// use u_postman::eulerian::hierholzer;
///
/// let mut g = Multigraph::new();
/// g.insert_edge(0, 1, 1);
/// g.insert_edge(1, 2, 1);
/// g.insert_edge(0, 2, 1);
/// let c = hierholzer(&g, 0).unwrap();
/// assert_eq!(c.vertices(), &[0, 1, 2, 0]);
/// assert_eq!(c.cost(), 3);
/// ```
#[instrument(skip(graph), fields(size = graph.size()))]
pub fn hierholzer(graph: &Multigraph, start: usize) -> Result<EulerianCircuit> {
    if graph.size() == 0 {
        return Ok(EulerianCircuit::new(Vec::new(), 0));
    }
    graph.check_vertex(start)?;

    let odd = odd_vertices(graph);
    if !odd.is_empty() {
        return Err(PostmanError::NotEulerian { odd });
    }

    let n = graph.size();
    let mut work = graph.clone();
    let mut stack = vec![start];
    let mut walk = Vec::with_capacity(graph.edge_count() + 1);
    let mut cost: Weight = 0;

    while let Some(&v) = stack.last() {
        let next = (0..n).find_map(|w| work.cell(v, w).last().map(|&weight| (w, weight)));
        match next {
            Some((w, weight)) => {
                work.cell_mut(v, w).pop();
                if w != v {
                    work.cell_mut(w, v).pop();
                }
                cost = cost.checked_add(weight).ok_or(PostmanError::CostOverflow)?;
                trace!(from = v, to = w, weight, "traverse");
                stack.push(w);
            }
            None => {
                stack.pop();
                walk.push(v);
            }
        }
    }

    let remaining = work.edge_count();
    if remaining > 0 {
        return Err(PostmanError::Disconnected { start, remaining });
    }

    walk.reverse();
    Ok(EulerianCircuit::new(walk, cost))
}
