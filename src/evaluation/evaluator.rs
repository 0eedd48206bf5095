//! Walk evaluator that checks coverage and closure against a graph.

use std::collections::HashMap;

use crate::models::{Multigraph, Violation, ViolationType, Weight};

/// Checks a closed walk against the graph it is supposed to inspect.
///
/// A valid postman walk starts and ends at the requested vertex, only steps
/// along existing edges, and traverses every edge instance at least once.
/// Evaluate against the graph *before* augmentation to confirm that the
/// route covers the original edges.
///
/// # Examples
///
/// ```
/// use u_postman::models::Multigraph;
/// use u_postman::evaluation::RouteEvaluator;
///
/// let mut g = Multigraph::new();
/// g.insert_edge(0, 1, 2);
/// g.insert_edge(1, 2, 3);
/// let original = g.clone();
///
/// let route = g.resolve(0).unwrap();
/// let evaluator = RouteEvaluator::new(&original);
/// assert!(evaluator.evaluate(route.vertices(), 0).is_empty());
/// assert_eq!(evaluator.walk_cost(route.vertices()), Some(10));
/// ```
pub struct RouteEvaluator<'a> {
    graph: &'a Multigraph,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator for the given graph.
    pub fn new(graph: &'a Multigraph) -> Self {
        Self { graph }
    }

    /// Returns every violation found in `walk`; empty means the walk is valid.
    pub fn evaluate(&self, walk: &[usize], start: usize) -> Vec<Violation> {
        let mut violations = Vec::new();

        let (Some(&first), Some(&last)) = (walk.first(), walk.last()) else {
            if self.graph.size() > 0 {
                violations.push(Violation::new(ViolationType::Empty));
            }
            return violations;
        };

        if first != start {
            violations.push(Violation::new(ViolationType::WrongStart {
                expected: start,
                actual: first,
            }));
        }
        if first != last {
            violations.push(Violation::new(ViolationType::NotClosed { first, last }));
        }

        let mut traversed: HashMap<(usize, usize), usize> = HashMap::new();
        for (step, pair) in walk.windows(2).enumerate() {
            let (u, v) = (pair[0], pair[1]);
            if !self.graph.has_edge(u, v) {
                violations.push(Violation::new(ViolationType::NotAnEdge { step, u, v }));
                continue;
            }
            *traversed.entry((u.min(v), u.max(v))).or_insert(0) += 1;
        }

        let n = self.graph.size();
        for u in 0..n {
            for v in u..n {
                let required = self.graph.multiplicity(u, v);
                let count = traversed.get(&(u, v)).copied().unwrap_or(0);
                if count < required {
                    violations.push(Violation::new(ViolationType::EdgeNotCovered {
                        u,
                        v,
                        required,
                        traversed: count,
                    }));
                }
            }
        }

        violations
    }

    /// Cost of `walk` taking the cheapest parallel edge for every step.
    ///
    /// Returns `None` if a step is not an edge of the graph or the total
    /// does not fit in a [`Weight`].
    pub fn walk_cost(&self, walk: &[usize]) -> Option<Weight> {
        walk.windows(2).try_fold(0, |acc: Weight, w| {
            acc.checked_add(self.graph.min_weight(w[0], w[1])?)
        })
    }
}
