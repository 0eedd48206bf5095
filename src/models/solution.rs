//! Matching, augmentation, and solver result types.

use serde::{Deserialize, Serialize};

use super::{EulerianCircuit, ShortestPath, Weight};

/// Two odd-degree vertices joined by the shortest path between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedPair {
    /// First endpoint (the lower-ordered odd vertex).
    pub u: usize,
    /// Second endpoint.
    pub v: usize,
    /// Shortest path from `u` to `v`.
    pub path: ShortestPath,
}

/// A perfect matching over the odd-degree vertices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matching {
    /// Matched pairs in enumeration order.
    pub pairs: Vec<MatchedPair>,
    /// Sum of the pair path costs.
    pub total_cost: Weight,
}

impl Matching {
    /// Returns `true` if nothing needed matching.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// An edge instance added by augmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicatedEdge {
    /// Step origin on the matched path.
    pub u: usize,
    /// Step destination on the matched path.
    pub v: usize,
    /// Weight of the duplicated instance.
    pub weight: Weight,
}

/// Edges duplicated to make the graph Eulerian.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Augmentation {
    /// Every inserted edge instance, in insertion order.
    pub duplicated: Vec<DuplicatedEdge>,
    /// Total weight of the inserted edges.
    pub added_cost: Weight,
}

/// The postman's route and how it was obtained.
///
/// # Examples
///
/// ```
/// use u_postman::models::Multigraph;
///
/// let mut g = Multigraph::new();
/// g.insert_edge(0, 1, 2);
/// g.insert_edge(1, 2, 3);
/// let route = g.resolve(0).unwrap();
/// assert_eq!(route.total_cost(), 10);
/// assert_eq!(route.duplicated_edges().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanRoute {
    /// The closed walk on the augmented graph.
    pub circuit: EulerianCircuit,
    /// Matching over odd vertices (empty when the input was Eulerian).
    pub matching: Matching,
    /// Edges inserted into the graph.
    pub augmentation: Augmentation,
    /// Total edge weight before augmentation.
    pub original_cost: Weight,
}

impl PostmanRoute {
    /// Ordered vertex sequence of the walk.
    pub fn vertices(&self) -> &[usize] {
        self.circuit.vertices()
    }

    /// Total weight walked.
    pub fn total_cost(&self) -> Weight {
        self.circuit.cost()
    }

    /// `(u, v)` pairs of duplicated edges, for highlighting.
    pub fn duplicated_edges(&self) -> Vec<(usize, usize)> {
        self.augmentation
            .duplicated
            .iter()
            .map(|e| (e.u, e.v))
            .collect()
    }

    /// Returns `true` if the graph needed no augmentation.
    pub fn was_eulerian(&self) -> bool {
        self.augmentation.duplicated.is_empty() && self.matching.is_empty()
    }
}

/// A defect found when checking a walk against a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationType {
    /// The walk has no vertices although the graph has some.
    Empty,
    /// The walk does not begin at the requested vertex.
    WrongStart {
        /// Requested start vertex.
        expected: usize,
        /// Actual first vertex.
        actual: usize,
    },
    /// The walk does not end where it began.
    NotClosed {
        /// First vertex.
        first: usize,
        /// Last vertex.
        last: usize,
    },
    /// A step moves between vertices that share no edge.
    NotAnEdge {
        /// Position of the step within the walk.
        step: usize,
        /// Step origin.
        u: usize,
        /// Step destination.
        v: usize,
    },
    /// An edge is traversed fewer times than it occurs in the graph.
    EdgeNotCovered {
        /// Lower endpoint.
        u: usize,
        /// Higher endpoint.
        v: usize,
        /// Parallel instances in the graph.
        required: usize,
        /// Traversals found in the walk.
        traversed: usize,
    },
}

/// A defect in a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}
