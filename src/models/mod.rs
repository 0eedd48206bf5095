//! Domain model types for the route inspection problem.
//!
//! Provides the multigraph store, path and circuit types, and the result
//! types produced by matching, augmentation, and the solver.

mod multigraph;
mod route;
mod solution;

pub use multigraph::{Multigraph, Weight};
pub use route::{EulerianCircuit, ShortestPath};
pub use solution::{
    Augmentation, DuplicatedEdge, MatchedPair, Matching, PostmanRoute, Violation, ViolationType,
};

pub(crate) use multigraph::checked_sum;
