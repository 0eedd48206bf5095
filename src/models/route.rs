//! Path and closed-walk types.

use serde::{Deserialize, Serialize};

use super::Weight;

/// A minimum-cost path between two vertices.
///
/// `vertices` starts at the origin and ends at the destination. A path from
/// a vertex to itself holds that single vertex and costs nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath {
    /// Sum of the cheapest parallel weight along each step.
    pub cost: Weight,
    /// Ordered vertices from origin to destination.
    pub vertices: Vec<usize>,
}

impl ShortestPath {
    /// First vertex of the path.
    pub fn origin(&self) -> Option<usize> {
        self.vertices.first().copied()
    }

    /// Last vertex of the path.
    pub fn destination(&self) -> Option<usize> {
        self.vertices.last().copied()
    }

    /// Consecutive `(a, b)` steps along the path.
    pub fn steps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }

    /// Number of edges on the path.
    pub fn len(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Returns `true` if the path has no edges.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A closed walk that uses every edge of an Eulerian multigraph exactly once.
///
/// # Examples
///
/// ```
/// use u_postman::models::EulerianCircuit;
///
/// let c = EulerianCircuit::new(vec![0, 1, 2, 0], 3);
/// assert_eq!(c.start(), Some(0));
/// assert_eq!(c.num_edges(), 3);
/// assert!(c.is_closed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EulerianCircuit {
    vertices: Vec<usize>,
    cost: Weight,
}

impl EulerianCircuit {
    /// Creates a circuit from its vertex sequence and total traversal cost.
    pub fn new(vertices: Vec<usize>, cost: Weight) -> Self {
        Self { vertices, cost }
    }

    /// Ordered vertex sequence; first and last are the start vertex.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Consumes the circuit, returning the vertex sequence.
    pub fn into_vertices(self) -> Vec<usize> {
        self.vertices
    }

    /// Total weight of the traversed edge instances.
    pub fn cost(&self) -> Weight {
        self.cost
    }

    /// The start (and end) vertex, if the walk is not empty.
    pub fn start(&self) -> Option<usize> {
        self.vertices.first().copied()
    }

    /// Number of edge traversals.
    pub fn num_edges(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Returns `true` if the walk ends where it started.
    pub fn is_closed(&self) -> bool {
        self.vertices.first() == self.vertices.last()
    }

    /// Consecutive `(a, b)` traversals.
    pub fn steps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }
}
