//! Undirected weighted multigraph with dynamic resizing.

use serde::{Deserialize, Serialize};

use crate::error::{PostmanError, Result};

/// Non-negative edge weight.
pub type Weight = u64;

/// A weighted, undirected multigraph stored as a dense n×n grid of cells.
///
/// Each cell `(u, v)` holds the weights of every parallel edge between `u`
/// and `v` in insertion order. Cells `(u, v)` and `(v, u)` always hold the
/// same sequence. A self-loop is stored once in cell `(u, u)` and counts
/// twice towards the degree of `u`.
///
/// The vertex set grows when an edge references a larger index and shrinks
/// after deletions to the smallest prefix that still covers every edge.
///
/// # Examples
///
/// ```
/// use u_postman::models::Multigraph;
///
/// let mut g = Multigraph::new();
/// g.insert_edge(0, 1, 1);
/// g.insert_edge(1, 2, 1);
/// g.insert_edge(0, 2, 1);
/// assert_eq!(g.size(), 3);
/// assert_eq!(g.degree(0), 2);
/// assert!(g.is_eulerian());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Vec<Weight>>>", into = "Vec<Vec<Vec<Weight>>>")]
pub struct Multigraph {
    cells: Vec<Vec<Weight>>,
    size: usize,
}

impl Multigraph {
    /// Creates a graph with a single isolated vertex.
    pub fn new() -> Self {
        Self::with_vertices(1)
    }

    /// Creates an edgeless graph with `size` vertices.
    ///
    /// A size of zero is allowed and yields the degenerate empty graph.
    pub fn with_vertices(size: usize) -> Self {
        Self {
            cells: vec![Vec::new(); size * size],
            size,
        }
    }

    /// Builds a graph from a square, symmetric matrix of parallel-edge weights.
    ///
    /// Self-loops on the diagonal are read once per listed weight.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_postman::models::Multigraph;
    ///
    /// let g = Multigraph::from_matrix(vec![
    ///     vec![vec![], vec![2, 5]],
    ///     vec![vec![2, 5], vec![]],
    /// ]).unwrap();
    /// assert_eq!(g.multiplicity(0, 1), 2);
    /// let asymmetric = vec![vec![vec![], vec![1]], vec![vec![], vec![]]];
    /// assert!(Multigraph::from_matrix(asymmetric).is_err());
    /// ```
    pub fn from_matrix(matrix: Vec<Vec<Vec<Weight>>>) -> Result<Self> {
        let size = matrix.len();
        if let Some((row, bad)) = matrix
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != size)
        {
            return Err(PostmanError::InvalidMatrix(format!(
                "row {row} has {} cells, expected {size}",
                bad.len()
            )));
        }
        for i in 0..size {
            for j in (i + 1)..size {
                if matrix[i][j] != matrix[j][i] {
                    return Err(PostmanError::InvalidMatrix(format!(
                        "cells ({i}, {j}) and ({j}, {i}) differ"
                    )));
                }
            }
        }
        let cells = matrix.into_iter().flatten().collect();
        Ok(Self { cells, size })
    }

    /// Exports the graph as a square matrix of parallel-edge weights.
    pub fn to_matrix(&self) -> Vec<Vec<Vec<Weight>>> {
        (0..self.size)
            .map(|u| (0..self.size).map(|v| self.cell(u, v).to_vec()).collect())
            .collect()
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Inserts an undirected edge, growing the vertex set if needed.
    pub fn insert_edge(&mut self, u: usize, v: usize, weight: Weight) {
        let needed = u.max(v) + 1;
        if needed > self.size {
            self.resize(needed);
        }
        self.cell_mut(u, v).push(weight);
        if u != v {
            self.cell_mut(v, u).push(weight);
        }
    }

    /// Removes the most recently inserted edge between `u` and `v`.
    ///
    /// Returns the removed weight, or `None` if either vertex is out of range
    /// or no such edge exists. After a removal the graph shrinks to the
    /// smallest prefix that still covers every edge, keeping at least one
    /// vertex.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_postman::models::Multigraph;
    ///
    /// let mut g = Multigraph::new();
    /// g.insert_edge(0, 1, 4);
    /// g.insert_edge(1, 3, 2);
    /// assert_eq!(g.size(), 4);
    /// assert_eq!(g.delete_edge(3, 1), Some(2));
    /// assert_eq!(g.size(), 2);
    /// assert_eq!(g.delete_edge(9, 0), None);
    /// ```
    pub fn delete_edge(&mut self, u: usize, v: usize) -> Option<Weight> {
        if u >= self.size || v >= self.size {
            return None;
        }
        let weight = self.cell_mut(u, v).pop()?;
        if u != v {
            self.cell_mut(v, u).pop();
        }

        let needed = (0..self.size)
            .rev()
            .find(|&i| self.has_incident_edge(i))
            .map_or(1, |i| i + 1);
        if needed < self.size {
            self.resize(needed);
        }
        Some(weight)
    }

    /// Removes every edge and resets to a single isolated vertex.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Total multiplicity of edges incident to `v`; self-loops count twice.
    ///
    /// Vertices outside the graph are isolated and have degree 0.
    pub fn degree(&self, v: usize) -> usize {
        if v >= self.size {
            return 0;
        }
        let row: usize = (0..self.size).map(|j| self.cell(v, j).len()).sum();
        row + self.cell(v, v).len()
    }

    /// Degree of every vertex, indexed by vertex id.
    pub fn degrees(&self) -> Vec<usize> {
        (0..self.size).map(|v| self.degree(v)).collect()
    }

    /// Returns `true` if every vertex has even degree.
    pub fn is_eulerian(&self) -> bool {
        (0..self.size).all(|v| self.degree(v) % 2 == 0)
    }

    /// Weights of the parallel edges between `u` and `v`, oldest first.
    ///
    /// Empty when either vertex is out of range.
    pub fn weights(&self, u: usize, v: usize) -> &[Weight] {
        if u >= self.size || v >= self.size {
            return &[];
        }
        self.cell(u, v)
    }

    /// Number of parallel edges between `u` and `v`.
    pub fn multiplicity(&self, u: usize, v: usize) -> usize {
        self.weights(u, v).len()
    }

    /// Cheapest parallel edge between `u` and `v`, if any.
    pub fn min_weight(&self, u: usize, v: usize) -> Option<Weight> {
        self.weights(u, v).iter().copied().min()
    }

    /// Returns `true` if at least one edge joins `u` and `v`.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        !self.weights(u, v).is_empty()
    }

    /// Every edge instance once, as `(u, v, weight)` with `u <= v`.
    pub fn edges(&self) -> Vec<(usize, usize, Weight)> {
        let mut out = Vec::new();
        for u in 0..self.size {
            for v in u..self.size {
                out.extend(self.cell(u, v).iter().map(|&w| (u, v, w)));
            }
        }
        out
    }

    /// Number of edge instances.
    pub fn edge_count(&self) -> usize {
        (0..self.size)
            .map(|u| (u..self.size).map(|v| self.cell(u, v).len()).sum::<usize>())
            .sum()
    }

    /// Sum of all edge weights.
    ///
    /// # Errors
    ///
    /// [`PostmanError::CostOverflow`] if the sum does not fit in a [`Weight`].
    pub fn total_weight(&self) -> Result<Weight> {
        checked_sum(self.edges().iter().map(|&(_, _, w)| w))
    }

    /// Returns an error unless `v` is a vertex of this graph.
    pub fn check_vertex(&self, v: usize) -> Result<()> {
        if v < self.size {
            Ok(())
        } else {
            Err(PostmanError::InvalidVertex {
                vertex: v,
                size: self.size,
            })
        }
    }

    pub(crate) fn cell(&self, u: usize, v: usize) -> &[Weight] {
        &self.cells[u * self.size + v]
    }

    pub(crate) fn cell_mut(&mut self, u: usize, v: usize) -> &mut Vec<Weight> {
        &mut self.cells[u * self.size + v]
    }

    fn has_incident_edge(&self, v: usize) -> bool {
        (0..self.size).any(|j| !self.cell(v, j).is_empty())
    }

    fn resize(&mut self, new_size: usize) {
        let keep = self.size.min(new_size);
        let mut cells = vec![Vec::new(); new_size * new_size];
        for u in 0..keep {
            for v in 0..keep {
                cells[u * new_size + v] = std::mem::take(&mut self.cells[u * self.size + v]);
            }
        }
        self.cells = cells;
        self.size = new_size;
    }
}

/// Adds up weights, failing instead of wrapping or saturating.
pub(crate) fn checked_sum<I>(weights: I) -> Result<Weight>
where
    I: IntoIterator<Item = Weight>,
{
    weights
        .into_iter()
        .try_fold(0, |acc: Weight, w| acc.checked_add(w))
        .ok_or(PostmanError::CostOverflow)
}

impl Default for Multigraph {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Vec<Vec<Weight>>>> for Multigraph {
    type Error = PostmanError;

    fn try_from(matrix: Vec<Vec<Vec<Weight>>>) -> Result<Self> {
        Self::from_matrix(matrix)
    }
}

impl From<Multigraph> for Vec<Vec<Vec<Weight>>> {
    fn from(graph: Multigraph) -> Self {
        graph.to_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Multigraph {
        let mut g = Multigraph::new();
        g.insert_edge(0, 1, 1);
        g.insert_edge(1, 2, 1);
        g.insert_edge(0, 2, 1);
        g
    }

    #[test]
    fn test_new_is_single_vertex() {
        let g = Multigraph::new();
        assert_eq!(g.size(), 1);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_eulerian());
    }

    #[test]
    fn test_with_zero_vertices() {
        let g = Multigraph::with_vertices(0);
        assert_eq!(g.size(), 0);
        assert!(g.is_eulerian());
        assert!(g.edges().is_empty());
    }

    #[test]
    fn test_insert_grows() {
        let mut g = triangle();
        g.insert_edge(2, 5, 7);
        assert_eq!(g.size(), 6);
        assert_eq!(g.weights(0, 1), &[1]);
        assert_eq!(g.weights(5, 2), &[7]);
        assert_eq!(g.degree(3), 0);
    }

    #[test]
    fn test_insert_symmetric() {
        let mut g = Multigraph::new();
        g.insert_edge(3, 1, 9);
        assert_eq!(g.weights(1, 3), g.weights(3, 1));
        assert_eq!(g.size(), 4);
    }

    #[test]
    fn test_parallel_edges_degree() {
        let mut g = Multigraph::new();
        g.insert_edge(0, 1, 3);
        g.insert_edge(0, 1, 1);
        assert_eq!(g.multiplicity(0, 1), 2);
        assert_eq!(g.degree(0), 2);
        assert_eq!(g.min_weight(1, 0), Some(1));
        assert!(g.is_eulerian());
    }

    #[test]
    fn test_self_loop_counts_twice() {
        let mut g = Multigraph::new();
        g.insert_edge(0, 1, 1);
        g.insert_edge(1, 1, 4);
        assert_eq!(g.degree(1), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.total_weight().expect("small weights"), 5);
    }

    #[test]
    fn test_total_weight_overflow() {
        let mut g = Multigraph::new();
        g.insert_edge(0, 1, u64::MAX / 2 + 1);
        g.insert_edge(1, 2, u64::MAX / 2 + 1);
        assert!(matches!(g.total_weight(), Err(PostmanError::CostOverflow)));
        g.delete_edge(1, 2);
        assert_eq!(g.total_weight().expect("one edge"), u64::MAX / 2 + 1);
    }

    #[test]
    fn test_delete_removes_last_inserted() {
        let mut g = Multigraph::new();
        g.insert_edge(0, 1, 3);
        g.insert_edge(0, 1, 8);
        assert_eq!(g.delete_edge(1, 0), Some(8));
        assert_eq!(g.weights(0, 1), &[3]);
        assert_eq!(g.weights(1, 0), &[3]);
    }

    #[test]
    fn test_delete_shrinks() {
        let mut g = triangle();
        g.insert_edge(2, 4, 1);
        assert_eq!(g.size(), 5);
        g.delete_edge(2, 4);
        assert_eq!(g.size(), 3);
        assert_eq!(g, triangle());
    }

    #[test]
    fn test_delete_keeps_interior_isolated() {
        let mut g = Multigraph::new();
        g.insert_edge(0, 3, 1);
        g.insert_edge(0, 1, 1);
        g.delete_edge(0, 1);
        assert_eq!(g.size(), 4);
    }

    #[test]
    fn test_delete_floor_is_one_vertex() {
        let mut g = Multigraph::new();
        g.insert_edge(2, 3, 1);
        g.delete_edge(2, 3);
        assert_eq!(g.size(), 1);
    }

    #[test]
    fn test_delete_out_of_range_noop() {
        let mut g = triangle();
        let before = g.clone();
        assert_eq!(g.delete_edge(0, 10), None);
        assert_eq!(g, before);
    }

    #[test]
    fn test_delete_missing_edge_does_not_shrink() {
        let mut g = Multigraph::with_vertices(4);
        assert_eq!(g.delete_edge(0, 1), None);
        assert_eq!(g.size(), 4);
    }

    #[test]
    fn test_matrix_roundtrip() {
        let mut g = triangle();
        g.insert_edge(0, 1, 6);
        let back = Multigraph::from_matrix(g.to_matrix()).expect("valid");
        assert_eq!(back, g);
    }

    #[test]
    fn test_from_matrix_not_square() {
        let err = Multigraph::from_matrix(vec![vec![vec![]], vec![vec![], vec![]]]);
        assert!(matches!(err, Err(PostmanError::InvalidMatrix(_))));
    }

    #[test]
    fn test_edges_listed_once() {
        let mut g = triangle();
        g.insert_edge(1, 2, 5);
        assert_eq!(g.edges(), vec![(0, 1, 1), (0, 2, 1), (1, 2, 1), (1, 2, 5)]);
    }

    #[test]
    fn test_check_vertex() {
        let g = triangle();
        assert!(g.check_vertex(2).is_ok());
        assert!(matches!(
            g.check_vertex(3),
            Err(PostmanError::InvalidVertex { vertex: 3, size: 3 })
        ));
    }

    #[test]
    fn test_clear() {
        let mut g = triangle();
        g.clear();
        assert_eq!(g, Multigraph::new());
    }
}
