//! Dense pairwise shortest-path table over a vertex subset.

use crate::error::{PostmanError, Result};
use crate::models::{Multigraph, ShortestPath, Weight};

use super::dijkstra::{dijkstra, UNREACHABLE};

/// A dense k×k table of shortest paths between selected vertices.
///
/// Entry `(i, j)` refers to `vertices[i]` and `vertices[j]`, stored in
/// row-major order. Only `i < j` entries carry a path; the table is
/// symmetric in cost.
///
/// # Examples
///
/// ```
/// use u_postman::models::Multigraph;
/// use u_postman::distance::PairCostMatrix;
///
/// let mut g = Multigraph::new();
/// g.insert_edge(0, 1, 2);
/// g.insert_edge(1, 2, 3);
/// let m = PairCostMatrix::build(&g, &[0, 2]).unwrap();
/// assert_eq!(m.cost(0, 1), 5);
/// assert_eq!(m.path(1, 0).unwrap().vertices, vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct PairCostMatrix {
    vertices: Vec<usize>,
    costs: Vec<Weight>,
    paths: Vec<Option<ShortestPath>>,
}

impl PairCostMatrix {
    /// Computes shortest paths between every pair of `vertices`.
    ///
    /// Runs one Dijkstra per vertex; the path for `(i, j)` with `i < j` is
    /// taken from the tree rooted at `vertices[i]`.
    ///
    /// # Errors
    ///
    /// [`PostmanError::InvalidVertex`] for an out-of-range vertex,
    /// [`PostmanError::Unreachable`] for the first disconnected pair, and
    /// [`PostmanError::CostOverflow`] when a distance does not fit.
    pub fn build(graph: &Multigraph, vertices: &[usize]) -> Result<Self> {
        let k = vertices.len();
        let mut costs = vec![0; k * k];
        let mut paths = vec![None; k * k];

        for (i, &from) in vertices.iter().enumerate() {
            let tree = dijkstra(graph, from)?;
            for (j, &to) in vertices.iter().enumerate().skip(i + 1) {
                graph.check_vertex(to)?;
                let path = tree
                    .path_to(to)
                    .ok_or(PostmanError::Unreachable { from, to })?;
                costs[i * k + j] = path.cost;
                costs[j * k + i] = path.cost;
                paths[i * k + j] = Some(path);
            }
        }

        Ok(Self {
            vertices: vertices.to_vec(),
            costs,
            paths,
        })
    }

    /// Creates a table from explicit costs with no paths attached.
    ///
    /// Returns `None` if `costs.len()` is not `vertices.len()²`.
    pub fn from_costs(vertices: Vec<usize>, costs: Vec<Weight>) -> Option<Self> {
        let k = vertices.len();
        if costs.len() != k * k {
            return None;
        }
        Some(Self {
            vertices,
            costs,
            paths: vec![None; k * k],
        })
    }

    /// Number of vertices in the table.
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// The graph vertex behind table index `i`.
    pub fn vertex(&self, i: usize) -> usize {
        self.vertices[i]
    }

    /// The graph vertices, in table order.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Shortest-path cost between table indices `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn cost(&self, i: usize, j: usize) -> Weight {
        self.costs[i * self.size() + j]
    }

    /// Shortest path between table indices `i` and `j`, oriented from the
    /// lower index to the higher one.
    pub fn path(&self, i: usize, j: usize) -> Option<&ShortestPath> {
        let (a, b) = if i <= j { (i, j) } else { (j, i) };
        self.paths[a * self.size() + b].as_ref()
    }

    /// Returns `true` if every off-diagonal pair is connected.
    pub fn is_connected(&self) -> bool {
        let k = self.size();
        (0..k).all(|i| (0..k).all(|j| i == j || self.cost(i, j) != UNREACHABLE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> Multigraph {
        // Center 0 with leaves 1, 2, 3 of weights 1, 2, 3.
        let mut g = Multigraph::new();
        g.insert_edge(0, 1, 1);
        g.insert_edge(0, 2, 2);
        g.insert_edge(0, 3, 3);
        g
    }

    #[test]
    fn test_build_costs() {
        let m = PairCostMatrix::build(&star(), &[0, 1, 2, 3]).expect("connected");
        assert_eq!(m.size(), 4);
        assert_eq!(m.cost(1, 2), 3);
        assert_eq!(m.cost(2, 1), 3);
        assert_eq!(m.cost(2, 3), 5);
        assert_eq!(m.cost(0, 0), 0);
        assert!(m.is_connected());
    }

    #[test]
    fn test_paths_oriented_low_to_high() {
        let m = PairCostMatrix::build(&star(), &[1, 3]).expect("connected");
        assert_eq!(m.path(0, 1).expect("path").vertices, vec![1, 0, 3]);
        assert_eq!(m.path(1, 0).expect("path").vertices, vec![1, 0, 3]);
        assert!(m.path(0, 0).is_none());
    }

    #[test]
    fn test_build_unreachable() {
        let mut g = star();
        g.insert_edge(5, 6, 1);
        let err = PairCostMatrix::build(&g, &[1, 5]);
        assert!(matches!(
            err,
            Err(PostmanError::Unreachable { from: 1, to: 5 })
        ));
    }

    #[test]
    fn test_build_invalid_vertex() {
        let err = PairCostMatrix::build(&star(), &[0, 8]);
        assert!(matches!(
            err,
            Err(PostmanError::InvalidVertex { vertex: 8, .. })
        ));
    }

    #[test]
    fn test_from_costs() {
        let m = PairCostMatrix::from_costs(vec![4, 7], vec![0, 6, 6, 0]).expect("valid");
        assert_eq!(m.cost(0, 1), 6);
        assert_eq!(m.vertex(1), 7);
        assert!(m.path(0, 1).is_none());
        assert!(PairCostMatrix::from_costs(vec![4, 7], vec![0, 6, 6]).is_none());
    }

    #[test]
    fn test_from_costs_disconnected() {
        let m = PairCostMatrix::from_costs(vec![0, 1], vec![0, UNREACHABLE, UNREACHABLE, 0])
            .expect("valid");
        assert!(!m.is_connected());
    }
}
