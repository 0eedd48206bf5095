//! Solver configuration.

use serde::{Deserialize, Serialize};

/// Default ceiling on the number of odd-degree vertices (15!! ≈ 2·10⁶ pairings).
pub const DEFAULT_MAX_ODD_VERTICES: usize = 16;

/// Odd-vertex count above which the solver logs a warning before matching.
pub const EXPENSIVE_ODD_VERTICES: usize = 12;

/// Configuration for [`PostmanSolver`](super::PostmanSolver).
///
/// # Examples
///
/// ```
/// use u_postman::solver::SolverConfig;
///
/// let config = SolverConfig::default().with_max_odd_vertices(None);
/// assert_eq!(config.max_odd_vertices, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Refuse exact matching when more odd-degree vertices than this are
    /// present. `None` disables the limit.
    /// Default: 16.
    pub max_odd_vertices: Option<usize>,
}

impl SolverConfig {
    /// Sets the odd-vertex ceiling.
    pub fn with_max_odd_vertices(mut self, limit: Option<usize>) -> Self {
        self.max_odd_vertices = limit;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_odd_vertices: Some(DEFAULT_MAX_ODD_VERTICES),
        }
    }
}
