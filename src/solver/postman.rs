//! Route inspection pipeline.
//!
//! Eulerian graphs go straight to Hierholzer. Otherwise the odd-degree
//! vertices are matched by shortest-path cost, the matched paths are
//! duplicated into the graph, and Hierholzer runs on the augmented graph.
//! Augmentation is the only step that mutates the caller's graph, and it runs
//! only after every odd pair has been shown to be connected.

use tracing::{debug, info, instrument, warn};

use super::config::{SolverConfig, EXPENSIVE_ODD_VERTICES};
use crate::error::{PostmanError, Result};
use crate::eulerian::{augment, hierholzer};
use crate::matching::{min_weight_perfect_matching, odd_vertices, pairing_count};
use crate::models::{Augmentation, EulerianCircuit, Matching, Multigraph, PostmanRoute, Weight};

/// Solves the Chinese Postman problem on a multigraph.
///
/// # Examples
///
/// ```
/// use u_postman::models::Multigraph;
/// use u_postman::solver::PostmanSolver;
///
/// let mut g = Multigraph::new();
/// g.insert_edge(0, 1, 2);
/// g.insert_edge(1, 2, 3);
///
/// let route = PostmanSolver::default().resolve(&mut g, 0).unwrap();
/// assert_eq!(route.vertices(), &[0, 1, 2, 1, 0]);
/// assert_eq!(route.total_cost(), 10);
/// assert_eq!(g.edge_count(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PostmanSolver {
    config: SolverConfig,
}

impl PostmanSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Computes a minimum-weight closed walk from `start` covering every edge.
    ///
    /// On success `graph` permanently contains the duplicated edges. On
    /// failure `graph` is unchanged.
    ///
    /// # Errors
    ///
    /// - [`PostmanError::InvalidVertex`] if `start` is out of range
    /// - [`PostmanError::TooManyOddVertices`] above the configured ceiling
    /// - [`PostmanError::Unreachable`] if two odd vertices are disconnected
    /// - [`PostmanError::Disconnected`] if edges are unreachable from `start`
    /// - [`PostmanError::CostOverflow`] if the edge total or route cost
    ///   does not fit in a [`Weight`]
    #[instrument(skip(self, graph), fields(size = graph.size(), edges = graph.edge_count()))]
    pub fn resolve(&self, graph: &mut Multigraph, start: usize) -> Result<PostmanRoute> {
        if graph.size() > 0 {
            graph.check_vertex(start)?;
        }
        let original_cost = graph.total_weight()?;

        if graph.is_eulerian() {
            debug!("graph already Eulerian");
            let circuit = hierholzer(graph, start)?;
            return Ok(Self::route(
                circuit,
                Matching::default(),
                Augmentation::default(),
                original_cost,
            ));
        }

        let odd = odd_vertices(graph);
        if let Some(limit) = self.config.max_odd_vertices {
            if odd.len() > limit {
                return Err(PostmanError::TooManyOddVertices {
                    count: odd.len(),
                    limit,
                });
            }
        }
        if odd.len() > EXPENSIVE_ODD_VERTICES {
            warn!(
                odd = odd.len(),
                pairings = pairing_count(odd.len()),
                "exhaustive matching over many odd vertices"
            );
        }
        debug!(?odd, "odd-degree vertices");

        let matching = min_weight_perfect_matching(graph, &odd)?;

        // Hierholzer can still fail on an edge component that holds no odd
        // vertex; check on a copy so a failed resolve leaves `graph` intact.
        let mut augmented = graph.clone();
        let augmentation = augment(&mut augmented, &matching)?;
        let circuit = hierholzer(&augmented, start)?;
        *graph = augmented;

        info!(
            cost = circuit.cost(),
            duplicated = augmentation.duplicated.len(),
            "resolved postman route"
        );
        Ok(Self::route(circuit, matching, augmentation, original_cost))
    }

    fn route(
        circuit: EulerianCircuit,
        matching: Matching,
        augmentation: Augmentation,
        original_cost: Weight,
    ) -> PostmanRoute {
        PostmanRoute {
            circuit,
            matching,
            augmentation,
            original_cost,
        }
    }
}

impl Multigraph {
    /// Solves the postman problem from `start` with the default solver.
    ///
    /// See [`PostmanSolver::resolve`].
    pub fn resolve(&mut self, start: usize) -> Result<PostmanRoute> {
        PostmanSolver::default().resolve(self, start)
    }
}
