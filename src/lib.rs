//! # u-postman
//!
//! Chinese Postman (route inspection) solver for weighted, undirected
//! multigraphs: the minimum-weight closed walk that traverses every edge at
//! least once.
//!
//! ## Modules
//!
//! - [`models`] — Multigraph store, paths, circuits, and result types
//! - [`distance`] — Dijkstra shortest paths and pairwise cost tables
//! - [`matching`] — Odd-vertex detection and exact minimum-weight perfect matching
//! - [`eulerian`] — Edge augmentation and Hierholzer circuit construction
//! - [`solver`] — The resolve pipeline and its configuration
//! - [`evaluation`] — Coverage and closure checks for walks
//! - [`io`] — Plain adjacency-matrix text format
//! - [`generate`] — Random instances for tests and benchmarks
//!
//! ## Example
//!
//! ```
//! use u_postman::models::Multigraph;
//!
//! let mut g = Multigraph::new();
//! g.insert_edge(0, 1, 1);
//! g.insert_edge(1, 2, 1);
//! g.insert_edge(0, 2, 1);
//! let route = g.resolve(0).unwrap();
//! assert_eq!(route.vertices(), &[0, 1, 2, 0]);
//! ```

pub mod distance;
pub mod error;
pub mod eulerian;
pub mod evaluation;
pub mod generate;
pub mod io;
pub mod matching;
pub mod models;
pub mod solver;

pub use error::{PostmanError, Result};
