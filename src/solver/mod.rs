//! Orchestration of the route inspection pipeline.
//!
//! - [`PostmanSolver`] — parity check, matching, augmentation, Hierholzer
//! - [`SolverConfig`] — odd-vertex ceiling for the exact matching

mod config;
mod postman;

pub use config::{SolverConfig, DEFAULT_MAX_ODD_VERTICES, EXPENSIVE_ODD_VERTICES};
pub use postman::PostmanSolver;
