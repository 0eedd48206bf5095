//! Making a multigraph Eulerian and walking it.
//!
//! - [`augment`] — duplicate edges along matched shortest paths
//! - [`hierholzer`] — closed walk using every edge exactly once

mod augment;
mod hierholzer;

pub use augment::augment;
pub use hierholzer::hierholzer;
