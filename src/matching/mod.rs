//! Odd-vertex detection and exact minimum-weight perfect matching.
//!
//! - [`odd_vertices`] — ascending list of odd-degree vertices
//! - [`min_weight_perfect_matching`] — exhaustive (2k−1)!! search over pairings
//! - [`min_cost_pairing`] — the pure recursive search on a cost table

mod odd;
mod perfect;

pub use odd::odd_vertices;
pub use perfect::{min_cost_pairing, min_weight_perfect_matching, pairing_count};
