//! Bulk load and export of the plain adjacency-matrix representation.
//!
//! Reading and writing files is left to the caller; these functions work on
//! strings.

mod matrix;

pub use matrix::{format_matrix, parse_matrix};

#[cfg(feature = "json")]
use crate::{error::Result, models::Multigraph};

/// Serializes a graph as a JSON matrix of parallel-edge weight lists.
#[cfg(feature = "json")]
pub fn to_json(graph: &Multigraph) -> Result<String> {
    Ok(serde_json::to_string(graph)?)
}

/// Parses a graph from a JSON matrix, validating shape and symmetry.
#[cfg(feature = "json")]
pub fn from_json(text: &str) -> Result<Multigraph> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;

    #[test]
    fn test_json_roundtrip() {
        let mut g = Multigraph::new();
        g.insert_edge(0, 1, 3);
        let text = to_json(&g).expect("serializable");
        assert_eq!(text, "[[[],[3]],[[3],[]]]");
        assert_eq!(from_json(&text).expect("valid"), g);
    }

    #[test]
    fn test_json_rejects_asymmetric() {
        assert!(from_json("[[[],[3]],[[],[]]]").is_err());
    }
}
