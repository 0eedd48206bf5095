//! Plain-text adjacency matrix format.
//!
//! One row per line, cells separated by whitespace. A cell is either `0`
//! (no edge) or a comma-separated list of parallel-edge weights:
//!
//! ```text
//! 0   2,5 3
//! 2,5 0   0
//! 3   0   0
//! ```
//!
//! Blank lines are ignored. A `0` inside a list is also read as "no edge",
//! so zero-weight edges do not survive a round trip through this format.

use crate::error::{PostmanError, Result};
use crate::models::{Multigraph, Weight};

/// Parses a graph from the text matrix format.
///
/// # Errors
///
/// [`PostmanError::Parse`] for a malformed weight and
/// [`PostmanError::InvalidMatrix`] if the matrix is not square or symmetric.
///
/// # Examples
///
/// ```
/// use u_postman::io::parse_matrix;
///
/// let g = parse_matrix("0 2,5\n2,5 0\n").unwrap();
/// assert_eq!(g.size(), 2);
/// assert_eq!(g.weights(0, 1), &[2, 5]);
/// ```
pub fn parse_matrix(text: &str) -> Result<Multigraph> {
    let mut rows = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|cell| parse_cell(cell, idx + 1))
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }
    Multigraph::from_matrix(rows)
}

/// Formats a graph in the text matrix format.
///
/// Zero-weight edges are omitted.
///
/// # Examples
///
/// ```
/// use u_postman::models::Multigraph;
/// use u_postman::io::{format_matrix, parse_matrix};
///
/// let mut g = Multigraph::new();
/// g.insert_edge(0, 1, 4);
/// g.insert_edge(0, 1, 1);
/// let text = format_matrix(&g);
/// assert_eq!(text, "0 4,1\n4,1 0\n");
/// assert_eq!(parse_matrix(&text).unwrap(), g);
/// ```
pub fn format_matrix(graph: &Multigraph) -> String {
    let mut out = String::new();
    for u in 0..graph.size() {
        let cells: Vec<String> = (0..graph.size())
            .map(|v| format_cell(graph.weights(u, v)))
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

fn parse_cell(cell: &str, line: usize) -> Result<Vec<Weight>> {
    let mut weights = Vec::new();
    for token in cell.split(',') {
        let w: Weight = token.trim().parse().map_err(|e| PostmanError::Parse {
            line,
            message: format!("invalid weight {token:?}: {e}"),
        })?;
        if w > 0 {
            weights.push(w);
        }
    }
    Ok(weights)
}

fn format_cell(weights: &[Weight]) -> String {
    let parts: Vec<String> = weights
        .iter()
        .filter(|&&w| w > 0)
        .map(Weight::to_string)
        .collect();
    if parts.is_empty() {
        "0".to_string()
    } else {
        parts.join(",")
    }
}
