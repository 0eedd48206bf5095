//! Error taxonomy for graph construction and the postman pipeline.

/// Errors surfaced by the solver and the matrix loaders.
///
/// Recoverable local conditions (deleting a missing edge, shrinking to a
/// single vertex, an already-even vertex) are absorbed as no-ops and never
/// produce one of these.
#[derive(Debug, thiserror::Error)]
pub enum PostmanError {
    /// A referenced vertex is outside `0..size`.
    #[error("vertex {vertex} is out of range for a graph of {size} vertices")]
    InvalidVertex {
        /// The offending vertex id.
        vertex: usize,
        /// Current vertex count.
        size: usize,
    },

    /// No path connects two vertices that must be joined.
    #[error("vertex {to} is unreachable from vertex {from}")]
    Unreachable {
        /// Path origin.
        from: usize,
        /// Path destination.
        to: usize,
    },

    /// A circuit was requested on a graph with odd-degree vertices.
    #[error("graph is not Eulerian: odd-degree vertices {odd:?}")]
    NotEulerian {
        /// The odd-degree vertices, ascending.
        odd: Vec<usize>,
    },

    /// Some edges cannot be reached from the start vertex.
    #[error("{remaining} edge(s) are not reachable from start vertex {start}")]
    Disconnected {
        /// The start vertex of the walk.
        start: usize,
        /// Number of edge instances left untraversed.
        remaining: usize,
    },

    /// A perfect matching was requested over an odd number of vertices.
    #[error("cannot perfectly match an odd number ({count}) of vertices")]
    OddCardinality {
        /// Number of vertices supplied.
        count: usize,
    },

    /// A path, matching or route cost does not fit in a `Weight`.
    #[error("route cost overflows the weight type")]
    CostOverflow,

    /// Exact matching was refused because the odd-vertex set is too large.
    #[error("{count} odd-degree vertices exceed the matching limit of {limit}")]
    TooManyOddVertices {
        /// Number of odd-degree vertices found.
        count: usize,
        /// Configured ceiling.
        limit: usize,
    },

    /// A bulk-loaded matrix is not square or not symmetric.
    #[error("invalid adjacency matrix: {0}")]
    InvalidMatrix(String),

    /// A line of the matrix text format could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// JSON encoding or decoding failed.
    #[cfg(feature = "json")]
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PostmanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_vertex() {
        let err = PostmanError::InvalidVertex { vertex: 7, size: 3 };
        assert_eq!(
            err.to_string(),
            "vertex 7 is out of range for a graph of 3 vertices"
        );
    }

    #[test]
    fn test_display_unreachable() {
        let err = PostmanError::Unreachable { from: 0, to: 4 };
        assert_eq!(err.to_string(), "vertex 4 is unreachable from vertex 0");
    }

    #[test]
    fn test_display_cost_overflow() {
        assert_eq!(
            PostmanError::CostOverflow.to_string(),
            "route cost overflows the weight type"
        );
    }

    #[test]
    fn test_display_parse() {
        let err = PostmanError::Parse {
            line: 2,
            message: "bad weight".into(),
        };
        assert_eq!(err.to_string(), "line 2: bad weight");
    }
}
