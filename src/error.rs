//! Error types for graph operations.
//!
//! Every fallible operation in the crate reports a [`GraphError`]. Nothing here
//! is transient: a failure always means the caller handed in a handle that does
//! not belong to the graph (or no longer does), or a cost function broke the
//! non-negativity contract of Dijkstra.

use core::fmt;

/// Which arena an out-of-range handle was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexKind {
    /// A `NodeIndex` checked against the node arena.
    Node,
    /// An `EdgeIndex` checked against the edge arena.
    Edge,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Node => f.write_str("node"),
            IndexKind::Edge => f.write_str("edge"),
        }
    }
}

/// Graph operation error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The handle points outside the current arena bounds.
    ///
    /// This includes the end-of-list sentinel and every handle issued before
    /// the last `clear()`.
    #[error("{kind} index {index} out of range for arena of length {len}")]
    IndexOutOfRange {
        /// Arena the handle was checked against.
        kind: IndexKind,
        /// The offending position.
        index: usize,
        /// Arena length at the time of the check.
        len: usize,
    },

    /// A Dijkstra cost function returned a negative (or unordered) cost.
    #[error("edge {edge} has a negative cost")]
    NegativeWeight {
        /// Position of the edge whose cost was rejected.
        edge: usize,
    },

    /// A Dijkstra distance plus an edge cost does not fit the cost type.
    #[error("distance overflows the cost type across edge {edge}")]
    DistanceOverflow {
        /// Position of the edge whose relaxation overflowed.
        edge: usize,
    },
}

impl GraphError {
    pub(crate) fn node_out_of_range(index: usize, len: usize) -> Self {
        GraphError::IndexOutOfRange {
            kind: IndexKind::Node,
            index,
            len,
        }
    }

    pub(crate) fn edge_out_of_range(index: usize, len: usize) -> Self {
        GraphError::IndexOutOfRange {
            kind: IndexKind::Edge,
            index,
            len,
        }
    }
}

/// Result type for graph operations.
pub type Result<T> = core::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_arena() {
        let err = GraphError::node_out_of_range(7, 3);
        assert_eq!(
            err.to_string(),
            "node index 7 out of range for arena of length 3"
        );

        let err = GraphError::edge_out_of_range(0, 0);
        assert_eq!(
            err.to_string(),
            "edge index 0 out of range for arena of length 0"
        );
    }

    #[test]
    fn negative_weight_display() {
        let err = GraphError::NegativeWeight { edge: 4 };
        assert_eq!(err.to_string(), "edge 4 has a negative cost");
    }

    #[test]
    fn distance_overflow_display() {
        let err = GraphError::DistanceOverflow { edge: 2 };
        assert_eq!(
            err.to_string(),
            "distance overflows the cost type across edge 2"
        );
    }
}
