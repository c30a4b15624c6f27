//! Error types for graph construction, traversal and IO.

use std::fmt::{Display, Formatter};

use crate::{Node, NumNodes};

/// Resource that is bounded by [`GraphLimits`](crate::config::GraphLimits)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
    Nodes,
    Edges,
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Nodes => write!(f, "nodes"),
            Resource::Edges => write!(f, "edges"),
        }
    }
}

/// Graph error types.
///
/// All variants but `Io` are violations of a caller contract: retrying the same call will fail
/// again. Unreachable nodes are *not* errors; see
/// [`ShortestPathTree`](crate::algo::ShortestPathTree).
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A node (edge endpoint, source or target) is not in `0..n`.
    #[error("Node {node} is out of range for a graph with {n} nodes")]
    OutOfRangeVertex { node: Node, n: NumNodes },

    /// The graph would exceed its configured limits.
    #[error("Capacity exceeded: requested {requested} {resource}, limit is {limit}")]
    CapacityExceeded {
        resource: Resource,
        requested: u64,
        limit: u64,
    },

    /// An edge weight is negative.
    #[error("Negative weight {weight} on edge ({u},{v})")]
    NegativeWeight { u: Node, v: Node, weight: i64 },

    /// An edge weight does not fit into [`Weight`](crate::Weight).
    #[error("Weight {weight} on edge ({u},{v}) exceeds the maximum weight")]
    WeightOutOfRange { u: Node, v: Node, weight: i64 },

    /// A graph without nodes was requested.
    #[error("Empty graph")]
    EmptyGraph,

    /// Reading or writing failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Input does not follow the expected format.
    #[error("Parse error in line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Returns `Err(GraphError::OutOfRangeVertex)` unless `u < n`
#[inline]
pub(crate) fn check_node(u: Node, n: NumNodes) -> Result<()> {
    if u < n {
        Ok(())
    } else {
        Err(GraphError::OutOfRangeVertex { node: u, n })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_node_bounds() {
        assert!(check_node(0, 1).is_ok());
        assert!(check_node(4, 5).is_ok());
        assert!(matches!(
            check_node(5, 5),
            Err(GraphError::OutOfRangeVertex { node: 5, n: 5 })
        ));
    }

    #[test]
    fn messages() {
        let err = GraphError::CapacityExceeded {
            resource: Resource::Edges,
            requested: 11,
            limit: 10,
        };
        assert_eq!(
            err.to_string(),
            "Capacity exceeded: requested 11 edges, limit is 10"
        );

        let err = GraphError::NegativeWeight {
            u: 1,
            v: 2,
            weight: -3,
        };
        assert_eq!(err.to_string(), "Negative weight -3 on edge (1,2)");
    }
}
