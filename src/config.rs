/*!
# Graph Limits

Every graph carries a [`GraphLimits`] that bounds the number of nodes and edges it may hold.
Exceeding a limit yields [`GraphError::CapacityExceeded`] instead of an unbounded allocation.

Limits are configured using the *Setter* pattern:
```
use spgraphs::{prelude::*, config::GraphLimits};

let limits = GraphLimits::new().max_nodes(100).max_edges(2);
let mut graph = ArenaGraph::try_with_limits(10, limits).unwrap();

graph.try_add_edge(0, 1, 4).unwrap();
graph.try_add_edge(1, 0, 4).unwrap();
assert!(graph.try_add_edge(1, 2, 1).is_err());
```
*/

use crate::{
    NumEdges, NumNodes,
    error::{GraphError, Resource, Result},
};

/// Upper bounds on the size of a graph
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GraphLimits {
    max_nodes: NumNodes,
    max_edges: NumEdges,
}

impl Default for GraphLimits {
    /// Defaults to the largest sizes representable by [`NumNodes`] and [`NumEdges`]
    fn default() -> Self {
        Self {
            max_nodes: NumNodes::MAX,
            max_edges: NumEdges::MAX,
        }
    }
}

impl GraphLimits {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the maximum number of nodes
    pub fn max_nodes(mut self, n: NumNodes) -> Self {
        self.max_nodes = n;
        self
    }

    /// Updates the maximum number of (directed) edges
    pub fn max_edges(mut self, m: NumEdges) -> Self {
        self.max_edges = m;
        self
    }

    /// Returns the maximum number of nodes
    pub fn node_limit(&self) -> NumNodes {
        self.max_nodes
    }

    /// Returns the maximum number of edges
    pub fn edge_limit(&self) -> NumEdges {
        self.max_edges
    }

    /// Checks whether a graph with `n` nodes is allowed
    pub fn check_nodes(&self, n: NumNodes) -> Result<()> {
        if n == 0 {
            return Err(GraphError::EmptyGraph);
        }
        Self::check(Resource::Nodes, n as u64, self.max_nodes as u64)
    }

    /// Checks whether a graph may hold `m` edges in total
    pub fn check_edges(&self, m: u64) -> Result<()> {
        Self::check(Resource::Edges, m, self.max_edges as u64)
    }

    fn check(resource: Resource, requested: u64, limit: u64) -> Result<()> {
        if requested <= limit {
            Ok(())
        } else {
            Err(GraphError::CapacityExceeded {
                resource,
                requested,
                limit,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        let limits = GraphLimits::default();
        assert!(limits.check_nodes(NumNodes::MAX).is_ok());
        assert!(limits.check_edges(NumEdges::MAX as u64).is_ok());
        assert!(limits.check_edges(NumEdges::MAX as u64 + 1).is_err());
    }

    #[test]
    fn zero_nodes() {
        assert!(matches!(
            GraphLimits::default().check_nodes(0),
            Err(GraphError::EmptyGraph)
        ));
    }

    #[test]
    fn setters() {
        let limits = GraphLimits::new().max_nodes(5).max_edges(7);
        assert_eq!(limits.node_limit(), 5);
        assert_eq!(limits.edge_limit(), 7);

        assert!(limits.check_nodes(5).is_ok());
        assert!(matches!(
            limits.check_nodes(6),
            Err(GraphError::CapacityExceeded {
                resource: Resource::Nodes,
                requested: 6,
                limit: 5
            })
        ));
        assert!(limits.check_edges(7).is_ok());
        assert!(limits.check_edges(8).is_err());
    }
}
