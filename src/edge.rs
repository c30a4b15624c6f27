use std::fmt::{Debug, Display};

use crate::Node;

/// An unweighted edge is defined by two nodes/endpoints.
/// Edges are directed from `self.0` to `self.1`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// Weight of an edge. Unsigned, so weights are non-negative by construction.
pub type Weight = u32;

/// Weight assigned to edges that are inserted without an explicit weight
pub const UNIT_WEIGHT: Weight = 1;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// A directed edge `(u, v)` carrying a weight `w`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge(pub Node, pub Node, pub Weight);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.0, self.1, self.2)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Attaches a weight to the edge
    pub fn with_weight(&self, weight: Weight) -> WeightedEdge {
        WeightedEdge(self.0, self.1, weight)
    }
}

impl WeightedEdge {
    /// Source node of the edge
    pub fn source(&self) -> Node {
        self.0
    }

    /// Target node of the edge
    pub fn target(&self) -> Node {
        self.1
    }

    /// Weight of the edge
    pub fn weight(&self) -> Weight {
        self.2
    }

    /// Drops the weight
    pub fn unweighted(&self) -> Edge {
        Edge(self.0, self.1)
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints and keeping the weight
    pub fn reverse(&self) -> Self {
        WeightedEdge(self.1, self.0, self.2)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

impl From<Edge> for WeightedEdge {
    /// Unweighted edges get [`UNIT_WEIGHT`]
    fn from(value: Edge) -> Self {
        value.with_weight(UNIT_WEIGHT)
    }
}

impl From<(Node, Node)> for WeightedEdge {
    /// Unweighted edges get [`UNIT_WEIGHT`]
    fn from(value: (Node, Node)) -> Self {
        WeightedEdge(value.0, value.1, UNIT_WEIGHT)
    }
}

impl From<&(Node, Node)> for WeightedEdge {
    fn from(value: &(Node, Node)) -> Self {
        WeightedEdge(value.0, value.1, UNIT_WEIGHT)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for WeightedEdge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unweighted_edges_get_unit_weight() {
        assert_eq!(WeightedEdge::from((3, 4)), WeightedEdge(3, 4, 1));
        assert_eq!(WeightedEdge::from(Edge(3, 4)), WeightedEdge(3, 4, UNIT_WEIGHT));
        assert_eq!(WeightedEdge::from((3, 4, 7)).weight(), 7);
    }

    #[test]
    fn reverse_keeps_weight() {
        let e = WeightedEdge(1, 2, 9);
        assert_eq!(e.reverse(), WeightedEdge(2, 1, 9));
        assert_eq!(e.reverse().reverse(), e);
        assert_eq!(e.unweighted().reverse(), Edge(2, 1));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Edge(0, 5)), "(0,5)");
        assert_eq!(format!("{:?}", WeightedEdge(0, 5, 2)), "(0,5;2)");
    }
}
