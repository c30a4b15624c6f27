use std::ops::Range;

use crate::{config::GraphLimits, error::*, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    ///
    /// The range does not borrow `self` and hence may be used where additional mutable
    /// references of `self` are needed.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if `u` is a node of the graph, i.e. `u < n`
    fn has_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns `Err(GraphError::OutOfRangeVertex)` if `u` is not a node of the graph
    fn check_node(&self, u: Node) -> Result<()> {
        check_node(u, self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (directed) edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for weighted out-neighborhoods & edges.
///
/// The order in which neighbors are returned is up to the implementation,
/// but must be stable for the lifetime of the graph.
pub trait WeightedAdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the out-neighbors of a given vertex together
    /// with the weights of the connecting edges. Parallel edges are returned individually.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns an iterator over the out-neighbors of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors_of(u).map(|(v, _)| v)
    }

    /// Returns the number of outgoing edges of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.weighted_neighbors_of(u).count() as NumNodes
    }

    /// Returns the maximum out-degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.vertices().map(|u| self.degree_of(u)).max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.weighted_neighbors_of(u)
            .map(move |(v, w)| WeightedEdge(u, v, w))
    }

    /// Returns an iterator over all edges in the graph.
    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().flat_map(move |u| self.edges_of(u))
    }

    /// Returns all edges of the graph in sorted order.
    fn ordered_edges(&self) -> Vec<WeightedEdge> {
        let mut edges: Vec<WeightedEdge> = self.edges().collect();
        edges.sort_unstable();
        edges
    }

    /// Returns the maximum weight of any edge or `None` if there are no edges
    fn max_weight(&self) -> Option<Weight> {
        self.edges().map(|e| e.weight()).max()
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    /// ** Panics if `n == 0` **
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges into a graph
pub trait GraphEdgeEditing: GraphNodeOrder + GraphEdgeOrder {
    /// Returns the limits this graph was created with
    fn limits(&self) -> GraphLimits;

    /// Appends the directed edge `(u, v)` with weight `weight`.
    /// Parallel edges are allowed and not deduplicated.
    ///
    /// # Errors
    /// - [`GraphError::OutOfRangeVertex`] if `u >= n` or `v >= n`
    /// - [`GraphError::CapacityExceeded`] if the graph already holds the maximum number of edges
    fn try_add_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<()>;

    /// Appends the directed edge `(u, v)` with weight `weight`.
    /// ** Panics if [`GraphEdgeEditing::try_add_edge`] fails **
    fn add_edge(&mut self, u: Node, v: Node, weight: Weight) {
        if let Err(err) = self.try_add_edge(u, v, weight) {
            panic!("Cannot add edge ({u},{v}): {err}");
        }
    }

    /// Appends the directed edge `(u, v)` with a signed weight.
    ///
    /// # Errors
    /// Additionally to [`GraphEdgeEditing::try_add_edge`]:
    /// - [`GraphError::NegativeWeight`] if `weight < 0`
    /// - [`GraphError::WeightOutOfRange`] if `weight > Weight::MAX`
    fn try_add_signed_edge(&mut self, u: Node, v: Node, weight: i64) -> Result<()> {
        if weight < 0 {
            return Err(GraphError::NegativeWeight { u, v, weight });
        }
        let weight = Weight::try_from(weight)
            .map_err(|_| GraphError::WeightOutOfRange { u, v, weight })?;
        self.try_add_edge(u, v, weight)
    }

    /// Appends the edges `(u, v)` and `(v, u)` with the same weight.
    /// Either both or none are added. A self-loop is only added once.
    fn try_add_undirected_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;

        let additional = if u == v { 1 } else { 2 };
        self.limits()
            .check_edges(self.number_of_edges() as u64 + additional)?;

        self.try_add_edge(u, v, weight)?;
        if u != v {
            self.try_add_edge(v, u, weight)?;
        }
        Ok(())
    }

    /// Appends the edges `(u, v)` and `(v, u)` with the same weight.
    /// ** Panics if [`GraphEdgeEditing::try_add_undirected_edge`] fails **
    fn add_undirected_edge(&mut self, u: Node, v: Node, weight: Weight) {
        if let Err(err) = self.try_add_undirected_edge(u, v, weight) {
            panic!("Cannot add undirected edge ({u},{v}): {err}");
        }
    }

    /// Tries to add all edges in the collection. Stops at the first failing edge;
    /// edges added before it remain in the graph.
    fn try_add_edges<I, E>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.try_add_edge(u, v, w)?;
        }
        Ok(())
    }

    /// Adds all edges in the collection
    /// ** Panics if any edge cannot be added **
    fn add_edges<I, E>(&mut self, edges: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v, w);
        }
    }
}

/// A trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Tries to create a graph from a number of nodes and a collection of edges
    /// that never exceeds `limits`.
    ///
    /// # Errors
    /// Fails if `n == 0`, any endpoint is `>= n`, or `limits` are exceeded.
    fn try_from_edges_with_limits<I, E>(n: NumNodes, edges: I, limits: GraphLimits) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>;

    /// Tries to create a graph from a number of nodes and a collection of edges.
    ///
    /// # Errors
    /// Fails if `n == 0`, any endpoint is `>= n`, or the default [`GraphLimits`] are exceeded.
    fn try_from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        Self::try_from_edges_with_limits(n, edges, GraphLimits::default())
    }

    /// Create a graph from a number of nodes and a collection of edges.
    /// ** Panics if [`GraphFromScratch::try_from_edges`] fails **
    fn from_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        match Self::try_from_edges(n, edges) {
            Ok(graph) => graph,
            Err(err) => panic!("Cannot create graph: {err}"),
        }
    }
}
