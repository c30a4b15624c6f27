/*!
# Arena Adjacency Lists

[`ArenaGraph`] stores all edges in a single arena (`Vec<ArenaEdge>`). Every node keeps the
index of its most recently added outgoing edge in `head`, and every edge keeps the index of
the edge that was added to the same source before it. The out-neighborhood of a node is thus
a singly linked list through the arena, iterated in reverse insertion order.

Inserting an edge is a single push onto the arena and a single write to `head`, i.e.
amortized `O(1)`, and no edge is ever moved after insertion.
*/

use super::*;

/// `None`-able index into the edge arena
type OptionalEdgeIndex = OptionalNodeImpl<{ NumEdges::MAX }>;

/// A single record in the edge arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ArenaEdge {
    to: Node,
    weight: Weight,
    next: Option<OptionalEdgeIndex>,
}

/// Directed weighted graph with arena-backed adjacency lists.
///
/// Undirected graphs are modelled by adding both directions of every edge
/// (see [`GraphEdgeEditing::try_add_undirected_edge`]).
#[derive(Debug, Clone)]
pub struct ArenaGraph {
    head: Vec<Option<OptionalEdgeIndex>>,
    edges: Vec<ArenaEdge>,
    limits: GraphLimits,
}

impl ArenaGraph {
    /// Creates an empty graph with `n` nodes and the default [`GraphLimits`].
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] if `n == 0`.
    pub fn try_new(n: NumNodes) -> Result<Self> {
        Self::try_with_limits(n, GraphLimits::default())
    }

    /// Creates an empty graph with `n` nodes that never exceeds `limits`.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] if `n == 0` and
    /// [`GraphError::CapacityExceeded`] if `n` exceeds the node limit.
    pub fn try_with_limits(n: NumNodes, limits: GraphLimits) -> Result<Self> {
        limits.check_nodes(n)?;
        Ok(Self {
            head: vec![None; n as usize],
            edges: Vec::new(),
            limits,
        })
    }

    /// Removes all edges while keeping the nodes (and the allocated arena)
    pub fn clear_edges(&mut self) {
        self.head.iter_mut().for_each(|h| *h = None);
        self.edges.clear();
    }
}

impl GraphNew for ArenaGraph {
    fn new(n: NumNodes) -> Self {
        assert!(n > 0);
        Self {
            head: vec![None; n as usize],
            edges: Vec::new(),
            limits: GraphLimits::default(),
        }
    }
}

impl GraphNodeOrder for ArenaGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.head.len() as NumNodes
    }
}

impl GraphEdgeOrder for ArenaGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl WeightedAdjacencyList for ArenaGraph {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        ArenaNeighbors {
            edges: &self.edges,
            next: self.head[u as usize],
        }
    }
}

impl GraphEdgeEditing for ArenaGraph {
    fn limits(&self) -> GraphLimits {
        self.limits
    }

    fn try_add_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        self.limits.check_edges(self.edges.len() as u64 + 1)?;

        // `check_edges` guarantees `index < NumEdges::MAX`, so the index is never `None`
        let index = self.edges.len() as NumEdges;
        self.edges.push(ArenaEdge {
            to: v,
            weight,
            next: self.head[u as usize],
        });
        self.head[u as usize] = OptionalEdgeIndex::new(index);

        Ok(())
    }
}

impl GraphFromScratch for ArenaGraph {
    fn try_from_edges_with_limits<I, E>(n: NumNodes, edges: I, limits: GraphLimits) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        let mut graph = Self::try_with_limits(n, limits)?;
        graph.try_add_edges(edges)?;
        Ok(graph)
    }
}

/// Iterator following the linked list of out-edges of a node through the arena
struct ArenaNeighbors<'a> {
    edges: &'a [ArenaEdge],
    next: Option<OptionalEdgeIndex>,
}

impl Iterator for ArenaNeighbors<'_> {
    type Item = (Node, Weight);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let edge = &self.edges[self.next?.get() as usize];
        self.next = edge.next;
        Some((edge.to, edge.weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn reverse_insertion_order() {
        let mut graph = ArenaGraph::new(4);
        graph.add_edge(0, 1, 5);
        graph.add_edge(0, 2, 6);
        graph.add_edge(0, 3, 7);
        graph.add_edge(2, 0, 1);

        assert_eq!(
            graph.weighted_neighbors_of(0).collect_vec(),
            vec![(3, 7), (2, 6), (1, 5)]
        );
        assert_eq!(graph.neighbors_of(2).collect_vec(), vec![0]);
        assert_eq!(graph.neighbors_of(1).count(), 0);
        assert_eq!(graph.degree_of(0), 3);
        assert_eq!(graph.number_of_edges(), 4);
    }

    #[test]
    fn parallel_edges_and_loops_are_kept() {
        let mut graph = ArenaGraph::new(2);
        graph.add_edge(0, 1, 3);
        graph.add_edge(0, 1, 3);
        graph.add_edge(1, 1, 2);
        graph.try_add_undirected_edge(1, 1, 4).unwrap();

        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![1, 1]);
        assert_eq!(
            graph.weighted_neighbors_of(1).collect_vec(),
            vec![(1, 4), (1, 2)]
        );
    }

    #[test]
    fn out_of_range() {
        let mut graph = ArenaGraph::new(3);
        assert!(matches!(
            graph.try_add_edge(0, 3, 1),
            Err(GraphError::OutOfRangeVertex { node: 3, n: 3 })
        ));
        assert!(matches!(
            graph.try_add_edge(7, 0, 1),
            Err(GraphError::OutOfRangeVertex { node: 7, n: 3 })
        ));
        assert!(graph.is_singleton());
    }

    #[test]
    #[should_panic]
    fn add_edge_panics_out_of_range() {
        let mut graph = ArenaGraph::new(3);
        graph.add_edge(0, 3, 1);
    }

    #[test]
    fn signed_weights() {
        let mut graph = ArenaGraph::new(3);
        graph.try_add_signed_edge(0, 1, 0).unwrap();
        graph.try_add_signed_edge(1, 2, Weight::MAX as i64).unwrap();

        assert!(matches!(
            graph.try_add_signed_edge(1, 2, -1),
            Err(GraphError::NegativeWeight {
                u: 1,
                v: 2,
                weight: -1
            })
        ));
        assert!(matches!(
            graph.try_add_signed_edge(1, 2, Weight::MAX as i64 + 1),
            Err(GraphError::WeightOutOfRange { .. })
        ));
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.max_weight(), Some(Weight::MAX));
    }

    #[test]
    fn limits() {
        assert!(matches!(ArenaGraph::try_new(0), Err(GraphError::EmptyGraph)));
        assert!(matches!(
            ArenaGraph::try_with_limits(11, GraphLimits::new().max_nodes(10)),
            Err(GraphError::CapacityExceeded { .. })
        ));

        let mut graph = ArenaGraph::try_with_limits(3, GraphLimits::new().max_edges(3)).unwrap();
        graph.try_add_undirected_edge(0, 1, 1).unwrap();

        // undirected insertion is all-or-nothing
        assert!(graph.try_add_undirected_edge(1, 2, 1).is_err());
        assert_eq!(graph.number_of_edges(), 2);

        graph.try_add_edge(1, 2, 1).unwrap();
        assert!(matches!(
            graph.try_add_edge(2, 1, 1),
            Err(GraphError::CapacityExceeded {
                requested: 4,
                limit: 3,
                ..
            })
        ));
    }

    #[test]
    fn clear_edges() {
        let mut graph = ArenaGraph::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        assert_eq!(graph.number_of_edges(), 3);

        graph.clear_edges();
        assert!(graph.is_singleton());
        assert_eq!(graph.number_of_nodes(), 3);
        assert!(graph.vertices().all(|u| graph.degree_of(u) == 0));

        graph.add_edge(2, 1, 8);
        assert_eq!(graph.ordered_edges(), vec![WeightedEdge(2, 1, 8)]);
    }
}
