/*!
# Dijkstra's Algorithm

[`Dijkstra`] computes weighted shortest-path distances from a single source and yields
vertices in the order in which they are settled, i.e. by non-decreasing distance.

Since edge weights are unsigned, the non-negativity requirement of the algorithm holds by
construction. The priority queue is a [`BinaryMinHeap`] without `decrease_key`: improving
the distance of a vertex pushes a new entry, and entries whose key exceeds the vertex's
current distance are skipped when popped (*lazy deletion*). The heap therefore holds at
most `O(m)` entries and a run takes `O((n + m) log m)`.
*/

use super::*;
use tracing::{debug, trace};

/// Dijkstra iterator that records distances and predecessors.
///
/// # Examples
/// ```
/// use spgraphs::{prelude::*, algo::*};
///
/// let g = CsrGraph::from_edges(3, [(0, 1, 5), (0, 2, 1), (2, 1, 2)]);
///
/// let order: Vec<Node> = g.dijkstra(0).collect();
/// assert_eq!(order, vec![0, 2, 1]);
///
/// let tree = g.dijkstra_tree(0);
/// assert_eq!(tree.distance_to(1), Some(3));
/// assert_eq!(tree.path_to(1), vec![0, 2, 1]);
/// ```
pub struct Dijkstra<'a, G> {
    graph: &'a G,
    tree: ShortestPathTree,
    heap: BinaryMinHeap<Distance, Node>,
    heap_pushes: usize,
    stale_pops: usize,
    finished: bool,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: WeightedAdjacencyList,
{
    /// Starts a search at `source`.
    /// ** Panics if `source >= n` **
    pub fn new(graph: &'a G, source: Node) -> Self {
        match Self::try_new(graph, source) {
            Ok(dijkstra) => dijkstra,
            Err(err) => panic!("Cannot start Dijkstra: {err}"),
        }
    }

    /// Starts a search at `source`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRangeVertex`] if `source >= n`.
    pub fn try_new(graph: &'a G, source: Node) -> Result<Self> {
        Self::try_reusing(graph, source, ShortestPathTree::default())
    }

    /// Starts a search at `source` that writes into the allocations of an existing `tree`.
    /// All previous contents of `tree` are discarded.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRangeVertex`] if `source >= n`.
    pub fn try_reusing(graph: &'a G, source: Node, mut tree: ShortestPathTree) -> Result<Self> {
        graph.check_node(source)?;
        tree.reset(graph.number_of_nodes(), source);

        let mut heap = BinaryMinHeap::with_capacity(graph.len());
        heap.push(0, source);

        Ok(Self {
            graph,
            tree,
            heap,
            heap_pushes: 1,
            stale_pops: 0,
            finished: false,
        })
    }

    /// Returns the tables computed so far. Distances of settled vertices are final;
    /// all others are upper bounds that may still decrease.
    pub fn tree(&self) -> &ShortestPathTree {
        &self.tree
    }

    /// Runs the search to completion and returns the resulting tree
    pub fn into_tree(mut self) -> ShortestPathTree {
        while self.next().is_some() {}
        self.tree
    }

    /// Returns the number of entries pushed onto the heap so far (including the source)
    pub fn heap_pushes(&self) -> usize {
        self.heap_pushes
    }

    /// Returns the number of outdated heap entries that were popped and skipped so far
    pub fn stale_pops(&self) -> usize {
        self.stale_pops
    }
}

impl<G> Iterator for Dijkstra<'_, G>
where
    G: WeightedAdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((d, u)) = self.heap.pop() {
            if d > self.tree.raw_distance(u) {
                self.stale_pops += 1;
                continue;
            }

            for (v, w) in self.graph.weighted_neighbors_of(u) {
                let nd = d + w as Distance;
                if nd < self.tree.raw_distance(v) {
                    trace!(u, v, distance = nd, "dijkstra relaxed");
                    self.tree.update(v, nd, u);
                    self.heap.push(nd, v);
                    self.heap_pushes += 1;
                }
            }

            return Some(u);
        }

        if !self.finished {
            self.finished = true;
            debug!(
                source = self.tree.source(),
                reached = self.tree.number_of_reachable_nodes(),
                heap_pushes = self.heap_pushes,
                stale_pops = self.stale_pops,
                "dijkstra finished"
            );
        }
        None
    }
}
