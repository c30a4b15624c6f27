/*!
# Breadth-First Search

[`Bfs`] computes hop distances (edge weights are ignored) from a single source and yields
vertices in the order in which they are dequeued. Since the queue is processed in
non-decreasing distance order, the first discovery of a vertex happens along a path with
the minimum number of edges.

The queue is a plain `Vec<Node>` with a read cursor: every vertex is enqueued at most once,
so the prefix before the cursor is exactly the visit order.
*/

use super::*;
use tracing::{debug, trace};

/// Breadth-first search iterator that records distances and predecessors.
///
/// # Examples
/// ```
/// use spgraphs::{prelude::*, algo::*};
///
/// let g = ArenaGraph::from_edges(4, [(0, 1), (1, 2), (0, 3)]);
///
/// let mut bfs = g.bfs(0);
/// assert_eq!(bfs.next(), Some(0));
///
/// let tree = bfs.into_tree();
/// assert_eq!(tree.distance_to(2), Some(2));
/// assert_eq!(tree.predecessor_of(2), Some(1));
/// ```
pub struct Bfs<'a, G> {
    graph: &'a G,
    tree: ShortestPathTree,
    queue: Vec<Node>,
    head: usize,
    finished: bool,
}

impl<'a, G> Bfs<'a, G>
where
    G: WeightedAdjacencyList,
{
    /// Starts a search at `source`.
    /// ** Panics if `source >= n` **
    pub fn new(graph: &'a G, source: Node) -> Self {
        match Self::try_new(graph, source) {
            Ok(bfs) => bfs,
            Err(err) => panic!("Cannot start BFS: {err}"),
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

        let mut queue = Vec::with_capacity(graph.len());
        queue.push(source);

        Ok(Self {
            graph,
            tree,
            queue,
            head: 0,
            finished: false,
        })
    }

    /// Returns the tables computed so far. Distances of vertices that are still queued are
    /// already final; vertices that were not discovered yet are reported as unreached.
    pub fn tree(&self) -> &ShortestPathTree {
        &self.tree
    }

    /// Runs the search to completion and returns the resulting tree
    pub fn into_tree(mut self) -> ShortestPathTree {
        while self.next().is_some() {}
        self.tree
    }

    /// Returns all vertices yielded so far in visit order
    pub fn visit_order(&self) -> &[Node] {
        &self.queue[..self.head]
    }
}

impl<G> Iterator for Bfs<'_, G>
where
    G: WeightedAdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(&u) = self.queue.get(self.head) else {
            if !self.finished {
                self.finished = true;
                debug!(
                    source = self.tree.source(),
                    reached = self.queue.len(),
                    "bfs finished"
                );
            }
            return None;
        };
        self.head += 1;

        let next_distance = self.tree.raw_distance(u) + 1;
        for v in self.graph.neighbors_of(u) {
            if !self.tree.is_reachable(v) {
                trace!(u, v, distance = next_distance, "bfs discovered");
                self.tree.update(v, next_distance, u);
                self.queue.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len() - self.head,
            Some(self.graph.len() - self.head),
        )
    }
}
