/*!
# Shortest-Path Trees

A [`ShortestPathTree`] is the result of a single-source traversal: one distance and one
predecessor per node. Following predecessors from any reached node leads back to the source
along a shortest path, which is how [`ShortestPathTree::path_to`] reconstructs paths.
*/

use super::*;
use crate::error::check_node;

/// Distance table and predecessor table of a single-source shortest-path search.
///
/// - `distances[v]` is the length of a shortest path from the source to `v`, or [`UNREACHED`].
/// - `predecessors[v]` is the node before `v` on that path, or [`INVALID_NODE`] if `v` is the
///   source or was not reached.
///
/// A tree is created by [`Bfs`] or [`Dijkstra`]; passing it back into another traversal
/// (e.g. [`ShortestPaths::bfs_tree_into`]) reuses its allocations and overwrites its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: Node,
    distances: Vec<Distance>,
    predecessors: Vec<Node>,
}

impl Default for ShortestPathTree {
    /// A tree over a single node that is its own source
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl ShortestPathTree {
    /// Creates the tree of a traversal that did not progress beyond `source` yet.
    pub(crate) fn new(n: NumNodes, source: Node) -> Self {
        let mut tree = Self {
            source,
            distances: Vec::new(),
            predecessors: Vec::new(),
        };
        tree.reset(n, source);
        tree
    }

    /// Resets all entries to *unreached* and marks `source` with distance `0`.
    pub(crate) fn reset(&mut self, n: NumNodes, source: Node) {
        debug_assert!(source < n);

        self.distances.clear();
        self.distances.resize(n as usize, UNREACHED);
        self.predecessors.clear();
        self.predecessors.resize(n as usize, INVALID_NODE);

        self.source = source;
        self.distances[source as usize] = 0;
    }

    /// Updates distance and predecessor of `v` together.
    #[inline]
    pub(crate) fn update(&mut self, v: Node, distance: Distance, predecessor: Node) {
        debug_assert!(distance < self.distances[v as usize]);
        self.distances[v as usize] = distance;
        self.predecessors[v as usize] = predecessor;
    }

    /// Raw distance of `v` which may be [`UNREACHED`]
    #[inline]
    pub(crate) fn raw_distance(&self, v: Node) -> Distance {
        self.distances[v as usize]
    }

    /// Returns the source node of the traversal
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the number of nodes in the traversed graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.distances.len() as NumNodes
    }

    /// Returns the distance from the source to `v` or `None` if `v` was not reached.
    /// ** Panics if `v >= n` **
    pub fn distance_to(&self, v: Node) -> Option<Distance> {
        finite_distance(self.distances[v as usize])
    }

    /// Returns the predecessor of `v` on its shortest path.
    /// Returns `None` if `v` is the source or was not reached.
    /// ** Panics if `v >= n` **
    pub fn predecessor_of(&self, v: Node) -> Option<Node> {
        let p = self.predecessors[v as usize];
        (p != INVALID_NODE).then_some(p)
    }

    /// Returns *true* if the traversal reached `v`
    /// ** Panics if `v >= n` **
    pub fn is_reachable(&self, v: Node) -> bool {
        self.distances[v as usize] != UNREACHED
    }

    /// Returns the complete distance table; unreached nodes hold [`UNREACHED`]
    pub fn raw_distances(&self) -> &[Distance] {
        &self.distances
    }

    /// Returns the complete predecessor table; nodes without predecessor hold [`INVALID_NODE`]
    pub fn raw_predecessors(&self) -> &[Node] {
        &self.predecessors
    }

    /// Returns an iterator over all reached nodes (including the source) in increasing order
    pub fn reachable_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(v, &d)| (d != UNREACHED).then_some(v as Node))
    }

    /// Returns the number of reached nodes (including the source)
    pub fn number_of_reachable_nodes(&self) -> NumNodes {
        self.reachable_nodes().count() as NumNodes
    }

    /// Returns an iterator walking the shortest path from `target` back to the source.
    /// The iterator is empty if `target` was not reached.
    /// ** Panics if `target >= n` **
    pub fn path_iter(&self, target: Node) -> PathToSource<'_> {
        PathToSource {
            tree: self,
            next: self.is_reachable(target).then_some(target),
        }
    }

    /// Writes the shortest path from the source to `target` into `path`, replacing its
    /// previous content. The path starts with the source and ends with `target`; it is left
    /// empty if `target` was not reached.
    /// ** Panics if `target >= n` **
    pub fn path_to_into(&self, target: Node, path: &mut Vec<Node>) {
        path.clear();
        path.extend(self.path_iter(target));
        path.reverse();
    }

    /// Returns the shortest path from the source to `target` (both included),
    /// or an empty path if `target` was not reached.
    /// ** Panics if `target >= n` **
    ///
    /// # Examples
    /// ```
    /// use spgraphs::{prelude::*, algo::*};
    ///
    /// let g = ArenaGraph::from_edges(4, [(0, 1), (1, 2), (0, 2)]);
    /// let tree = g.bfs_tree(0);
    ///
    /// assert_eq!(tree.path_to(2), vec![0, 2]);
    /// assert_eq!(tree.path_to(0), vec![0]);
    /// assert!(tree.path_to(3).is_empty());
    /// ```
    pub fn path_to(&self, target: Node) -> Vec<Node> {
        let mut path = Vec::new();
        self.path_to_into(target, &mut path);
        path
    }

    /// Returns the shortest path from the source to `target` (both included),
    /// or an empty path if `target` was not reached.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRangeVertex`] if `target >= n`.
    pub fn try_path_to(&self, target: Node) -> Result<Vec<Node>> {
        check_node(target, self.number_of_nodes())?;
        Ok(self.path_to(target))
    }
}

/// Iterator over a shortest path in reverse, i.e. from the target back to the source.
/// Created by [`ShortestPathTree::path_iter`].
pub struct PathToSource<'a> {
    tree: &'a ShortestPathTree,
    next: Option<Node>,
}

impl Iterator for PathToSource<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.predecessor_of(current);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None => (0, Some(0)),
            Some(_) => (1, Some(self.tree.distances.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    /// 0 -> 1 -> 2 and an isolated node 3
    fn chain_tree() -> ShortestPathTree {
        let mut tree = ShortestPathTree::new(4, 0);
        tree.update(1, 1, 0);
        tree.update(2, 2, 1);
        tree
    }

    #[test]
    fn fresh_tree() {
        let tree = ShortestPathTree::new(3, 1);
        assert_eq!(tree.source(), 1);
        assert_eq!(tree.number_of_nodes(), 3);
        assert_eq!(tree.raw_distances(), &[UNREACHED, 0, UNREACHED]);
        assert_eq!(tree.raw_predecessors(), &[INVALID_NODE; 3]);
        assert_eq!(tree.distance_to(1), Some(0));
        assert_eq!(tree.predecessor_of(1), None);
        assert_eq!(tree.reachable_nodes().collect_vec(), vec![1]);
    }

    #[test]
    fn paths() {
        let tree = chain_tree();
        assert_eq!(tree.path_to(2), vec![0, 1, 2]);
        assert_eq!(tree.path_iter(2).collect_vec(), vec![2, 1, 0]);
        assert_eq!(tree.path_to(0), vec![0]);
        assert!(tree.path_to(3).is_empty());
        assert_eq!(tree.path_iter(3).count(), 0);
        assert_eq!(tree.number_of_reachable_nodes(), 3);
    }

    #[test]
    fn path_into_reuses_buffer() {
        let tree = chain_tree();
        let mut path = vec![42; 10];

        tree.path_to_into(1, &mut path);
        assert_eq!(path, vec![0, 1]);

        tree.path_to_into(3, &mut path);
        assert!(path.is_empty());
    }

    #[test]
    fn try_path_out_of_range() {
        let tree = chain_tree();
        assert_eq!(tree.try_path_to(2).unwrap(), vec![0, 1, 2]);
        assert!(matches!(
            tree.try_path_to(4),
            Err(GraphError::OutOfRangeVertex { node: 4, n: 4 })
        ));
    }

    #[test]
    fn reset_clears_everything() {
        let mut tree = chain_tree();
        tree.reset(5, 3);

        assert_eq!(tree, ShortestPathTree::new(5, 3));
        assert_eq!(tree.reachable_nodes().collect_vec(), vec![3]);
        assert!(tree.path_to(2).is_empty());
    }
}
