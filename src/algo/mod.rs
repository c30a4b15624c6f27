/*!
# Shortest-Path Algorithms

This module provides single-source shortest-path searches on top of the graph
representations in this crate:

- [`Bfs`]: hop distances, ignoring edge weights, in `O(n + m)`,
- [`Dijkstra`]: weighted distances using a binary min-heap, in `O((n + m) log m)`.

Both are **iterators** over the vertices in the order they are finalized, and both record
their results in a [`ShortestPathTree`] that answers distance, predecessor and path queries.
The [`ShortestPaths`] trait exposes them as methods on every graph:
```rust
use spgraphs::{prelude::*, algo::*};

let g = ArenaGraph::from_edges(3, [(0, 1, 7), (1, 2, 1)]);
assert_eq!(g.dijkstra_tree(0).distance_to(2), Some(8));
assert_eq!(g.bfs_tree(0).distance_to(2), Some(2));
```
*/

mod bfs;
mod dijkstra;
mod tree;

use crate::{prelude::*, utils::*};

pub use bfs::*;
pub use dijkstra::*;
pub use tree::*;

/// Shortest-path searches as methods on the graph itself.
///
/// The panicking variants (`bfs`, `bfs_tree`, ...) panic if `source >= n`;
/// the `try_` variants return [`GraphError::OutOfRangeVertex`] instead.
pub trait ShortestPaths: WeightedAdjacencyList {
    /// Returns a [`Bfs`] iterator starting at `source`.
    /// ** Panics if `source >= n` **
    fn bfs(&self, source: Node) -> Bfs<'_, Self> {
        Bfs::new(self, source)
    }

    /// Returns a [`Bfs`] iterator starting at `source`
    fn try_bfs(&self, source: Node) -> Result<Bfs<'_, Self>> {
        Bfs::try_new(self, source)
    }

    /// Runs a complete BFS from `source` and returns its tree.
    /// ** Panics if `source >= n` **
    ///
    /// # Examples
    /// ```
    /// use spgraphs::{prelude::*, algo::*};
    ///
    /// let g = CsrGraph::from_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let tree = g.bfs_tree(0);
    /// assert_eq!(tree.raw_distances(), &[0, 1, 2]);
    /// ```
    fn bfs_tree(&self, source: Node) -> ShortestPathTree {
        self.bfs(source).into_tree()
    }

    /// Runs a complete BFS from `source` and returns its tree
    fn try_bfs_tree(&self, source: Node) -> Result<ShortestPathTree> {
        Ok(self.try_bfs(source)?.into_tree())
    }

    /// Runs a complete BFS from `source` and stores the result in `tree`,
    /// reusing its allocations. On error, `tree` is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use spgraphs::{prelude::*, algo::*};
    ///
    /// let g = CsrGraph::from_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let mut tree = g.bfs_tree(0);
    /// g.bfs_tree_into(1, &mut tree).unwrap();
    /// assert_eq!(tree.distance_to(0), None);
    /// assert_eq!(tree.distance_to(2), Some(1));
    /// ```
    fn bfs_tree_into(&self, source: Node, tree: &mut ShortestPathTree) -> Result<()> {
        self.check_node(source)?;
        let reused = std::mem::take(tree);
        *tree = Bfs::try_reusing(self, source, reused)?.into_tree();
        Ok(())
    }

    /// Returns a [`Dijkstra`] iterator starting at `source`.
    /// ** Panics if `source >= n` **
    fn dijkstra(&self, source: Node) -> Dijkstra<'_, Self> {
        Dijkstra::new(self, source)
    }

    /// Returns a [`Dijkstra`] iterator starting at `source`
    fn try_dijkstra(&self, source: Node) -> Result<Dijkstra<'_, Self>> {
        Dijkstra::try_new(self, source)
    }

    /// Runs Dijkstra's algorithm from `source` to completion and returns its tree.
    /// ** Panics if `source >= n` **
    fn dijkstra_tree(&self, source: Node) -> ShortestPathTree {
        self.dijkstra(source).into_tree()
    }

    /// Runs Dijkstra's algorithm from `source` to completion and returns its tree
    fn try_dijkstra_tree(&self, source: Node) -> Result<ShortestPathTree> {
        Ok(self.try_dijkstra(source)?.into_tree())
    }

    /// Runs Dijkstra's algorithm from `source` and stores the result in `tree`,
    /// reusing its allocations. On error, `tree` is left unchanged.
    fn dijkstra_tree_into(&self, source: Node, tree: &mut ShortestPathTree) -> Result<()> {
        self.check_node(source)?;
        let reused = std::mem::take(tree);
        *tree = Dijkstra::try_reusing(self, source, reused)?.into_tree();
        Ok(())
    }
}

impl<G> ShortestPaths for G where G: WeightedAdjacencyList {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn random_graph(rng: &mut impl Rng, n: NumNodes, m: NumEdges, max_weight: Weight) -> CsrGraph {
        CsrGraph::gnm(rng, n, m, 1..=max_weight)
    }

    /// Asserts that `tree` describes valid shortest paths w.r.t. the given edge costs
    fn assert_consistent_tree<G, F>(graph: &G, tree: &ShortestPathTree, cost: F)
    where
        G: WeightedAdjacencyList,
        F: Fn(Weight) -> Distance,
    {
        let s = tree.source();
        assert_eq!(tree.distance_to(s), Some(0));
        assert_eq!(tree.predecessor_of(s), None);

        for v in graph.vertices() {
            let path = tree.path_to(v);
            let Some(d) = tree.distance_to(v) else {
                assert!(path.is_empty());
                assert_eq!(tree.predecessor_of(v), None);
                continue;
            };

            assert_eq!(path.first(), Some(&s));
            assert_eq!(path.last(), Some(&v));

            // every hop uses an existing edge and the cheapest such edge sums up to `d`
            let length: Distance = path
                .iter()
                .tuple_windows()
                .map(|(&a, &b)| {
                    graph
                        .weighted_neighbors_of(a)
                        .filter(|&(x, _)| x == b)
                        .map(|(_, w)| cost(w))
                        .min()
                        .unwrap()
                })
                .sum();
            assert_eq!(length, d);
        }

        // no edge can be relaxed any further
        for WeightedEdge(u, v, w) in graph.edges() {
            if let Some(du) = tree.distance_to(u) {
                assert!(tree.distance_to(v).unwrap() <= du + cost(w));
            }
        }
    }

    #[test]
    fn scenario_weighted_undirected() {
        let mut graph = ArenaGraph::new(5);
        for (u, v, w) in [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 4, 5)] {
            graph.try_add_undirected_edge(u, v, w).unwrap();
        }

        let tree = graph.try_dijkstra_tree(0).unwrap();
        assert_eq!(tree.raw_distances(), &[0, 3, 1, 4, 6]);
        assert_eq!(tree.try_path_to(3).unwrap(), vec![0, 2, 1, 3]);
    }

    #[test]
    fn scenario_chain() {
        let mut graph = ArenaGraph::new(6);
        graph.connect_path(0..6, UNIT_WEIGHT, true);

        let tree = graph.try_bfs_tree(0).unwrap();
        assert_eq!(tree.distance_to(5), Some(5));
        assert_eq!(tree.path_to(5), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn scenario_isolated_vertex() {
        let graph = CsrGraph::from_edges(4, [(0, 1), (1, 0), (1, 2), (2, 1)]);

        for s in 0..3 {
            assert!(!graph.bfs_tree(s).is_reachable(3));
            assert!(!graph.dijkstra_tree(s).is_reachable(3));
        }
        assert_eq!(graph.bfs_tree(3).number_of_reachable_nodes(), 1);
    }

    #[test]
    fn out_of_range_sources() {
        let graph = ArenaGraph::new(3);
        assert!(matches!(
            graph.try_bfs_tree(3),
            Err(GraphError::OutOfRangeVertex { node: 3, n: 3 })
        ));
        assert!(matches!(
            graph.try_dijkstra(10),
            Err(GraphError::OutOfRangeVertex { node: 10, n: 3 })
        ));

        let mut tree = graph.bfs_tree(1);
        let before = tree.clone();
        assert!(graph.dijkstra_tree_into(3, &mut tree).is_err());
        assert_eq!(tree, before);
    }

    #[test]
    fn random_trees_are_consistent() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);

        for _ in 0..20 {
            let n = rng.random_range(1..60);
            let m = rng.random_range(0..4 * n);
            let graph = random_graph(rng, n, m, 20);
            let s = rng.random_range(0..n);

            assert_consistent_tree(&graph, &graph.bfs_tree(s), |_| 1);
            assert_consistent_tree(&graph, &graph.dijkstra_tree(s), |w| w as Distance);
        }
    }

    #[test]
    fn unit_weights_agree_with_bfs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);

        for _ in 0..20 {
            let n = rng.random_range(1..80);
            let m = rng.random_range(0..3 * n);
            let graph = random_graph(rng, n, m, 1);

            for s in graph.vertices().step_by(7) {
                let bfs = graph.bfs_tree(s);
                let dijkstra = graph.dijkstra_tree(s);
                assert_eq!(bfs.raw_distances(), dijkstra.raw_distances());
            }
        }
    }

    #[test]
    fn settled_distances_never_decrease() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let graph = random_graph(rng, 200, 1000, 100);

        let mut dijkstra = graph.dijkstra(0);
        let mut previous = dijkstra.tree().clone();
        let mut last_settled = 0;

        while let Some(u) = dijkstra.next() {
            let current = dijkstra.tree();
            let d = current.distance_to(u).unwrap();
            assert!(last_settled <= d);
            last_settled = d;

            for (&before, &after) in previous.raw_distances().iter().zip(current.raw_distances()) {
                assert!(after <= before);
            }
            previous = current.clone();
        }
    }

    #[test]
    fn bfs_visits_by_layers() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);
        let graph = random_graph(rng, 150, 400, 10);

        let mut bfs = graph.bfs(0);
        while bfs.next().is_some() {}
        let tree = bfs.tree();

        assert!(
            bfs.visit_order()
                .iter()
                .map(|&u| tree.distance_to(u).unwrap())
                .is_sorted()
        );
        assert_eq!(
            bfs.visit_order().iter().copied().sorted().collect_vec(),
            tree.reachable_nodes().collect_vec()
        );
    }

    #[test]
    fn repeated_runs_are_identical() {
        let rng = &mut Pcg64Mcg::seed_from_u64(77);
        let graph = random_graph(rng, 100, 300, 50);

        let first = graph.dijkstra_tree(3);
        let mut reused = graph.bfs_tree(10);

        graph.dijkstra_tree_into(3, &mut reused).unwrap();
        assert_eq!(first, reused);
        assert_eq!(first, graph.dijkstra_tree(3));

        graph.bfs_tree_into(3, &mut reused).unwrap();
        assert_eq!(reused, graph.bfs_tree(3));
    }
}
