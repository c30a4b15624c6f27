/// Every graph representation should implement `GraphNodeOrder`, `GraphEdgeOrder` and
/// `WeightedAdjacencyList`. The listed traits select which additional tests are generated.
macro_rules! test_graph_store {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{algo::*, ops::*, repr::*, testing::test_graph_store};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of `m` random weighted edges for nodes `0..n`;
            /// parallel edges and self-loops are kept
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<WeightedEdge> {
                (0..m).map(|_| {
                    WeightedEdge(
                        rng.random_range(0..n),
                        rng.random_range(0..n),
                        rng.random_range(0..20),
                    )
                }).collect_vec()
            }

            /// Sorted weighted out-neighborhoods of all nodes
            fn reference_adjacency(n: NumNodes, edges: &[WeightedEdge]) -> Vec<Vec<(Node, Weight)>> {
                let mut adj = vec![Vec::new(); n as usize];
                for &WeightedEdge(u, v, w) in edges {
                    adj[u as usize].push((v, w));
                }
                adj.iter_mut().for_each(|nbs| nbs.sort_unstable());
                adj
            }

            /// Bellman-Ford style fixpoint iteration: slow, but obviously correct
            fn reference_distances(
                n: NumNodes,
                edges: &[WeightedEdge],
                source: Node,
                unit: bool,
            ) -> Vec<Distance> {
                let mut dist = vec![UNREACHED; n as usize];
                dist[source as usize] = 0;

                let mut changed = true;
                while changed {
                    changed = false;
                    for &WeightedEdge(u, v, w) in edges {
                        let du = dist[u as usize];
                        if du == UNREACHED {
                            continue;
                        }
                        let nd = du + if unit { 1 } else { w as Distance };
                        if nd < dist[v as usize] {
                            dist[v as usize] = nd;
                            changed = true;
                        }
                    }
                }
                dist
            }

            fn assert_matches_reference<G: WeightedAdjacencyList + GraphEdgeOrder>(
                graph: &G,
                n: NumNodes,
                edges: &[WeightedEdge],
            ) {
                let adj = reference_adjacency(n, edges);

                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.number_of_edges() as usize, edges.len());
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert_eq!(graph.ordered_edges(), edges.iter().copied().sorted().collect_vec());

                for u in 0..n {
                    assert_eq!(
                        graph.weighted_neighbors_of(u).sorted().collect_vec(),
                        adj[u as usize]
                    );
                    assert_eq!(graph.degree_of(u) as usize, adj[u as usize].len());
                }
            }

            $(
                test_graph_store!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 1..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert!(graph.is_singleton());
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert_eq!(graph.max_degree(), 0);
            }
        }
    };
    ($graph:ident: GraphFromScratch) => {
        #[test]
        fn graph_from_scratch() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1 as NumNodes, 10, 20, 50] {
                for m in [0, n * 2, n * 5, n * 10] {
                    let edges = random_edges(rng, n, m);
                    let graph = <$graph>::from_edges(n, edges.iter());

                    assert_matches_reference(&graph, n, &edges);
                }
            }

            assert!(matches!(
                <$graph>::try_from_edges(3, [(0, 1), (3, 1)]),
                Err(GraphError::OutOfRangeVertex { node: 3, n: 3 })
            ));
            assert!(matches!(
                <$graph>::try_from_edges(0, std::iter::empty::<Edge>()),
                Err(GraphError::EmptyGraph)
            ));
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1 as NumNodes, 10, 20, 50] {
                for m in [n * 2, n * 5, n * 10] {
                    let edges = random_edges(rng, n, m);
                    let mut graph = <$graph>::new(n);

                    for (i, &WeightedEdge(u, v, w)) in edges.iter().enumerate() {
                        graph.try_add_edge(u, v, w).unwrap();
                        assert_eq!(graph.number_of_edges() as usize, i + 1);

                        // failing insertions leave the graph untouched
                        assert!(graph.try_add_edge(u, n, w).is_err());
                        assert!(graph.try_add_signed_edge(u, v, -1).is_err());
                        assert_eq!(graph.number_of_edges() as usize, i + 1);
                    }

                    assert_matches_reference(&graph, n, &edges);
                }
            }
        }

        #[test]
        fn undirected_edges() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [1 as NumNodes, 10, 20] {
                let sampled = random_edges(rng, n, 3 * n);
                let mut graph = <$graph>::new(n);

                let mut edges = Vec::new();
                for &e in &sampled {
                    graph.try_add_undirected_edge(e.source(), e.target(), e.weight()).unwrap();
                    edges.push(e);
                    if !e.is_loop() {
                        edges.push(e.reverse());
                    }
                }

                assert_matches_reference(&graph, n, &edges);
            }
        }
    };
    ($graph:ident: ShortestPaths) => {
        #[test]
        fn shortest_paths() {
            let rng = &mut Pcg64Mcg::seed_from_u64(7);

            for n in [1 as NumNodes, 10, 30] {
                for m in [0, n, n * 3] {
                    let edges = random_edges(rng, n, m);
                    let graph = <$graph>::from_edges(n, edges.iter());

                    for s in 0..n {
                        let bfs = graph.bfs_tree(s);
                        assert_eq!(bfs.raw_distances(), reference_distances(n, &edges, s, true));

                        let dijkstra = graph.dijkstra_tree(s);
                        assert_eq!(dijkstra.raw_distances(), reference_distances(n, &edges, s, false));

                        assert_eq!(bfs.number_of_reachable_nodes(), dijkstra.number_of_reachable_nodes());
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_store;
