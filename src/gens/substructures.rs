/*!
# Substructure Generators

This module provides utility methods to add **paths** and **cycles** with a uniform edge
weight to an already existing graph. Both can be inserted directed (one edge per
consecutive pair) or undirected (both directions).

# Example

```rust
use spgraphs::{prelude::*, gens::*};

let mut g = ArenaGraph::new(5);
g.connect_path([0, 1, 2], 3, false);
g.connect_cycle([2, 3, 4], 1, false);

assert_eq!(
    g.ordered_edges(),
    vec![
        WeightedEdge(0, 1, 3),
        WeightedEdge(1, 2, 3),
        WeightedEdge(2, 3, 1),
        WeightedEdge(3, 4, 1),
        WeightedEdge(4, 2, 1),
    ]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles) inside an already
/// existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path** whose edges all have
    /// weight `weight`. If `undirected` is set, each edge is inserted in both directions.
    /// ** Panics if a node is out of range or the graph's edge limit is reached **
    fn connect_path<P>(&mut self, nodes_on_path: P, weight: Weight, undirected: bool)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**, i.e. a path that additionally
    /// connects the last node back to the first.
    /// ** Panics if a node is out of range or the graph's edge limit is reached **
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, weight: Weight, undirected: bool)
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P, weight: Weight, undirected: bool)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            if undirected {
                self.add_undirected_edge(u, v, weight);
            } else {
                self.add_edge(u, v, weight);
            }
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, weight: Weight, undirected: bool)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                if undirected {
                    self.add_undirected_edge(prev, cur, weight);
                } else {
                    self.add_edge(prev, cur, weight);
                }
                prev = cur;
            }

            if undirected {
                self.add_undirected_edge(prev, first, weight);
            } else {
                self.add_edge(prev, first, weight);
            }
        }
    }
}
