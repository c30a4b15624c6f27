/*!
# Graph Representations

Directed, weighted graph stores:

- [`ArenaGraph`]: arena-backed linked adjacency lists; supports appending edges at any time.
- [`CsrGraph`]: frozen compressed-sparse-row graph; fastest to traverse.

Both implement [`WeightedAdjacencyList`] and can thus be handed to every algorithm in
[`algo`](crate::algo). Undirected graphs are represented by inserting both directions of
every edge.
*/

use crate::{config::GraphLimits, error::*, ops::*, *};

mod arena;
mod csr;

pub use arena::*;
pub use csr::*;

crate::testing::test_graph_store!(
    arena_graph_ops,
    ArenaGraph,
    (GraphNew, GraphFromScratch, GraphEdgeEditing, ShortestPaths)
);
crate::testing::test_graph_store!(
    csr_graph_ops,
    CsrGraph,
    (GraphFromScratch, ShortestPaths)
);
