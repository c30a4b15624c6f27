/*!
`spgraphs` computes **single-source shortest paths** on static, directed, non-negatively weighted
graphs:
- **BFS** for hop distances (edge weights are ignored),
- **Dijkstra** with a binary min-heap for weighted distances,
- **Path reconstruction** from the resulting predecessor table.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
As most common graphs do not exceed `2^32` nodes, this should normally suffice and save space as compared to `u64/usize`.
For **edges**, we use the tuple-structs `WeightedEdge(Node, Node, Weight)` and `Edge(Node, Node)`, where
unweighted edges implicitly carry weight `1`. Weights are `u32`, so negative weights cannot be represented
(signed input is rejected with [`GraphError::NegativeWeight`]); distances are accumulated in `u64`
and can never overflow.

Undirected graphs are stored by inserting both directions of every edge.

### Available Representations

See the [`repr`] module:

- [`ArenaGraph`](crate::repr::ArenaGraph): edges may be appended at any time
- [`CsrGraph`](crate::repr::CsrGraph): frozen, compact and fastest to traverse

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, distances, errors, basic graph operations, all graph representations and the [`ShortestPaths`](crate::algo::ShortestPaths) trait,
- [`algo`] includes the BFS and Dijkstra iterators as well as the [`ShortestPathTree`](crate::algo::ShortestPathTree) they produce,
- [`gens`] includes random weighted graph generators and deterministic substructures such as paths and cycles,
- [`io`] includes reading and writing of weighted edge lists.

```
use spgraphs::prelude::*;

let mut g = ArenaGraph::new(4);
g.add_edge(0, 1, 4);
g.add_edge(0, 2, 1);
g.add_edge(2, 1, 2);

let tree = g.dijkstra_tree(0);
assert_eq!(tree.distance_to(1), Some(3));
assert_eq!(tree.path_to(1), vec![0, 2, 1]);
assert_eq!(tree.distance_to(3), None);
```

Misuse (nodes out of range, graphs over zero nodes, exceeded [`GraphLimits`](crate::config::GraphLimits))
is reported through [`GraphError`]; every fallible operation has a `try_` variant returning [`Result`]
and a panicking convenience variant.

# Logging

Traversals and readers emit [`tracing`] events (`debug` per finished traversal or read file, `trace` per
discovered/relaxed edge). This crate never installs a subscriber.
*/

pub mod algo;
pub mod config;
pub mod distance;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use distance::*;
pub use edge::*;
pub use error::{GraphError, Result};
pub use node::*;

/// `spgraphs::prelude` includes definitions for nodes, edges and distances, the error type, all basic
/// graph operation traits, all implemented representations, and the `ShortestPaths` trait.
pub mod prelude {
    pub use super::{
        algo::ShortestPaths,
        distance::*,
        edge::*,
        error::{GraphError, Result},
        node::*,
        ops::*,
        repr::*,
    };
}
