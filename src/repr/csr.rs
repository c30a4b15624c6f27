/*!
# Compressed Sparse Row (CSR) Graph Representation

[`CsrGraph`] stores all adjacency lists in a single flattened array, with offset indices
marking the start of each node's neighbor list. This structure provides:

- **Compact storage** compared to linked or nested adjacency lists.
- **Fast sequential access** to neighbors due to good cache locality.
- **Higher construction cost**, but immutable and optimized for traversal.

Neighbors of a node are returned in the order in which their edges were inserted.
*/

use super::*;
use crate::utils::sliced_buffer::SlicedBuffer;

/// Directed weighted **CSR graph**.
///
/// Build it once from a list of edges (or from any other representation) and run as
/// many shortest-path queries on it as needed.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    out_nbs: SlicedBuffer<(Node, Weight)>,
}

impl CsrGraph {
    /// Freezes another graph into CSR format, keeping its neighbor order
    ///
    /// # Examples
    /// ```
    /// use spgraphs::prelude::*;
    ///
    /// let mut arena = ArenaGraph::new(3);
    /// arena.add_edge(0, 1, 2);
    /// arena.add_edge(0, 2, 5);
    ///
    /// let csr = CsrGraph::from_graph(&arena);
    /// assert_eq!(csr.as_neighbors_slice(0), &[(2, 5), (1, 2)]);
    /// ```
    pub fn from_graph<G>(graph: &G) -> Self
    where
        G: WeightedAdjacencyList,
    {
        let mut offsets: Vec<NumEdges> = Vec::with_capacity(graph.len() + 1);
        let mut buffer = Vec::new();

        offsets.push(0);
        for u in graph.vertices() {
            buffer.extend(graph.weighted_neighbors_of(u));
            offsets.push(buffer.len() as NumEdges);
        }

        Self {
            out_nbs: SlicedBuffer::new(buffer, offsets),
        }
    }

    /// Returns a slice-reference of the weighted out-neighborhood of a given vertex
    /// ** Panics if `u >= n` **
    pub fn as_neighbors_slice(&self, u: Node) -> &[(Node, Weight)] {
        &self.out_nbs[u]
    }
}

impl GraphNodeOrder for CsrGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.out_nbs.number_of_slices()
    }
}

impl GraphEdgeOrder for CsrGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.out_nbs.number_of_entries()
    }
}

impl WeightedAdjacencyList for CsrGraph {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.out_nbs[u].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.out_nbs.size_of(u)
    }
}

impl GraphFromScratch for CsrGraph {
    fn try_from_edges_with_limits<I, E>(
        n: NumNodes,
        edges: I,
        limits: GraphLimits,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        limits.check_nodes(n)?;

        let mut collected: Vec<WeightedEdge> = Vec::new();
        for e in edges {
            let e: WeightedEdge = e.into();
            check_node(e.source(), n)?;
            check_node(e.target(), n)?;
            limits.check_edges(collected.len() as u64 + 1)?;
            collected.push(e);
        }
        let edges = collected;

        // counting sort by source which keeps insertion order within each neighborhood
        let mut offsets: Vec<NumEdges> = vec![0; n as usize + 1];
        for e in &edges {
            offsets[e.source() as usize + 1] += 1;
        }
        for u in 0..n as usize {
            offsets[u + 1] += offsets[u];
        }

        let mut positions = offsets.clone();
        let mut buffer = vec![(INVALID_NODE, 0); edges.len()];
        for WeightedEdge(u, v, w) in edges {
            let pos = &mut positions[u as usize];
            buffer[*pos as usize] = (v, w);
            *pos += 1;
        }

        Ok(Self {
            out_nbs: SlicedBuffer::new(buffer, offsets),
        })
    }
}

impl From<&ArenaGraph> for CsrGraph {
    fn from(graph: &ArenaGraph) -> Self {
        Self::from_graph(graph)
    }
}
