/*!
# Graph Generators

Random and deterministic graph generators, mostly used to create test and benchmark
instances for the shortest-path algorithms.

Random generators follow a builder pattern:

1. Create a generator instance (e.g., `Gnm::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).edges(m).weights(1..=10)`).
3. Generate edges via `generate()` or `stream()`.

The [`RandomGraph`] trait wraps this into a single constructor for every graph type that
implements [`GraphFromScratch`], and [`GeneratorSubstructures`] adds weighted paths and
cycles to an existing graph.
*/

use std::ops::RangeInclusive;

use rand::Rng;

use crate::prelude::*;

mod gnm;
mod substructures;

pub use gnm::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen: Sized {
    /// Sets the number of edges in the graph generator.
    fn set_edges(&mut self, m: NumEdges);

    /// Sets the number of edges in the graph generator.
    fn edges(mut self, m: NumEdges) -> Self {
        self.set_edges(m);
        self
    }
}

/// Trait for generators that draw edge weights uniformly from a range.
pub trait WeightsGen: Sized {
    /// Sets the (inclusive) range edge weights are drawn from.
    fn set_weights(&mut self, weights: RangeInclusive<Weight>);

    /// Sets the (inclusive) range edge weights are drawn from.
    fn weights(mut self, weights: RangeInclusive<Weight>) -> Self {
        self.set_weights(weights);
        self
    }
}

/// General trait for a configurable random edge generator.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models.
pub trait RandomGraph: Sized {
    /// Creates a random directed `G(n,m)` multigraph with weights drawn from `weights`.
    fn gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges, weights: RangeInclusive<Weight>) -> Self
    where
        R: Rng;

    /// Creates a random undirected `G(n,m)` multigraph with weights drawn from `weights`.
    /// Every sampled edge is inserted in both directions.
    fn gnm_undirected<R>(
        rng: &mut R,
        n: NumNodes,
        m: NumEdges,
        weights: RangeInclusive<Weight>,
    ) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch,
{
    fn gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges, weights: RangeInclusive<Weight>) -> Self
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            Gnm::new().nodes(n).edges(m).weights(weights).stream(rng),
        )
    }

    fn gnm_undirected<R>(
        rng: &mut R,
        n: NumNodes,
        m: NumEdges,
        weights: RangeInclusive<Weight>,
    ) -> Self
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            Gnm::new()
                .nodes(n)
                .edges(m)
                .weights(weights)
                .undirected(true)
                .stream(rng),
        )
    }
}
