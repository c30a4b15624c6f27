use super::*;

/// Generator for weighted `G(n,m)` random multigraphs with `n` nodes and `m` sampled edges.
///
/// Each edge is drawn independently and uniformly from all `n * n` (or `n * (n - 1)` without
/// self-loops) ordered node pairs, so parallel edges may occur. Weights are drawn uniformly
/// from the configured range (default: all weights are `1`).
///
/// The generator can be parameterized via:
/// - `.nodes(n)`: total number of nodes
/// - `.edges(m)`: number of sampled edges
/// - `.weights(a..=b)`: range of edge weights
/// - `.undirected(bool)`: additionally emit the reverse of every non-loop edge
/// - `.loops(bool)`: allow self-loops (default: *true*)
///
/// # Examples
/// ```
/// use spgraphs::{prelude::*, gens::*};
/// use rand::SeedableRng;
///
/// let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(1);
/// let edges = Gnm::new().nodes(10).edges(20).weights(1..=5).loops(false).generate(rng);
///
/// assert_eq!(edges.len(), 20);
/// assert!(edges.iter().all(|e| !e.is_loop() && (1..=5).contains(&e.weight())));
/// ```
#[derive(Debug, Clone)]
pub struct Gnm {
    n: NumNodes,
    m: NumEdges,
    weights: RangeInclusive<Weight>,
    undirected: bool,
    loops: bool,
}

impl Default for Gnm {
    fn default() -> Self {
        Self {
            n: 0,
            m: 0,
            weights: UNIT_WEIGHT..=UNIT_WEIGHT,
            undirected: false,
            loops: true,
        }
    }
}

impl Gnm {
    /// Creates a new empty `G(n,m)` generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// If set, every sampled non-loop edge `(u, v)` is followed by `(v, u)` with the same weight.
    pub fn undirected(mut self, undirected: bool) -> Self {
        self.undirected = undirected;
        self
    }

    /// Allows or forbids self-loops
    pub fn loops(mut self, loops: bool) -> Self {
        self.loops = loops;
        self
    }
}

impl NumNodesGen for Gnm {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl NumEdgesGen for Gnm {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = m;
    }
}

impl WeightsGen for Gnm {
    fn set_weights(&mut self, weights: RangeInclusive<Weight>) {
        self.weights = weights;
    }
}

impl GraphGenerator for Gnm {
    /// Returns a streaming iterator over `m` random edges (`2m` minus loops if undirected).
    ///
    /// # Panics
    /// - If `n == 0`
    /// - If self-loops are forbidden, `n == 1` and `m > 0`
    /// - If the weight range is empty
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng,
    {
        assert!(self.n > 0, "At least one node must be generated!");
        assert!(
            self.loops || self.n > 1 || self.m == 0,
            "Cannot generate loop-free edges on a single node!"
        );
        assert!(!self.weights.is_empty(), "Weight range must not be empty!");

        let Self {
            n,
            weights,
            undirected,
            loops,
            ..
        } = self.clone();

        (0..self.m).flat_map(move |_| {
            let u = rng.random_range(0..n);
            let v = if loops {
                rng.random_range(0..n)
            } else {
                // skip `u` without rejection sampling
                let v = rng.random_range(0..n - 1);
                v + (v >= u) as Node
            };
            let e = WeightedEdge(u, v, rng.random_range(weights.clone()));

            let reverse = (undirected && !e.is_loop()).then(|| e.reverse());
            std::iter::once(e).chain(reverse)
        })
    }
}
