use rand::Rng;
use tracing::debug;

use crate::{gens::vertex_label, utils::BernoulliBits, AdjMapGraph, Edge};

/// `G(n,p)` graphs contain every possible edge between `n` vertices with
/// probability `p`, independent from each other.
///
/// Exactly one trial is made per unordered vertex pair, so a pair is never
/// sampled twice and self-loops are never produced. Vertices are labelled
/// `v0` through `v(n-1)`; [`generate`](Gnp::generate) inserts all of them
/// even when they end up isolated.
///
/// # Example
///
/// ```rust
/// use lgraphs::{gens::Gnp, prelude::*};
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64;
///
/// let rng = &mut Pcg64::seed_from_u64(1234);
/// let graph = Gnp::new().vertices(8).prob(1.0).generate(rng);
///
/// assert_eq!(graph.number_of_vertices(), 8);
/// assert_eq!(graph.number_of_edges(), 8 * 7 / 2);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: usize,
    p: Option<f64>,
    batch_bits: Option<usize>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `n`
    pub fn vertices(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    /// Updates `p`
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&prob),
            "Edge probability must lie in [0, 1]!"
        );
        self.p = Some(prob);
        self
    }

    /// Updates the batch capacity of the underlying bit source
    pub fn batch_bits(mut self, bits: usize) -> Self {
        self.batch_bits = Some(bits);
        self
    }

    /// Creates a streaming generator over random `G(n,p)` edges
    pub fn stream<'a, R: Rng>(&self, rng: &'a mut R) -> GnpStream<'a, R> {
        let p = match self.p {
            Some(p) => p,
            None => panic!("Probability of Gnp was not set!"),
        };
        let bits = match self.batch_bits {
            Some(bits) => BernoulliBits::with_batch_bits(p, bits),
            None => BernoulliBits::new(p),
        };

        GnpStream {
            n: self.n,
            i: 0,
            j: 1,
            bits,
            rng,
        }
    }

    /// Generates the full list of random edges.
    ///
    /// This collects the result of [`stream`](Gnp::stream) into a `Vec<Edge>`.
    pub fn sample_edges<R: Rng>(&self, rng: &mut R) -> Vec<Edge> {
        self.stream(rng).collect()
    }

    /// Generates a random `G(n,p)` graph with all `n` vertices present.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> AdjMapGraph {
        let vertices = (0..self.n).map(vertex_label);
        let graph = AdjMapGraph::from_parts(vertices, self.stream(rng));

        debug!(
            vertices = graph.number_of_vertices(),
            edges = graph.number_of_edges(),
            "sampled G(n,p) graph"
        );
        graph
    }
}

/// An iterator over random `G(n,p)` edges.
///
/// The cursor walks all unordered pairs `(i, j)` with `i < j` and draws one
/// buffered Bernoulli trial per pair.
#[derive(Debug)]
pub struct GnpStream<'a, R>
where
    R: Rng,
{
    n: usize,
    i: usize,
    j: usize,
    bits: BernoulliBits,
    rng: &'a mut R,
}

impl<'a, R> GnpStream<'a, R>
where
    R: Rng,
{
    /// Number of pairs the cursor has not yet decided.
    fn remaining_pairs(&self) -> usize {
        if self.i + 1 >= self.n {
            return 0;
        }

        (self.n - self.j) + (self.n - 2 - self.i) * (self.n - 1 - self.i) / 2
    }
}

impl<'a, R> Iterator for GnpStream<'a, R>
where
    R: Rng,
{
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.i + 1 >= self.n {
                return None;
            }

            let pair = (self.i, self.j);
            if self.j + 1 < self.n {
                self.j += 1;
            } else {
                self.i += 1;
                self.j = self.i + 1;
            }

            if self.bits.draw(self.rng) {
                let (u, v) = pair;
                return Some(Edge::new(vertex_label(u), vertex_label(v)));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining_pairs()))
    }
}
