use rand::{
    distr::{Bernoulli, Distribution},
    Rng,
};

/// Number of bits packed into one buffer word.
const WORD_BITS: usize = u64::BITS as usize;

/// Default number of bits drawn per batch.
pub const DEFAULT_BATCH_BITS: usize = 10_000;

/// How a batch of buffered bits is produced.
/// The boundary probabilities need no randomness at all, and `p = 1/2` can
/// take raw RNG words directly, which costs a single RNG call per 64 bits.
/// Only the general case pays for one distribution sample per bit.
#[derive(Debug, Copy, Clone)]
enum FillMode {
    /// Every bit is a failure (`p = 0`)
    AllZero,
    /// Every bit is a success (`p = 1`)
    AllOne,
    /// Unmodified RNG words (`p = 1/2`)
    RawWords,
    /// One Bernoulli sample per bit (general `p`)
    Sampled(Bernoulli),
}

/// A buffered source of Bernoulli trials.
///
/// Bits are drawn in batches of [`batch_bits`](BernoulliBits::batch_bits)
/// coin flips packed into `u64` words. A cursor walks the buffer bit by bit;
/// once the batch is exhausted, the next draw fills a fresh one from the
/// caller's RNG. A batch is never replayed.
#[derive(Debug, Clone)]
pub struct BernoulliBits {
    mode: FillMode,
    words: Vec<u64>,
    batch_bits: usize,
    cursor: usize,
}

impl BernoulliBits {
    /// Creates a bit source for success probability `prob` with the default
    /// batch capacity.
    pub fn new(prob: f64) -> Self {
        Self::with_batch_bits(prob, DEFAULT_BATCH_BITS)
    }

    /// Creates a bit source for success probability `prob` drawing
    /// `batch_bits` bits per batch.
    pub fn with_batch_bits(prob: f64, batch_bits: usize) -> Self {
        assert!(
            (0.0..=1.0).contains(&prob),
            "Bernoulli probability must lie in [0, 1]!"
        );
        assert!(batch_bits > 0, "A batch must hold at least one bit!");

        let mode = if prob == 0.0 {
            FillMode::AllZero
        } else if prob == 1.0 {
            FillMode::AllOne
        } else if prob == 0.5 {
            FillMode::RawWords
        } else {
            // We verified that `prob` is a valid probability at this point
            FillMode::Sampled(Bernoulli::new(prob).unwrap())
        };

        Self {
            mode,
            words: vec![0; batch_bits.div_ceil(WORD_BITS)],
            batch_bits,
            // the buffer starts exhausted, so the first draw fills it
            cursor: batch_bits,
        }
    }

    /// Returns the number of bits drawn per batch.
    pub fn batch_bits(&self) -> usize {
        self.batch_bits
    }

    /// Draws the next trial, filling a fresh batch first if the current one
    /// is used up.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.cursor == self.batch_bits {
            self.refill(rng);
        }

        let bit = (self.words[self.cursor / WORD_BITS] >> (self.cursor % WORD_BITS)) & 1;
        self.cursor += 1;
        bit == 1
    }

    /// Creates an endless iterator of trials drawn from `rng`
    pub fn iter<'a, R: Rng>(self, rng: &'a mut R) -> BernoulliBitsIter<'a, R> {
        BernoulliBitsIter { bits: self, rng }
    }

    fn refill<R: Rng>(&mut self, rng: &mut R) {
        match self.mode {
            FillMode::AllZero => self.words.fill(0),
            FillMode::AllOne => self.words.fill(u64::MAX),
            FillMode::RawWords => self.words.fill_with(|| rng.random()),
            FillMode::Sampled(distr) => {
                for word in &mut self.words {
                    *word = (0..WORD_BITS)
                        .fold(0, |acc, bit| acc | ((distr.sample(rng) as u64) << bit));
                }
            }
        }

        self.cursor = 0;
    }
}

/// An endless iterator over buffered Bernoulli trials
#[derive(Debug)]
pub struct BernoulliBitsIter<'a, R>
where
    R: Rng,
{
    bits: BernoulliBits,
    rng: &'a mut R,
}

impl<'a, R> Iterator for BernoulliBitsIter<'a, R>
where
    R: Rng,
{
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.bits.draw(self.rng))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn wrong_parameters() {
        for prob in [-10.0, -0.001, 1.0001, 3.4] {
            assert!(std::panic::catch_unwind(|| BernoulliBits::new(prob)).is_err());
        }

        assert!(std::panic::catch_unwind(|| BernoulliBits::with_batch_bits(0.5, 0)).is_err());
    }

    #[test]
    fn edge_cases() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        assert_eq!(BernoulliBits::new(0.3).batch_bits(), DEFAULT_BATCH_BITS);

        // a tiny batch forces a refill every 7 draws
        let mut zeros = BernoulliBits::with_batch_bits(0.0, 7);
        assert!((0..100).all(|_| !zeros.draw(rng)));

        let mut ones = BernoulliBits::with_batch_bits(1.0, 7);
        assert!((0..100).all(|_| ones.draw(rng)));
    }

    #[test]
    fn refills_across_batches() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for prob in [0.25, 0.5, 0.75] {
            let mut bits = BernoulliBits::with_batch_bits(prob, 3);
            let successes = (0..4000).filter(|_| bits.draw(rng)).count();

            let expected = (4000.0 * prob) as usize;
            assert!((expected - 600..expected + 600).contains(&successes));
        }
    }

    #[test]
    fn endless_stream() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        let heads = BernoulliBits::new(0.25)
            .iter(rng)
            .take(10_000)
            .filter(|hit| *hit)
            .count();

        assert!((2000..3000).contains(&heads));
    }

    #[test]
    fn deterministic_under_a_fixed_seed() {
        let draws = |seed: u64| {
            let rng = &mut Pcg64Mcg::seed_from_u64(seed);
            BernoulliBits::with_batch_bits(0.5, 9)
                .iter(rng)
                .take(200)
                .collect::<Vec<bool>>()
        };

        assert_eq!(draws(7), draws(7));
        assert_ne!(draws(7), draws(8));
    }
}
