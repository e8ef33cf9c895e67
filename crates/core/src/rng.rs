//! RNG module - injectable random sources for block selection
//!
//! The engine only ever asks for "the next shape index below `bound`".
//! [`SeededSource`] is the default (ChaCha8, reproducible from a `u64` seed);
//! [`SequenceSource`] replays a fixed list of indices for deterministic tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplier of uniformly distributed shape indices.
pub trait RandomSource {
    /// Return an index in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Seeded uniform PRNG.
#[derive(Debug, Clone)]
pub struct SeededSource {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SeededSource {
    /// Create a new source with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a source seeded from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SeededSource {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SeededSource {
    fn next_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound.max(1))
    }
}

/// Replays a fixed sequence of indices, cycling when exhausted.
///
/// Each value is reduced modulo the requested bound, so any `usize` list is
/// a valid script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceSource {
    values: Vec<usize>,
    pos: usize,
}

impl SequenceSource {
    /// Create a source from a script of indices. An empty script yields zeros.
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, pos: 0 }
    }

    /// Number of indices handed out so far.
    pub fn drawn(&self) -> usize {
        self.pos
    }
}

impl RandomSource for SequenceSource {
    fn next_index(&mut self, bound: usize) -> usize {
        let bound = bound.max(1);
        if self.values.is_empty() {
            self.pos += 1;
            return 0;
        }
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value % bound
    }
}
