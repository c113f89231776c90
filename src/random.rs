//! Deterministic xorshift32 random source.
//!
//! Drives the noise field's permutation shuffle. Same seed, same stream.

use std::time::{SystemTime, UNIX_EPOCH};

/// Substituted for a zero seed (Marsaglia's reference seed for xorshift32).
pub const DEFAULT_SEED: u32 = 2_463_534_242;

/// Mutable xorshift32 generator state (never zero)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomState {
    state: u32,
}

impl RandomState {
    /// Create a reproducible generator. A zero seed is replaced by [`DEFAULT_SEED`].
    pub fn with_seed(seed: u32) -> Self {
        let state = if seed == 0 { DEFAULT_SEED } else { seed };
        Self { state }
    }

    /// Create a generator seeded from the wall clock.
    ///
    /// Not reproducible: two calls will almost always produce different streams.
    pub fn with_random_seed() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        // Fold all 128 bits so the low-resolution part of the clock still matters
        let folded = (nanos as u32) ^ ((nanos >> 32) as u32) ^ ((nanos >> 64) as u32);
        Self::with_seed(folded)
    }

    /// Current state word (the last value returned by [`next_u32`](Self::next_u32)).
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance the generator and return the new state word.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform float in [0, 1). Never returns exactly 1.0.
    pub fn next_f64(&mut self) -> f64 {
        // u32 -> f64 is exact, so the largest result is (2^32 - 1) / 2^32
        self.next_u32() as f64 / 4_294_967_296.0
    }

    /// Uniform index in `[0, bound)` via multiply-shift reduction.
    ///
    /// Returns 0 when `bound` is 0.
    pub fn next_index(&mut self, bound: usize) -> usize {
        let bound = bound.min(u32::MAX as usize) as u64;
        ((self.next_u32() as u64 * bound) >> 32) as usize
    }
}
