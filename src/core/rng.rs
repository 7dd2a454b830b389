//! Seeded dealing.
//!
//! A `GameRng` is created once per game from a seed. Every deal (the
//! first one and each reset) draws a fresh `next_deal` branch, and inside
//! a deal each side has its own stream, so the left pool never depends on
//! how many values the right pool consumed.
//!
//! ```
//! use number_balance::core::GameRng;
//! use number_balance::Side;
//!
//! let mut rng = GameRng::new(42);
//! let deal = rng.next_deal();
//!
//! let mut left = deal.side_stream(Side::Left);
//! let value = left.gen_value(1..=9);
//! assert!((1..=9).contains(&value));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

use super::side::Side;

const DEAL_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8-backed RNG, so a printed seed replays the same deals anywhere.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    deals: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            deals: 0,
        }
    }

    /// Seed from the OS. The drawn seed is kept and reported by `seed()`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Branch off the RNG for the next deal.
    ///
    /// The n-th deal of a seed is always the same, regardless of what the
    /// earlier deals were used for.
    #[must_use]
    pub fn next_deal(&mut self) -> Self {
        self.deals += 1;
        Self::new(self.seed.wrapping_add(self.deals.wrapping_mul(DEAL_STRIDE)))
    }

    /// The stream one side of a deal draws its values from.
    #[must_use]
    pub fn side_stream(&self, side: Side) -> Self {
        let mut hasher = rustc_hash::FxHasher::default();
        self.seed.hash(&mut hasher);
        side.name().hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Draw a value uniformly from an inclusive range.
    pub fn gen_value(&mut self, range: RangeInclusive<i64>) -> i64 {
        self.inner.gen_range(range)
    }
}
