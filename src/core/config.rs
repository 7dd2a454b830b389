//! Game configuration.
//!
//! `BalanceConfig` fixes how a deal looks: how many tokens each side gets,
//! the value range they are drawn from, and an optional seed. The defaults
//! are the standard game (6 tokens per side, values 1 through 9).

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Largest magnitude a token value may be configured with.
///
/// Keeps every product and quotient of two tokens, and the totals built
/// from them, far away from `i64` overflow.
pub const MAX_TOKEN_MAGNITUDE: i64 = 999;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceConfig {
    /// Tokens dealt to each side on start and reset.
    pub tokens_per_side: usize,

    /// Smallest token value (inclusive).
    pub min_value: i64,

    /// Largest token value (inclusive).
    pub max_value: i64,

    /// RNG seed. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            tokens_per_side: 6,
            min_value: 1,
            max_value: 9,
            seed: None,
        }
    }
}

impl BalanceConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of tokens per side.
    #[must_use]
    pub fn with_tokens_per_side(mut self, count: usize) -> Self {
        assert!(count >= 2, "Each side needs at least 2 tokens");
        self.tokens_per_side = count;
        self
    }

    /// Set the inclusive token value range.
    #[must_use]
    pub fn with_value_range(mut self, min: i64, max: i64) -> Self {
        assert!(min <= max, "Empty token value range");
        assert!(
            min >= -MAX_TOKEN_MAGNITUDE && max <= MAX_TOKEN_MAGNITUDE,
            "Token values must stay within ±{MAX_TOKEN_MAGNITUDE}"
        );
        self.min_value = min;
        self.max_value = max;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The inclusive range token values are drawn from.
    #[must_use]
    pub fn value_range(&self) -> RangeInclusive<i64> {
        self.min_value..=self.max_value
    }
}
