//! The card pool and the draw-without-replacement primitive.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::error::DrawError;

/// Number of per-rank counters in the pool.
///
/// The draw space is ranks 1..=10; the eleventh slot exists in the layout but
/// no draw can ever land on it. It is reserved, not spare: trimming it would
/// change the pool's total and the meaning of [`TOTAL_CARDS`].
pub const DECK_SLOTS: usize = 11;

/// Lowest drawable rank.
pub const RANK_MIN: u8 = 1;

/// Highest drawable rank. Rank 10 stands in for every face card, hence its
/// 16 copies in the template.
pub const RANK_MAX: u8 = 10;

/// Sum of the template counters (including the unreachable eleventh slot).
pub const TOTAL_CARDS: u16 = 56;

/// Per-rank copy counts at the start of every game.
pub const DECK_TEMPLATE: [u8; DECK_SLOTS] = [4, 4, 4, 4, 4, 4, 4, 4, 4, 16, 4];

/// Upper bound on resamples per draw before the pool is declared exhausted.
///
/// The state machine never draws more than a handful of cards per game, so a
/// legitimate draw always lands well inside this bound; running it out means
/// the drawable ranks are all at zero.
pub const MAX_DRAW_ATTEMPTS: u32 = 4096;

/// A fixed-capacity multiset of card ranks with decrementing counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining copies per rank, indexed by `rank - 1`.
    pub counts: [u8; DECK_SLOTS],
}

impl Deck {
    /// Creates a full deck from the template.
    ///
    /// # Example
    ///
    /// ```
    /// use reach21::{Deck, TOTAL_CARDS};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.remaining(), TOTAL_CARDS);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: DECK_TEMPLATE,
        }
    }

    /// Creates a deck with every counter at zero, the power-on state before
    /// the first game is initialized.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            counts: [0; DECK_SLOTS],
        }
    }

    /// Resets every counter to the template value.
    pub const fn reset(&mut self) {
        self.counts = DECK_TEMPLATE;
    }

    /// Returns the remaining copies of the given rank.
    ///
    /// Ranks outside 1..=11 have no slot and report zero.
    #[must_use]
    pub fn count(&self, rank: u8) -> u8 {
        if rank == 0 {
            return 0;
        }
        self.counts.get(rank as usize - 1).copied().unwrap_or(0)
    }

    /// Returns the total number of cards left across all slots.
    #[must_use]
    pub fn remaining(&self) -> u16 {
        self.counts.iter().map(|&c| u16::from(c)).sum()
    }

    /// Draws one card: samples a rank uniformly from 1..=10 and resamples
    /// until it lands on a rank with copies left, then decrements that
    /// counter and returns the rank.
    ///
    /// Resampling is deliberate: drawing from only the nonzero ranks would
    /// be a different sampling strategy with a different output distribution.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Exhausted`] when no drawable rank has copies
    /// left. That is an invariant violation for the game (the phase
    /// transitions guarantee only a few draws per round); the caller should
    /// treat it as fatal rather than retry.
    pub fn draw(&mut self, rng: &mut ChaCha8Rng) -> Result<u8, DrawError> {
        for _ in 0..MAX_DRAW_ATTEMPTS {
            let rank = rng.random_range(RANK_MIN..=RANK_MAX);
            log::debug!("rolled {rank}");

            let slot = &mut self.counts[rank as usize - 1];
            if *slot > 0 {
                *slot -= 1;
                return Ok(rank);
            }
        }

        Err(DrawError::Exhausted)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
