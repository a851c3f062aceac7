//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while drawing a card.
///
/// The core has no other failure mode: every operation is total within its
/// preconditions. Oddities like tie rounds without a win/loss signal or the
/// post-bust phase overwrite are behaviors of the game, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Every drawable rank is at zero copies.
    ///
    /// The deck holds 52 drawable cards and a game draws only a handful, so
    /// this is unreachable through the state machine; it surfaces only if a
    /// caller drives the deck directly past exhaustion.
    #[error("card pool exhausted: no drawable rank has copies left")]
    Exhausted,
}
