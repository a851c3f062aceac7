//! Outcome resolution: score comparison against the bust threshold.

/// A score above this value is a bust.
pub const BUST_THRESHOLD: u8 = 21;

/// Result of a resolved round, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total).
    Win,
    /// Player loses (player busts or dealer has the higher total).
    Loss,
}

/// Compares the two totals and decides the round.
///
/// First match wins: a player bust loses even when the dealer also busted
/// with a higher total. A tie between two non-busted totals yields `None` —
/// a push emits no win or loss signal at all, yet the round still ends, so
/// callers advance the phase regardless of the return value.
///
/// # Example
///
/// ```
/// use reach21::{Outcome, resolve};
///
/// assert_eq!(resolve(22, 19), Some(Outcome::Loss));
/// assert_eq!(resolve(20, 25), Some(Outcome::Win));
/// assert_eq!(resolve(18, 18), None);
/// ```
#[must_use]
pub const fn resolve(player_score: u8, dealer_score: u8) -> Option<Outcome> {
    if player_score > BUST_THRESHOLD {
        Some(Outcome::Loss)
    } else if dealer_score > BUST_THRESHOLD {
        Some(Outcome::Win)
    } else if player_score > dealer_score {
        Some(Outcome::Win)
    } else if dealer_score > player_score {
        Some(Outcome::Loss)
    } else {
        None
    }
}
