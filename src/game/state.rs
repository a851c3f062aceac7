//! Game state types.

use arrayvec::ArrayString;
use core::fmt::Write as _;

use crate::deck::Deck;

/// Width of the score portion of the panel: two digits each for the dealer
/// score, the player score, and the last drawn card.
pub const DISPLAY_WIDTH: usize = 6;

/// Game phase. Exactly one phase is active at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Showing the title screen, waiting for a game to start.
    Title,
    /// Deciding who receives the next card of the opening sequence.
    ///
    /// This phase is re-evaluated from the score state every time it is
    /// entered, with no opening-deal flag, so it is reached again after every
    /// later deal animation as well.
    Dealing,
    /// Waiting for the player to hit or to send the dealer drawing.
    Turn,
    /// Playing the shared deal animation.
    Animating,
    /// Round over; the panel shows the closing banner.
    Finished,
}

/// Who a drawn card is credited to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The human player.
    Player,
    /// The machine dealer.
    Dealer,
}

/// The single mutable state of the game.
///
/// One instance lives inside [`Game`](crate::Game) for the lifetime of the
/// application; it is reset in place when a new game starts, never replaced.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current phase.
    pub phase: Phase,
    /// Remaining-count card pool.
    pub deck: Deck,
    /// Dealer's running total.
    pub dealer_score: u8,
    /// Player's running total.
    pub player_score: u8,
    /// Most recently drawn rank, kept for display only.
    pub last_drawn_card: u8,
    /// Formatted scoreboard text, refreshed every in-game tick.
    pub display_buffer: ArrayString<DISPLAY_WIDTH>,
    /// Reserved; nothing reads or writes it after power-on.
    pub cursor_position: u8,
    /// Leading animation cursor.
    pub top_animation_frame: u8,
    /// Trailing animation cursor.
    pub bottom_animation_frame: u8,
}

impl GameState {
    /// Creates the power-on state: title phase, zeroed scores and counters,
    /// and an empty card pool (the pool is filled by the new-game reset).
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Title,
            deck: Deck::empty(),
            dealer_score: 0,
            player_score: 0,
            last_drawn_card: 0,
            display_buffer: ArrayString::new(),
            cursor_position: 0,
            top_animation_frame: 0,
            bottom_animation_frame: 0,
        }
    }

    /// Resets the state in place for a fresh game: scores and last card to
    /// zero, pool back to the full template, animation cursors to their
    /// starting positions (leading at 0, trailing at 5), phase to the deal
    /// animation.
    pub fn reset_for_new_game(&mut self) {
        self.phase = Phase::Animating;
        self.player_score = 0;
        self.dealer_score = 0;
        self.last_drawn_card = 0;
        self.deck.reset();
        self.display_buffer.clear();
        let _ = self.display_buffer.try_push_str("000000");
        self.top_animation_frame = 0;
        self.bottom_animation_frame = 5;
    }

    /// Credits a drawn rank to the given seat and records it as the last
    /// drawn card. Accumulation only; outcome decisions happen elsewhere.
    pub const fn apply_draw(&mut self, seat: Seat, rank: u8) {
        self.last_drawn_card = rank;
        match seat {
            Seat::Player => self.player_score = self.player_score.saturating_add(rank),
            Seat::Dealer => self.dealer_score = self.dealer_score.saturating_add(rank),
        }
    }

    /// Rewrites the scoreboard text: dealer score, player score, and last
    /// drawn card, each zero-padded to two digits. A score past two digits
    /// would run off the panel; the overflowing write is dropped.
    pub fn refresh_display_buffer(&mut self) {
        self.display_buffer.clear();
        let _ = write!(
            self.display_buffer,
            "{:02}{:02}{:02}",
            self.dealer_score, self.player_score, self.last_drawn_card
        );
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
