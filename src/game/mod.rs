//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::platform::{Buzzer, Display};
use crate::sync::Mutex;

mod deal;
mod input;
pub mod state;
mod tick;

pub use state::{GameState, Phase, Seat};

/// Fixed title text, shown every tick while no game is running.
pub const TITLE_TEXT: &str = "    21";

/// Fixed banner shown every tick once a round has finished.
pub const WINS_TEXT: &str = " WINS  ";

/// Two-character tag for the player ("me").
pub const PLAYER_TAG: &str = "ME";

/// Two-character tag for the dealer.
pub const DEALER_TAG: &str = "DE";

/// Column of the two-character seat/outcome banner.
pub const BANNER_COLUMN: u8 = 0;

/// Column where the title, closing banner, and scoreboard are rendered.
pub const SCORE_COLUMN: u8 = 4;

/// Column of the two trailing characters blanked during the deal animation.
pub const TAIL_COLUMN: u8 = 8;

/// The blank written over the trailing characters while animating.
pub const TAIL_BLANK: &str = "  ";

/// The reach-21 game core.
///
/// Owns the game state, the seeded random source, and the display and buzzer
/// capabilities. Button presses ([`press_start`](Self::press_start),
/// [`press_mode`](Self::press_mode)) and the periodic [`tick`](Self::tick)
/// all serialize on the state lock, so handlers never interleave even when
/// the surrounding runtime delivers them from interrupt context.
pub struct Game<D: Display, B: Buzzer> {
    /// Current game state.
    pub state: Mutex<GameState>,
    /// The segmented display.
    pub display: Mutex<D>,
    /// The buzzer.
    pub buzzer: Mutex<B>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl<D: Display, B: Buzzer> Game<D, B> {
    /// Creates a game in the title phase with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use reach21::{Buzzer, Display, Game, Note, Phase};
    ///
    /// struct Panel;
    /// impl Display for Panel {
    ///     fn show(&mut self, _text: &str, _start_column: u8) {}
    ///     fn set_pixel(&mut self, _row: u8, _col: u8) {}
    /// }
    ///
    /// struct Piezo;
    /// impl Buzzer for Piezo {
    ///     fn play_note(&mut self, _note: Note, _duration_ms: u16) {}
    /// }
    ///
    /// let game = Game::new(Panel, Piezo, 42);
    /// assert_eq!(game.phase(), Phase::Title);
    /// ```
    #[must_use]
    pub fn new(display: D, buzzer: B, seed: u64) -> Self {
        Self {
            state: Mutex::new(GameState::new()),
            display: Mutex::new(display),
            buzzer: Mutex::new(buzzer),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.lock().phase
    }

    /// Returns the dealer's running total.
    pub fn dealer_score(&self) -> u8 {
        self.state.lock().dealer_score
    }

    /// Returns the player's running total.
    pub fn player_score(&self) -> u8 {
        self.state.lock().player_score
    }

    /// Returns the most recently drawn rank.
    pub fn last_drawn_card(&self) -> u8 {
        self.state.lock().last_drawn_card
    }

    /// Returns the number of cards left in the pool.
    pub fn cards_remaining(&self) -> u16 {
        self.state.lock().deck.remaining()
    }
}
