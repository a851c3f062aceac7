use crate::error::DrawError;
use crate::platform::{Buzzer, Display};

use super::{BANNER_COLUMN, DEALER_TAG, Game, Phase, Seat};

impl<D: Display, B: Buzzer> Game<D, B> {
    /// "Start" button handler.
    ///
    /// In the title phase this begins a new game. In the turn phase it is a
    /// hit: the player draws one more card and the shared deal animation
    /// plays. In every other phase the press is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the card pool is fully exhausted, which the phase
    /// transitions rule out in normal play.
    pub fn press_start(&self) -> Result<(), DrawError> {
        let mut state = self.state.lock();

        match state.phase {
            Phase::Title => {
                let mut display = self.display.lock();
                Self::initialize_new_game(&mut state, &mut display);
            }
            Phase::Turn => {
                let mut rng = self.rng.lock();
                let mut display = self.display.lock();
                let mut buzzer = self.buzzer.lock();
                Self::deal_card(&mut state, &mut rng, &mut display, &mut buzzer, Seat::Player)?;

                // A bust has already resolved the round and played the loss
                // jingle at this point; the phase still moves to the deal
                // animation, so Finished never sticks on this path.
                state.phase = Phase::Animating;
            }
            Phase::Dealing | Phase::Animating | Phase::Finished => {}
        }

        Ok(())
    }

    /// "Mode" button handler.
    ///
    /// Only the turn phase reacts: the dealer tag is shown, the dealer draws
    /// one card, and the shared deal animation plays. Everywhere else the
    /// press is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the card pool is fully exhausted, which the phase
    /// transitions rule out in normal play.
    pub fn press_mode(&self) -> Result<(), DrawError> {
        let mut state = self.state.lock();

        if state.phase == Phase::Turn {
            let mut rng = self.rng.lock();
            let mut display = self.display.lock();
            let mut buzzer = self.buzzer.lock();

            display.show(DEALER_TAG, BANNER_COLUMN);
            Self::deal_card(&mut state, &mut rng, &mut display, &mut buzzer, Seat::Dealer)?;
            state.phase = Phase::Animating;
        }

        Ok(())
    }
}
