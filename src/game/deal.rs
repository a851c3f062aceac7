use rand_chacha::ChaCha8Rng;

use crate::error::DrawError;
use crate::melody;
use crate::outcome::{self, Outcome};
use crate::platform::{Buzzer, Display};

use super::{BANNER_COLUMN, DEALER_TAG, Game, GameState, PLAYER_TAG, Phase, SCORE_COLUMN, Seat};

impl<D: Display, B: Buzzer> Game<D, B> {
    /// Resets the state for a fresh game and paints the opening screen:
    /// the player tag at the banner column and a zeroed scoreboard.
    pub(super) fn initialize_new_game(state: &mut GameState, display: &mut D) {
        state.reset_for_new_game();
        log::debug!("new game, deck reset: {:?}", state.deck.counts);

        display.show(PLAYER_TAG, BANNER_COLUMN);
        display.show("000000", SCORE_COLUMN);
    }

    /// Draws one card and credits it to `seat`.
    ///
    /// A player draw that pushes the total past the bust threshold resolves
    /// the round on the spot: jingle, banner, phase to `Finished`. Callers
    /// that assign a phase after dealing do so unconditionally and overwrite
    /// that `Finished`.
    pub(super) fn deal_card(
        state: &mut GameState,
        rng: &mut ChaCha8Rng,
        display: &mut D,
        buzzer: &mut B,
        seat: Seat,
    ) -> Result<(), DrawError> {
        let rank = state.deck.draw(rng)?;
        state.apply_draw(seat, rank);

        if seat == Seat::Player && state.player_score > outcome::BUST_THRESHOLD {
            Self::announce_round(state, display, buzzer);
        }

        Ok(())
    }

    /// Resolves the round from the current totals: plays the win or loss
    /// jingle and banner (neither for a push), then marks the round finished.
    pub(super) fn announce_round(state: &mut GameState, display: &mut D, buzzer: &mut B) {
        let decision = outcome::resolve(state.player_score, state.dealer_score);
        log::debug!(
            "round resolved: player {} dealer {} -> {decision:?}",
            state.player_score,
            state.dealer_score
        );

        match decision {
            Some(Outcome::Win) => {
                melody::play_win(buzzer);
                display.show(PLAYER_TAG, BANNER_COLUMN);
            }
            Some(Outcome::Loss) => {
                melody::play_loss(buzzer);
                display.show(DEALER_TAG, BANNER_COLUMN);
            }
            // A push emits no signal at all, but the round still ends.
            None => {}
        }

        state.phase = Phase::Finished;
    }

    /// Resolves the round immediately from the current totals.
    ///
    /// This is the deciding step on the way to [`Phase::Finished`]; the
    /// in-game path reaches it through a player bust.
    pub fn announce_winner(&self) {
        let mut state = self.state.lock();
        let mut display = self.display.lock();
        let mut buzzer = self.buzzer.lock();
        Self::announce_round(&mut state, &mut display, &mut buzzer);
    }
}
