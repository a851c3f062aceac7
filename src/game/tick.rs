use rand_chacha::ChaCha8Rng;

use crate::anim::{self, FRAME_COUNT};
use crate::error::DrawError;
use crate::platform::{Buzzer, Display};

use super::{
    BANNER_COLUMN, DEALER_TAG, Game, GameState, PLAYER_TAG, Phase, SCORE_COLUMN, Seat, TAIL_BLANK,
    TAIL_COLUMN, TITLE_TEXT, WINS_TEXT,
};

impl<D: Display, B: Buzzer> Game<D, B> {
    /// Periodic tick handler.
    ///
    /// Runs one step of whatever the current phase does: repaints the title
    /// or closing banner, advances the deal animation, or deals the next
    /// card of the opening sequence. Every tick outside the title and
    /// finished phases also refreshes the scoreboard.
    ///
    /// Returns `Ok(true)` when the device may enter standby until the next
    /// event (title, turn, and finished phases) and `Ok(false)` while the
    /// animation needs back-to-back ticks.
    ///
    /// # Errors
    ///
    /// Returns an error if the card pool is fully exhausted, which the phase
    /// transitions rule out in normal play.
    pub fn tick(&self) -> Result<bool, DrawError> {
        let mut state = self.state.lock();
        let mut display = self.display.lock();

        if state.phase == Phase::Title {
            display.show(TITLE_TEXT, SCORE_COLUMN);
            return Ok(true);
        }

        let mut may_sleep = true;

        match state.phase {
            Phase::Dealing => {
                let mut rng = self.rng.lock();
                let mut buzzer = self.buzzer.lock();
                Self::dealing_step(&mut state, &mut rng, &mut display, &mut buzzer)?;

                // The deal runs straight into one animation step on the same
                // tick, even when it just handed the turn to the player.
                Self::animate_step(&mut state, &mut display);
                may_sleep = false;
            }
            Phase::Animating => {
                Self::animate_step(&mut state, &mut display);
                may_sleep = false;
            }
            Phase::Finished => {
                display.show(WINS_TEXT, SCORE_COLUMN);
                return Ok(true);
            }
            Phase::Title | Phase::Turn => {}
        }

        state.refresh_display_buffer();
        display.show(&state.display_buffer, SCORE_COLUMN);

        Ok(may_sleep)
    }

    /// One pass through the dealing phase, re-evaluated from the score state
    /// on every entry. The opening sequence this yields is: player card,
    /// dealer card, player card, then the turn begins. Because nothing
    /// records that the opening deal already happened, every later animation
    /// completion lands in the final branch and deals the player another
    /// card before handing the turn back.
    fn dealing_step(
        state: &mut GameState,
        rng: &mut ChaCha8Rng,
        display: &mut D,
        buzzer: &mut B,
    ) -> Result<(), DrawError> {
        if state.player_score == 0 && state.dealer_score == 0 {
            Self::deal_card(state, rng, display, buzzer, Seat::Player)?;
            state.phase = Phase::Animating;
        } else if state.player_score > 0 && state.dealer_score == 0 {
            display.show(DEALER_TAG, BANNER_COLUMN);
            Self::deal_card(state, rng, display, buzzer, Seat::Dealer)?;
            state.phase = Phase::Animating;
        } else {
            display.show(PLAYER_TAG, BANNER_COLUMN);
            Self::deal_card(state, rng, display, buzzer, Seat::Player)?;

            // A bust on this draw resolved the round already; the turn
            // assignment below still wins.
            state.phase = Phase::Turn;
        }

        Ok(())
    }

    /// One step of the two-cursor deal animation.
    ///
    /// The trailing cursor wraps from 9 back to 1 (never 0) and is otherwise
    /// left where it is. The leading cursor advances once per step; when it
    /// arrives at 9 the animation is over: the cursor resets to 0 and the
    /// phase moves to dealing. The step that moves the leading cursor to 9
    /// has no pixel of its own, since the template ends at index 8.
    fn animate_step(state: &mut GameState, display: &mut D) {
        display.show(TAIL_BLANK, TAIL_COLUMN);

        if state.bottom_animation_frame == FRAME_COUNT {
            state.bottom_animation_frame = 1;
        }

        if state.top_animation_frame == FRAME_COUNT {
            state.phase = Phase::Dealing;
            state.top_animation_frame = 0;
        } else {
            state.top_animation_frame += 1;

            if let Some((row, col)) = anim::frame_at(state.top_animation_frame) {
                display.set_pixel(row, col);
            }
            if let Some((row, col)) = anim::frame_at(state.bottom_animation_frame) {
                display.set_pixel(row, col);
            }
        }
    }
}
