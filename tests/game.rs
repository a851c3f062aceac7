//! Game integration tests.

use reach21::game::{BANNER_COLUMN, DEALER_TAG, PLAYER_TAG, SCORE_COLUMN, TITLE_TEXT, WINS_TEXT};
use reach21::{
    Deck, DrawError, Game, Note, Outcome, Phase, Seat, TOTAL_CARDS, WIN_MELODY, WIN_RIFF_LEN,
    resolve,
};

#[derive(Debug, Default)]
struct FakeDisplay {
    /// Every `show` call as `(text, start_column)`.
    shows: Vec<(String, u8)>,
    /// Every `set_pixel` call as `(row, col)`.
    pixels: Vec<(u8, u8)>,
}

impl reach21::Display for FakeDisplay {
    fn show(&mut self, text: &str, start_column: u8) {
        self.shows.push((text.to_string(), start_column));
    }

    fn set_pixel(&mut self, row: u8, col: u8) {
        self.pixels.push((row, col));
    }
}

#[derive(Debug, Default)]
struct FakeBuzzer {
    notes: Vec<(Note, u16)>,
}

impl reach21::Buzzer for FakeBuzzer {
    fn play_note(&mut self, note: Note, duration_ms: u16) {
        self.notes.push((note, duration_ms));
    }
}

fn new_game(seed: u64) -> Game<FakeDisplay, FakeBuzzer> {
    Game::new(FakeDisplay::default(), FakeBuzzer::default(), seed)
}

/// Runs ticks until the animation hands control back, i.e. the phase leaves
/// `Animating` (and the dealing tick that follows has run, when `through_deal`).
fn tick_until(game: &Game<FakeDisplay, FakeBuzzer>, stop: impl Fn(Phase) -> bool) {
    for _ in 0..100 {
        if stop(game.phase()) {
            return;
        }
        game.tick().expect("pool cannot run out in a single round");
    }
    panic!("phase never settled; stuck at {:?}", game.phase());
}

#[test]
fn power_on_state_is_title_with_empty_pool() {
    let game = new_game(1);
    assert_eq!(game.phase(), Phase::Title);
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!((game.dealer_score(), game.player_score()), (0, 0));
}

#[test]
fn title_tick_shows_banner_and_allows_standby() {
    let game = new_game(1);
    let may_sleep = game.tick().unwrap();

    assert!(may_sleep);
    let display = game.display.lock();
    assert_eq!(display.shows, vec![(TITLE_TEXT.to_string(), SCORE_COLUMN)]);
    assert!(display.pixels.is_empty());
}

#[test]
fn start_in_title_resets_game_state() {
    let game = new_game(3);
    game.press_start().unwrap();

    let state = game.state.lock();
    assert_eq!(state.phase, Phase::Animating);
    assert_eq!(state.player_score, 0);
    assert_eq!(state.dealer_score, 0);
    assert_eq!(state.last_drawn_card, 0);
    assert_eq!(state.deck, Deck::new());
    assert_eq!(state.deck.remaining(), TOTAL_CARDS);
    assert_eq!(state.top_animation_frame, 0);
    assert_eq!(state.bottom_animation_frame, 5);
    assert_eq!(state.display_buffer.as_str(), "000000");
    drop(state);

    let display = game.display.lock();
    assert_eq!(
        display.shows,
        vec![
            (PLAYER_TAG.to_string(), BANNER_COLUMN),
            ("000000".to_string(), SCORE_COLUMN),
        ]
    );
}

#[test]
fn leading_cursor_runs_nine_steps_then_hands_over_to_dealing() {
    let game = new_game(7);
    game.press_start().unwrap();

    // Nine ticks advance the leading cursor 1..=9; none of them leaves the
    // animation.
    for expected in 1..=9u8 {
        assert!(!game.tick().unwrap());
        let state = game.state.lock();
        assert_eq!(state.top_animation_frame, expected);
        assert_eq!(state.phase, Phase::Animating);
    }

    // The tenth tick sees the cursor at 9: animation over, cursor reset,
    // control handed to dealing. No card moves yet.
    assert!(!game.tick().unwrap());
    {
        let state = game.state.lock();
        assert_eq!(state.phase, Phase::Dealing);
        assert_eq!(state.top_animation_frame, 0);
        assert_eq!(state.player_score, 0);
    }

    // The dealing tick then deals the first card.
    assert!(!game.tick().unwrap());
    assert!(game.player_score() > 0);
}

#[test]
fn trailing_cursor_wraps_to_one_never_zero() {
    let game = new_game(7);
    game.press_start().unwrap();
    game.state.lock().bottom_animation_frame = 9;

    game.tick().unwrap();
    assert_eq!(game.state.lock().bottom_animation_frame, 1);

    // Without further writes it stays parked where the wrap left it.
    game.tick().unwrap();
    assert_eq!(game.state.lock().bottom_animation_frame, 1);
}

#[test]
fn opening_deal_is_player_dealer_player() {
    let game = new_game(11);
    game.press_start().unwrap();

    // Record (dealer, player) after every tick; the order of first changes
    // gives the deal order.
    let mut sequence: Vec<Seat> = Vec::new();
    let mut last = (0u8, 0u8);
    for _ in 0..100 {
        if game.phase() == Phase::Turn {
            break;
        }
        game.tick().unwrap();
        let now = (game.dealer_score(), game.player_score());
        if now.0 != last.0 {
            sequence.push(Seat::Dealer);
        }
        if now.1 != last.1 {
            sequence.push(Seat::Player);
        }
        last = now;
    }

    assert_eq!(game.phase(), Phase::Turn);
    assert_eq!(sequence, vec![Seat::Player, Seat::Dealer, Seat::Player]);
    assert_eq!(game.cards_remaining(), TOTAL_CARDS - 3);
}

#[test]
fn each_draw_removes_exactly_one_card() {
    let game = new_game(23);
    game.press_start().unwrap();

    let mut remaining = game.cards_remaining();
    assert_eq!(remaining, TOTAL_CARDS);

    for _ in 0..100 {
        if game.phase() == Phase::Turn {
            break;
        }
        game.tick().unwrap();
        let now = game.cards_remaining();
        assert!(now == remaining || now == remaining - 1);
        remaining = now;
    }

    assert_eq!(remaining, TOTAL_CARDS - 3);
}

#[test]
fn dealing_tick_also_advances_the_animation() {
    let game = new_game(31);
    game.press_start().unwrap();
    tick_until(&game, |phase| phase == Phase::Dealing);

    let before = game.state.lock().top_animation_frame;
    assert_eq!(before, 0);

    // The dealing tick falls through into one animation step.
    game.tick().unwrap();
    let state = game.state.lock();
    assert_eq!(state.top_animation_frame, 1);
}

#[test]
fn turn_is_entered_with_leading_cursor_already_at_one() {
    let game = new_game(31);
    game.press_start().unwrap();
    tick_until(&game, |phase| phase == Phase::Turn);

    assert_eq!(game.state.lock().top_animation_frame, 1);
}

#[test]
fn turn_tick_refreshes_scoreboard_and_allows_standby() {
    let game = new_game(13);
    game.press_start().unwrap();
    tick_until(&game, |phase| phase == Phase::Turn);

    let dealer = game.dealer_score();
    let player = game.player_score();
    let drawn = game.last_drawn_card();

    game.display.lock().shows.clear();
    let may_sleep = game.tick().unwrap();

    assert!(may_sleep);
    let display = game.display.lock();
    assert_eq!(
        display.shows,
        vec![(format!("{dealer:02}{player:02}{drawn:02}"), SCORE_COLUMN)]
    );
}

#[test]
fn hit_deals_player_and_replays_the_animation() {
    let game = new_game(17);
    game.press_start().unwrap();
    tick_until(&game, |phase| phase == Phase::Turn);

    let before = game.player_score();
    let pool_before = game.cards_remaining();

    game.press_start().unwrap();

    assert_eq!(game.phase(), Phase::Animating);
    assert!(game.player_score() > before);
    assert_eq!(game.cards_remaining(), pool_before - 1);
}

#[test]
fn mode_deals_dealer_and_replays_the_animation() {
    let game = new_game(19);
    game.press_start().unwrap();
    tick_until(&game, |phase| phase == Phase::Turn);

    let before = game.dealer_score();
    game.display.lock().shows.clear();

    game.press_mode().unwrap();

    assert_eq!(game.phase(), Phase::Animating);
    assert!(game.dealer_score() > before);
    let display = game.display.lock();
    assert_eq!(display.shows, vec![(DEALER_TAG.to_string(), BANNER_COLUMN)]);
}

#[test]
fn mode_outside_turn_is_ignored() {
    let game = new_game(1);
    game.press_mode().unwrap();
    assert_eq!(game.phase(), Phase::Title);

    game.press_start().unwrap();
    game.press_mode().unwrap();
    assert_eq!(game.phase(), Phase::Animating);
    assert_eq!(game.dealer_score(), 0);
}

#[test]
fn start_outside_title_and_turn_is_ignored() {
    let game = new_game(1);
    game.press_start().unwrap();
    assert_eq!(game.phase(), Phase::Animating);

    let pool = game.cards_remaining();
    game.press_start().unwrap();
    assert_eq!(game.phase(), Phase::Animating);
    assert_eq!(game.cards_remaining(), pool);
}

#[test]
fn bust_on_hit_plays_loss_and_is_clobbered_into_animating() {
    let game = new_game(29);
    game.press_start().unwrap();
    tick_until(&game, |phase| phase == Phase::Turn);

    // Rig the totals and the pool so the next hit is a guaranteed bust.
    {
        let mut state = game.state.lock();
        state.player_score = 20;
        state.dealer_score = 17;
        state.deck.counts = [0, 0, 0, 0, 0, 0, 0, 0, 0, 16, 4];
    }
    game.display.lock().shows.clear();
    game.buzzer.lock().notes.clear();

    game.press_start().unwrap();

    assert_eq!(game.player_score(), 30);

    // Loss jingle and dealer banner fired...
    let buzzer = game.buzzer.lock();
    assert_eq!(buzzer.notes.len(), 4);
    assert!(buzzer.notes.iter().all(|&(_, ms)| ms == 300));
    drop(buzzer);
    let display = game.display.lock();
    assert_eq!(display.shows, vec![(DEALER_TAG.to_string(), BANNER_COLUMN)]);
    drop(display);

    // ...but the phase write after the deal wins, so the round keeps going
    // through the animation instead of sticking at Finished.
    assert_eq!(game.phase(), Phase::Animating);
}

#[test]
fn announce_with_dealer_bust_plays_full_win_melody() {
    let game = new_game(37);
    {
        let mut state = game.state.lock();
        state.player_score = 20;
        state.dealer_score = 25;
    }

    game.announce_winner();

    assert_eq!(game.phase(), Phase::Finished);

    let buzzer = game.buzzer.lock();
    let played: Vec<Note> = buzzer.notes.iter().map(|&(note, _)| note).collect();

    // The first five notes repeat three times, then the tail plays once.
    let mut expected: Vec<Note> = Vec::new();
    for _ in 0..3 {
        expected.extend_from_slice(&WIN_MELODY[..WIN_RIFF_LEN]);
    }
    expected.extend_from_slice(&WIN_MELODY[WIN_RIFF_LEN..]);
    assert_eq!(played, expected);
    assert_eq!(played.len(), 19);
    drop(buzzer);

    let display = game.display.lock();
    assert_eq!(display.shows, vec![(PLAYER_TAG.to_string(), BANNER_COLUMN)]);
}

#[test]
fn announce_with_tie_is_silent_but_still_finishes() {
    let game = new_game(41);
    {
        let mut state = game.state.lock();
        state.player_score = 18;
        state.dealer_score = 18;
    }

    game.announce_winner();

    assert_eq!(game.phase(), Phase::Finished);
    assert!(game.buzzer.lock().notes.is_empty());
    assert!(game.display.lock().shows.is_empty());
}

#[test]
fn finished_tick_shows_wins_banner_and_allows_standby() {
    let game = new_game(43);
    game.state.lock().phase = Phase::Finished;

    let may_sleep = game.tick().unwrap();

    assert!(may_sleep);
    let display = game.display.lock();
    assert_eq!(display.shows, vec![(WINS_TEXT.to_string(), SCORE_COLUMN)]);
}

#[test]
fn outcome_resolution_order() {
    // Player bust beats every other rule, even a dealer bust.
    assert_eq!(resolve(22, 19), Some(Outcome::Loss));
    assert_eq!(resolve(22, 25), Some(Outcome::Loss));
    // Dealer bust next.
    assert_eq!(resolve(20, 25), Some(Outcome::Win));
    // Then plain comparison.
    assert_eq!(resolve(20, 19), Some(Outcome::Win));
    assert_eq!(resolve(17, 19), Some(Outcome::Loss));
    // A push emits nothing.
    assert_eq!(resolve(18, 18), None);
    assert_eq!(resolve(0, 0), None);
}

#[test]
fn exhausting_the_drawable_pool_fails_the_next_draw() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    let mut deck = Deck::new();
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    // 52 of the 56 cards are drawable; the rank-11 slot is out of the draw
    // space and keeps its 4 copies.
    for _ in 0..52 {
        let rank = deck.draw(&mut rng).unwrap();
        assert!((1..=10).contains(&rank));
    }

    assert_eq!(deck.remaining(), 4);
    assert_eq!(deck.count(11), 4);
    assert_eq!(deck.draw(&mut rng).unwrap_err(), DrawError::Exhausted);
}

#[test]
fn exhausted_ranks_are_resampled_not_returned() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    let mut deck = Deck::new();
    deck.counts = [0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 4];
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    for _ in 0..4 {
        assert_eq!(deck.draw(&mut rng).unwrap(), 7);
    }
    assert_eq!(deck.draw(&mut rng).unwrap_err(), DrawError::Exhausted);
}

#[test]
fn same_seed_replays_the_same_game() {
    let a = new_game(1234);
    let b = new_game(1234);

    for game in [&a, &b] {
        game.press_start().unwrap();
        tick_until(game, |phase| phase == Phase::Turn);
        game.press_start().unwrap();
        tick_until(game, |phase| phase == Phase::Turn);
    }

    assert_eq!(a.dealer_score(), b.dealer_score());
    assert_eq!(a.player_score(), b.player_score());
    assert_eq!(a.last_drawn_card(), b.last_drawn_card());
    assert_eq!(a.state.lock().deck, b.state.lock().deck);
}

#[test]
fn post_opening_dealing_auto_hits_the_player() {
    let game = new_game(53);
    game.press_start().unwrap();
    tick_until(&game, |phase| phase == Phase::Turn);

    let dealer = game.dealer_score();
    let player = game.player_score();

    // Dealer draw, then let the animation play out. Both scores are nonzero
    // when dealing is re-entered, so the player is dealt another card on the
    // way back to the turn.
    game.press_mode().unwrap();
    tick_until(&game, |phase| phase != Phase::Animating && phase != Phase::Dealing);

    let phase = game.phase();
    assert!(
        phase == Phase::Turn || phase == Phase::Finished,
        "unexpected phase {phase:?}"
    );
    assert!(game.dealer_score() > dealer);
    assert!(game.player_score() > player);
}
