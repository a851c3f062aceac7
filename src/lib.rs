//! A dealer-vs-player "reach 21" card game core with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the whole round flow of a
//! small handheld card-counting game: the opening deal, player hits, dealer
//! draws, bust/outcome resolution, and the presentation sequencing (display
//! strings, a two-cursor pixel animation, and win/loss melodies). Hardware
//! concerns stay behind the [`Display`] and [`Buzzer`] capability traits;
//! button presses and the periodic tick arrive as plain method calls.
//!
//! # Example
//!
//! ```no_run
//! use reach21::{Buzzer, Display, Game, Note};
//!
//! struct Panel;
//! impl Display for Panel {
//!     fn show(&mut self, _text: &str, _start_column: u8) {}
//!     fn set_pixel(&mut self, _row: u8, _col: u8) {}
//! }
//!
//! struct Piezo;
//! impl Buzzer for Piezo {
//!     fn play_note(&mut self, _note: Note, _duration_ms: u16) {}
//! }
//!
//! let game = Game::new(Panel, Piezo, 42);
//! game.press_start().unwrap();
//! let _may_sleep = game.tick().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "spin")))]
compile_error!(
    "`std` is disabled but the `spin` feature is not enabled. Enable `spin` or keep `std` enabled."
);

pub mod anim;
pub mod deck;
pub mod error;
pub mod game;
pub mod melody;
pub mod outcome;
pub mod platform;
mod sync;

// Re-export main types
pub use anim::{FRAME_COUNT, LOADING_FRAMES};
pub use deck::{DECK_SLOTS, Deck, RANK_MAX, RANK_MIN, TOTAL_CARDS};
pub use error::DrawError;
pub use game::{Game, GameState, Phase, Seat};
pub use melody::{LOSS_MELODY, LOSS_NOTE_MS, WIN_DURATIONS_MS, WIN_MELODY, WIN_RIFF_LEN};
pub use outcome::{BUST_THRESHOLD, Outcome, resolve};
pub use platform::{Buzzer, Display, Note};
