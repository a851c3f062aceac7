//! Capability traits for the device the game runs on.
//!
//! The core never talks to hardware directly. A segmented display and a
//! buzzer are supplied to [`Game::new`](crate::Game::new) as implementations
//! of these traits; the input side needs no trait because button presses
//! arrive as plain method calls on the game itself.

/// A buzzer pitch.
///
/// Only the pitches the two melodies use are named, plus [`Note::Rest`] for
/// silent gaps. `CSharp4` doubles as D♭4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Note {
    /// Silence for the note's duration.
    Rest,
    /// B3.
    B3,
    /// C4.
    C4,
    /// C♯4 / D♭4.
    CSharp4,
    /// D4.
    D4,
    /// G4.
    G4,
    /// A4.
    A4,
    /// B4.
    B4,
    /// C5.
    C5,
}

/// A fixed-width segmented character display with an addressable pixel grid.
pub trait Display {
    /// Renders `text` starting at the given character column.
    ///
    /// The display is fixed width; keeping the text in range is the caller's
    /// responsibility.
    fn show(&mut self, text: &str, start_column: u8);

    /// Lights a single pixel.
    fn set_pixel(&mut self, row: u8, col: u8);
}

/// A buzzer that plays one tone at a time.
pub trait Buzzer {
    /// Plays `note` for `duration_ms` milliseconds.
    ///
    /// Each call returns only after the tone has finished, so melody playback
    /// is purely sequential from the game's perspective.
    fn play_note(&mut self, note: Note, duration_ms: u16);
}
