//! The win and loss jingles.

use crate::platform::{Buzzer, Note};

/// The win melody. The first [`WIN_RIFF_LEN`] notes form a leading riff that
/// is repeated three times before the tail plays once.
pub const WIN_MELODY: [Note; 9] = [
    Note::G4,
    Note::Rest,
    Note::G4,
    Note::C5,
    Note::B4,
    Note::C5,
    Note::B4,
    Note::G4,
    Note::A4,
];

/// Per-note durations for [`WIN_MELODY`], in milliseconds.
pub const WIN_DURATIONS_MS: [u16; 9] = [200, 50, 200, 200, 200, 200, 200, 200, 200];

/// Length of the repeated leading riff of the win melody.
pub const WIN_RIFF_LEN: usize = 5;

/// The loss melody, a short descending chromatic run.
pub const LOSS_MELODY: [Note; 4] = [Note::D4, Note::CSharp4, Note::C4, Note::B3];

/// Uniform note duration for the loss melody, in milliseconds.
pub const LOSS_NOTE_MS: u16 = 300;

/// Plays the win jingle: the leading riff three times, then the tail once.
pub fn play_win<B: Buzzer>(buzzer: &mut B) {
    for _ in 0..3 {
        for (&note, duration) in WIN_MELODY.iter().zip(WIN_DURATIONS_MS).take(WIN_RIFF_LEN) {
            buzzer.play_note(note, duration);
        }
    }

    for (&note, duration) in WIN_MELODY.iter().zip(WIN_DURATIONS_MS).skip(WIN_RIFF_LEN) {
        buzzer.play_note(note, duration);
    }
}

/// Plays the loss jingle at a uniform tempo.
pub fn play_loss<B: Buzzer>(buzzer: &mut B) {
    for note in LOSS_MELODY {
        buzzer.play_note(note, LOSS_NOTE_MS);
    }
}
