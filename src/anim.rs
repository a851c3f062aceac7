//! The shared deal animation: a two-cursor sweep over a 9-pixel loop.

/// Number of pixels in the loop template.
pub const FRAME_COUNT: u8 = 9;

/// `(row, col)` of each pixel in the loop, in sweep order.
pub const LOADING_FRAMES: [(u8, u8); FRAME_COUNT as usize] = [
    (1, 16),
    (2, 2),
    (2, 4),
    (2, 5),
    (1, 6),
    (0, 6),
    (0, 3),
    (0, 2),
    (1, 2),
];

/// Looks up a cursor's pixel, if the cursor is on the template.
///
/// The leading cursor spends one step at [`FRAME_COUNT`] before the
/// completion check sees it; that step has no pixel.
#[must_use]
pub fn frame_at(cursor: u8) -> Option<(u8, u8)> {
    LOADING_FRAMES.get(cursor as usize).copied()
}
