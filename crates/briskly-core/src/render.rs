//! Session view model consumed by the presentation boundary.

use crate::session::PlayState;

/// One repaintable view of the session, lent to the renderer through
/// [`crate::session::PaceSession::with_frame`].
#[derive(Clone, Copy, Debug)]
pub enum Frame<'a> {
    /// No schedule derived yet (unconfigured, or reset back to idle).
    Blank { state: PlayState, wpm: u16 },
    /// Chunk mode: the staged chunk and its position in the sequence.
    Chunk {
        text: &'a str,
        index: u32,
        chunk_total: u32,
        wpm: u16,
        state: PlayState,
    },
    /// Scroll mode: continuous offset into the rendered text block.
    Scroll {
        offset_px: f32,
        total_px: f32,
        wpm: u16,
        state: PlayState,
        intro_visible: bool,
    },
}
