//! Frame rendering to a terminal writer.
//!
//! Chunk reveals print one line each; the scroll offset redraws an in-place
//! gauge on the current line. Both forms carry the play/pause affordance.

use std::io::{self, Write};

use briskly_core::{render::Frame, session::PlayState};

const GAUGE_SLOTS: usize = 40;

pub struct FramePrinter<W: Write> {
    out: W,
    /// An in-place scroll gauge occupies the current terminal line.
    gauge_open: bool,
}

impl<W: Write> FramePrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            gauge_open: false,
        }
    }

    pub fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        match *frame {
            Frame::Blank { state, wpm } => {
                self.close_gauge()?;
                writeln!(self.out, "-- {} ({} wpm) --", state_label(state), wpm)?;
            }
            Frame::Chunk {
                text,
                index,
                chunk_total,
                state,
                ..
            } => {
                self.close_gauge()?;
                writeln!(
                    self.out,
                    "[{:>4}/{:<4}]{} {}",
                    index + 1,
                    chunk_total,
                    state_marker(state),
                    text
                )?;
                if state == PlayState::Completed {
                    writeln!(self.out, "-- complete --")?;
                }
            }
            Frame::Scroll {
                offset_px,
                total_px,
                state,
                intro_visible,
                ..
            } => {
                let filled = gauge_fill(offset_px, total_px);
                write!(
                    self.out,
                    "\r[{}{}] {:>7.1}/{:.1} px{}{}   ",
                    "#".repeat(filled),
                    "-".repeat(GAUGE_SLOTS - filled),
                    offset_px,
                    total_px,
                    state_marker(state),
                    if intro_visible { "  get ready..." } else { "" }
                )?;
                self.gauge_open = true;
                if state == PlayState::Completed {
                    self.gauge_open = false;
                    writeln!(self.out)?;
                    writeln!(self.out, "-- complete --")?;
                }
            }
        }
        self.out.flush()
    }

    /// Terminates an in-place gauge line before printing full lines again.
    fn close_gauge(&mut self) -> io::Result<()> {
        if self.gauge_open {
            self.gauge_open = false;
            writeln!(self.out)?;
        }
        Ok(())
    }
}

fn gauge_fill(offset_px: f32, total_px: f32) -> usize {
    if total_px <= 0.0 {
        return 0;
    }
    let fraction = (offset_px / total_px).clamp(0.0, 1.0);
    (fraction * GAUGE_SLOTS as f32) as usize
}

fn state_label(state: PlayState) -> &'static str {
    match state {
        PlayState::Idle => "idle",
        PlayState::Running => "running",
        PlayState::Paused => "paused",
        PlayState::Completed => "complete",
    }
}

fn state_marker(state: PlayState) -> &'static str {
    match state {
        PlayState::Paused => " ||",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_frames_print_one_line_each() {
        let mut printer = FramePrinter::new(Vec::new());
        printer
            .render(&Frame::Chunk {
                text: "one two three four",
                index: 0,
                chunk_total: 2,
                wpm: 300,
                state: PlayState::Running,
            })
            .unwrap();

        let output = String::from_utf8(printer.out).unwrap();
        assert_eq!(output, "[   1/2   ] one two three four\n");
    }

    #[test]
    fn paused_chunk_carries_the_affordance_marker() {
        let mut printer = FramePrinter::new(Vec::new());
        printer
            .render(&Frame::Chunk {
                text: "five",
                index: 1,
                chunk_total: 2,
                wpm: 300,
                state: PlayState::Paused,
            })
            .unwrap();

        let output = String::from_utf8(printer.out).unwrap();
        assert!(output.contains("||"), "missing pause marker: {output}");
    }

    #[test]
    fn scroll_completion_closes_the_gauge_line() {
        let mut printer = FramePrinter::new(Vec::new());
        printer
            .render(&Frame::Scroll {
                offset_px: 250.0,
                total_px: 1_000.0,
                wpm: 300,
                state: PlayState::Running,
                intro_visible: false,
            })
            .unwrap();
        printer
            .render(&Frame::Scroll {
                offset_px: 1_000.0,
                total_px: 1_000.0,
                wpm: 300,
                state: PlayState::Completed,
                intro_visible: false,
            })
            .unwrap();

        let output = String::from_utf8(printer.out).unwrap();
        assert!(output.contains('\r'));
        assert!(output.ends_with("-- complete --\n"), "got: {output:?}");
    }

    #[test]
    fn intro_overlay_is_announced_while_visible() {
        let mut printer = FramePrinter::new(Vec::new());
        printer
            .render(&Frame::Scroll {
                offset_px: 0.0,
                total_px: 1_000.0,
                wpm: 300,
                state: PlayState::Running,
                intro_visible: true,
            })
            .unwrap();

        let output = String::from_utf8(printer.out).unwrap();
        assert!(output.contains("get ready"), "got: {output:?}");
    }
}
