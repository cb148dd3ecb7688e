//! Renderer: flushes round and results frames to a real terminal.
//!
//! Every draw is a full redraw: clear, then place each line. Frames are
//! encoded into a byte buffer first and written with a single flush, so the
//! terminal shows the whole frame before the next blocking wait.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::types::{DisplayGeometry, RoundStats};
use crate::view::{results_frame, round_frame, Frame};

pub struct Renderer<W: Write = io::Stdout> {
    out: W,
    geometry: DisplayGeometry,
    buf: Vec<u8>,
}

impl Renderer<io::Stdout> {
    pub fn new(geometry: DisplayGeometry) -> Self {
        Self::with_writer(io::stdout(), geometry)
    }
}

impl<W: Write> Renderer<W> {
    pub fn with_writer(out: W, geometry: DisplayGeometry) -> Self {
        Self {
            out,
            geometry,
            buf: Vec::with_capacity(1024),
        }
    }

    pub fn render_round(&mut self, target: &[u8], typed: &[u8], mistake_count: u32) -> Result<()> {
        let frame = round_frame(self.geometry, target, typed, mistake_count);
        self.draw(&frame)
    }

    pub fn render_results(&mut self, stats: &RoundStats) -> Result<()> {
        let frame = results_frame(self.geometry, stats);
        self.draw(&frame)
    }

    fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, &mut self.buf)?;
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Encode a full redraw of `frame` into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(frame: &Frame, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::Hide)?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for line in &frame.lines {
        out.queue(cursor::MoveTo(line.col, line.row))?;
        out.queue(Print(&line.text))?;
        out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
    }

    if let Some((col, row)) = frame.cursor {
        out.queue(cursor::MoveTo(col, row))?;
    }
    Ok(())
}

/// Encode the screen teardown run when a session closes: clear, home, show
/// cursor.
pub fn encode_restore_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::Show)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn encoded(frame: &Frame) -> String {
        let mut buf = Vec::new();
        encode_frame_into(frame, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn frame_starts_with_hide_home_clear() {
        let frame = round_frame(DisplayGeometry::new(80, 24), b"cat", b"", 0);
        let s = encoded(&frame);
        assert!(s.starts_with("\x1b[?25l\x1b[1;1H\x1b[2J"), "{s:?}");
    }

    #[test]
    fn lines_are_positioned_and_cleared_to_end() {
        let frame = round_frame(DisplayGeometry::new(80, 24), b"cat", b"c", 0);
        let s = encoded(&frame);

        // Title at row 0, col 30 => 1-based "1;31".
        assert!(s.contains("\x1b[1;31H=== Typing Game ===\x1b[K"), "{s:?}");
        // "Your input: c" is 13 wide: (80 - 13) / 2 = 33 => "5;34".
        assert!(s.contains("\x1b[5;34HYour input: c\x1b[K"), "{s:?}");
    }

    #[test]
    fn cursor_is_left_after_last_typed_char() {
        let frame = round_frame(DisplayGeometry::new(80, 24), b"cat", b"c", 0);
        let s = encoded(&frame);
        // 33 + 12 + 1 = 46 => 1-based column 47.
        assert!(s.ends_with("\x1b[5;47H"), "{s:?}");
    }

    #[test]
    fn renderer_flushes_results_to_writer() {
        let stats = RoundStats {
            elapsed: Duration::from_millis(2500),
            accuracy_percent: 100.0,
            words_per_minute: 52.8,
        };
        let mut r = Renderer::with_writer(Vec::new(), DisplayGeometry::new(60, 20));
        r.render_results(&stats).unwrap();

        let s = String::from_utf8(r.into_inner()).unwrap();
        assert!(s.contains("Time: 2.50 seconds"));
        assert!(s.contains("Accuracy: 100.0%"));
        assert!(s.contains("Speed: 52.8 WPM"));
        assert!(s.contains("Press any key to continue"));
    }

    #[test]
    fn each_draw_is_a_full_redraw() {
        let mut r = Renderer::with_writer(Vec::new(), DisplayGeometry::new(80, 24));
        r.render_round(b"ab", b"", 0).unwrap();
        r.render_round(b"ab", b"x", 1).unwrap();

        let s = String::from_utf8(r.into_inner()).unwrap();
        assert_eq!(s.matches("\x1b[2J").count(), 2);
        assert!(s.contains("Mistakes: 1"));
    }

    #[test]
    fn restore_shows_cursor() {
        let mut buf = Vec::new();
        encode_restore_into(&mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.contains("\x1b[2J"));
        assert!(s.ends_with("\x1b[?25h"));
    }
}
