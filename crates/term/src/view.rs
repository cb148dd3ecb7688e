//! Screen layouts for the round and results screens.
//!
//! This module is pure (no I/O). It decides what text goes on which row and
//! where the cursor ends up; [`crate::renderer`] turns that into escape
//! sequences.

use crate::types::{is_printable, DisplayGeometry, RoundStats};

pub const TITLE: &str = "=== Typing Game ===";
pub const TARGET_LABEL: &str = "Type this: ";
pub const INPUT_LABEL: &str = "Your input: ";
pub const MISTAKES_LABEL: &str = "Mistakes: ";
pub const RESULTS_TITLE: &str = "=== Results ===";
pub const CONTINUE_PROMPT: &str = "Press any key to continue, Ctrl+C to exit...";

/// Shown in place of bytes that have no single-column glyph.
pub const PLACEHOLDER: char = '?';

/// Row of the typed-so-far line; the cursor lives here during a round.
pub const INPUT_ROW: u16 = 4;

/// One line of text at an absolute, 0-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLine {
    pub row: u16,
    pub col: u16,
    pub text: String,
}

/// A complete screen: lines to draw plus the final cursor position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<PlacedLine>,
    /// `(col, row)`, 0-based.
    pub cursor: Option<(u16, u16)>,
}

impl Frame {
    fn push_centered(&mut self, geometry: DisplayGeometry, row: u16, text: String) -> u16 {
        let col = centered_col(geometry.columns, text.chars().count());
        self.lines.push(PlacedLine { row, col, text });
        col
    }

    /// The line drawn on `row`, if any.
    #[cfg(test)]
    pub fn line(&self, row: u16) -> Option<&PlacedLine> {
        self.lines.iter().find(|l| l.row == row)
    }
}

/// Left column for centering `text_len` characters in `columns`.
///
/// `max(0, (columns - len) / 2)`; text wider than the terminal starts at 0.
pub fn centered_col(columns: u16, text_len: usize) -> u16 {
    let pad = (columns as usize).saturating_sub(text_len) / 2;
    pad as u16
}

/// Text for the typed-so-far portion, one column per byte.
pub fn display_typed(typed: &[u8]) -> String {
    typed
        .iter()
        .map(|&b| {
            if is_printable(b) {
                b as char
            } else {
                PLACEHOLDER
            }
        })
        .collect()
}

/// Layout of the in-progress round screen.
pub fn round_frame(
    geometry: DisplayGeometry,
    target: &[u8],
    typed: &[u8],
    mistake_count: u32,
) -> Frame {
    let mut frame = Frame::default();

    frame.push_centered(geometry, 0, TITLE.to_string());
    frame.push_centered(
        geometry,
        2,
        format!("{TARGET_LABEL}{}", display_typed(target)),
    );
    let input_col = frame.push_centered(
        geometry,
        INPUT_ROW,
        format!("{INPUT_LABEL}{}", display_typed(typed)),
    );
    frame.push_centered(geometry, 6, format!("{MISTAKES_LABEL}{mistake_count}"));

    let cursor_col = (input_col as usize + INPUT_LABEL.len() + typed.len()).min(u16::MAX as usize);
    frame.cursor = Some((cursor_col as u16, INPUT_ROW));
    frame
}

/// Layout of the results screen shown after a round.
pub fn results_frame(geometry: DisplayGeometry, stats: &RoundStats) -> Frame {
    let mut frame = Frame::default();

    frame.push_centered(geometry, 0, RESULTS_TITLE.to_string());
    frame.push_centered(
        geometry,
        2,
        format!("Time: {:.2} seconds", stats.elapsed.as_secs_f64()),
    );
    frame.push_centered(
        geometry,
        3,
        format!("Accuracy: {:.1}%", stats.accuracy_percent),
    );
    frame.push_centered(
        geometry,
        4,
        format!("Speed: {:.1} WPM", stats.words_per_minute),
    );
    frame.push_centered(geometry, 6, CONTINUE_PROMPT.to_string());
    frame
}
