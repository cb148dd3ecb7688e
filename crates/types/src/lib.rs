//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (round logic, input dispatch, terminal rendering).
//!
//! # Input Bytes
//!
//! Input arrives from the terminal in raw mode, one byte at a time:
//!
//! | Constant | Value | Meaning |
//! |----------|-------|---------|
//! | `INTERRUPT_BYTE` | 3 | Ctrl+C (no SIGINT is raised in raw mode) |
//! | `BACKSPACE_BYTE` | 127 | DEL, sent by the backspace key |
//!
//! Every other byte is a typed character.
//!
//! # Scoring Constants
//!
//! - `CHARS_PER_WORD`: 5 - standard characters-per-word convention for WPM
//!
//! # Examples
//!
//! ```
//! use tui_typing_types::{KeyInput, INTERRUPT_BYTE, BACKSPACE_BYTE};
//!
//! assert_eq!(KeyInput::from_byte(INTERRUPT_BYTE), KeyInput::Interrupt);
//! assert_eq!(KeyInput::from_byte(BACKSPACE_BYTE), KeyInput::Backspace);
//! assert_eq!(KeyInput::from_byte(b'a'), KeyInput::Char(b'a'));
//! ```

use std::time::Duration;

/// Ctrl+C as delivered by a raw-mode terminal.
pub const INTERRUPT_BYTE: u8 = 3;

/// Backspace (DEL) as delivered by a raw-mode terminal.
pub const BACKSPACE_BYTE: u8 = 127;

/// Characters counted as one word when computing WPM.
pub const CHARS_PER_WORD: f64 = 5.0;

/// Built-in practice phrases.
pub const PHRASES: [&str; 5] = [
    "Hello World",
    "Go Programming",
    "Type this text",
    "Practice makes perfect",
    "Keep coding",
];

/// Classification of a single raw input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyInput {
    /// Control: stop the session.
    Interrupt,
    /// Edit: remove the last typed character.
    Backspace,
    /// Anything else is typed into the round as-is.
    Char(u8),
}

impl KeyInput {
    /// Classify a raw byte.
    pub fn from_byte(b: u8) -> Self {
        match b {
            INTERRUPT_BYTE => KeyInput::Interrupt,
            BACKSPACE_BYTE => KeyInput::Backspace,
            other => KeyInput::Char(other),
        }
    }

    /// Human-readable name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyInput::Interrupt => "interrupt",
            KeyInput::Backspace => "backspace",
            KeyInput::Char(_) => "char",
        }
    }
}

/// Bytes that display as themselves.
///
/// Anything else (escape, tab, other control bytes, high bytes) is still typed
/// into a round, but is shown as a placeholder so it occupies one column.
pub fn is_printable(b: u8) -> bool {
    b.is_ascii_graphic() || b == b' '
}

/// Statistics for a completed round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundStats {
    pub elapsed: Duration,
    /// Percentage on a 0-100 scale.
    pub accuracy_percent: f64,
    pub words_per_minute: f64,
}

/// Terminal dimensions, queried once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayGeometry {
    pub columns: u16,
    pub rows: u16,
}

impl DisplayGeometry {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }
}
