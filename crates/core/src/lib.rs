//! Core round logic - pure, deterministic, and testable
//!
//! This crate contains the typing rules: what counts as a mistake, when a
//! round is complete, and how accuracy and speed are scored. It has **zero
//! dependencies** on the terminal, the input stream, or the clock source:
//! callers pass `Instant`s in, so every rule can be exercised in unit tests.
//!
//! # Module Structure
//!
//! - [`round`]: target phrase, typed prefix, mistake count, start time
//! - [`scoring`]: accuracy and words-per-minute
//! - [`rng`]: seedable phrase selection
//!
//! # Rules
//!
//! - A mistake is counted when a character is placed at a position where it
//!   differs from the target.
//! - Backspace removes the character but never the mistake.
//! - Input beyond the phrase length is ignored; the round is complete when
//!   the typed prefix is as long as the phrase.
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use tui_typing_core::RoundState;
//!
//! let mut round = RoundState::new("cat", Instant::now());
//! round.append_char(b'c');
//! round.append_char(b'x');
//! assert!(round.append_char(b't'));
//! assert_eq!(round.mistake_count(), 1);
//! ```

pub mod rng;
pub mod round;
pub mod scoring;

pub use tui_typing_types as types;

pub use rng::{PhrasePicker, SimpleRng};
pub use round::RoundState;
pub use scoring::{accuracy_percent, compute_stats, words_per_minute};
