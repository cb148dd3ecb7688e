//! Terminal module.
//!
//! Owns everything that touches the real terminal: entering and leaving raw
//! mode, and drawing the round and results screens. Layout is kept separate
//! from I/O:
//!
//! - [`view`] decides which text goes on which row (pure, unit-tested)
//! - [`renderer`] encodes a frame into crossterm commands and flushes it
//! - [`session`] owns raw mode and restores it exactly once

pub mod error;
pub mod renderer;
pub mod session;
pub mod view;

pub use tui_typing_types as types;

pub use error::TermError;
pub use renderer::{encode_frame_into, encode_restore_into, Renderer};
pub use session::{SessionHandle, TerminalSession};
pub use view::{centered_col, results_frame, round_frame, Frame, PlacedLine};
