//! Terminal input module (engine-facing).
//!
//! Maps raw terminal bytes to round inputs and drives the round state
//! machine. Nothing here touches the terminal directly: bytes come from any
//! `Read` via [`spawn_byte_reader`], and shutdown is coordinated through a
//! shared [`TerminationSignal`].

pub mod dispatcher;
pub mod map;
pub mod reader;
pub mod signal;

pub use tui_typing_core as core;
pub use tui_typing_types as types;

pub use dispatcher::{DispatchState, InputDispatcher, Outcome, View};
pub use map::map_byte;
pub use reader::{spawn_byte_reader, InputUnit};
pub use signal::{ShutdownReason, TerminationSignal};
