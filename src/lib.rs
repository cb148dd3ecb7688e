//! TUI Typing (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `tui_typing::{core,input,term,types}` and hosts the pieces that tie them
//! into a running session: configuration, logging, OS signal handling and the
//! main loop.

pub use tui_typing_core as core;
pub use tui_typing_input as input;
pub use tui_typing_term as term;
pub use tui_typing_types as types;

pub mod app;
pub mod config;
pub mod logging;
pub mod shutdown;
