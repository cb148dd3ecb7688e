//! Terminal session ownership.
//!
//! [`TerminalSession::open`] puts the terminal in raw mode and hands back a
//! [`SessionHandle`]. The handle restores the terminal exactly once: either
//! through [`TerminalSession::close`] or, on any other exit path (early
//! return, `?`, panic unwind), when it is dropped.

use std::io::{self, IsTerminal, Write};

use crossterm::terminal;

use crate::error::TermError;
use crate::renderer::encode_restore_into;
use crate::types::DisplayGeometry;

/// Proof that the terminal is in raw mode. Not constructible outside this
/// module.
#[derive(Debug)]
pub struct SessionHandle {
    released: bool,
}

impl SessionHandle {
    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        match restore_terminal() {
            Ok(()) => log::info!("terminal restored"),
            Err(e) => log::warn!("terminal restore incomplete: {e}"),
        }
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        self.release();
    }
}

pub struct TerminalSession;

impl TerminalSession {
    /// Enter raw mode and query the display size.
    pub fn open() -> Result<(SessionHandle, DisplayGeometry), TermError> {
        if !io::stdin().is_terminal() {
            return Err(TermError::TerminalUnavailable(io::Error::new(
                io::ErrorKind::Unsupported,
                "stdin is not a terminal",
            )));
        }

        io::stdout().flush()?;
        terminal::enable_raw_mode().map_err(TermError::TerminalUnavailable)?;
        // From here on the handle owns restoration, including when the size
        // query below fails.
        let handle = SessionHandle { released: false };

        let (columns, rows) = terminal::size().map_err(TermError::TerminalUnavailable)?;
        let geometry = DisplayGeometry::new(columns, rows);
        log::info!("terminal session opened ({columns}x{rows})");

        Ok((handle, geometry))
    }

    /// Restore the terminal: clear, show the cursor, leave raw mode, newline.
    pub fn close(mut handle: SessionHandle) {
        handle.release();
    }
}

/// Runs every step even if an earlier one fails, and reports the first error.
fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();

    let mut buf = Vec::new();
    let screen = encode_restore_into(&mut buf)
        .map_err(io::Error::other)
        .and_then(|()| stdout.write_all(&buf));
    let mode = terminal::disable_raw_mode();
    let newline = stdout.write_all(b"\n").and_then(|()| stdout.flush());

    screen.and(mode).and(newline)
}
