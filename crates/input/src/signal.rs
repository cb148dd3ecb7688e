//! One-shot termination signal shared by the input path and the OS signal
//! listener.
//!
//! Closing is idempotent: the first `close` records why the session is
//! ending and wakes every waiter, later calls return `false` and change
//! nothing.

use std::fmt;
use std::sync::{Arc, OnceLock};

use tokio_util::sync::CancellationToken;

/// Why the session is ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// Ctrl+C byte read from the terminal.
    Interrupt,
    /// Operating system signal, by name.
    Signal(&'static str),
    /// The input stream failed or closed.
    InputFailure,
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownReason::Interrupt => f.write_str("interrupt key"),
            ShutdownReason::Signal(name) => write!(f, "signal {name}"),
            ShutdownReason::InputFailure => f.write_str("input failure"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TerminationSignal {
    reason: Arc<OnceLock<ShutdownReason>>,
    token: CancellationToken,
}

impl TerminationSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the signal. Returns `true` only for the call that closed it.
    pub fn close(&self, reason: ShutdownReason) -> bool {
        if self.reason.set(reason).is_err() {
            log::debug!("termination already requested; ignoring {reason}");
            return false;
        }
        log::info!("termination requested by {reason}");
        self.token.cancel();
        true
    }

    pub fn is_closed(&self) -> bool {
        self.reason.get().is_some()
    }

    /// The reason recorded by the first `close`.
    pub fn reason(&self) -> Option<ShutdownReason> {
        self.reason.get().copied()
    }

    /// Resolves once the signal has been closed.
    pub async fn closed(&self) {
        self.token.cancelled().await;
    }
}
