//! OS signal listener.
//!
//! In raw mode Ctrl+C arrives as a byte, so SIGINT/SIGTERM only come from
//! outside (`kill`, a closing terminal multiplexer, ...). Either one closes
//! the same [`TerminationSignal`] as the in-band interrupt byte.

use std::io;

use crate::input::{ShutdownReason, TerminationSignal};

pub struct ShutdownCoordinator {
    signal: TerminationSignal,
    listener: OsSignals,
}

impl ShutdownCoordinator {
    /// Register the OS signal handlers.
    ///
    /// Must be called from within a tokio runtime. Signals delivered after
    /// this returns are not lost, even before [`run`](Self::run) is polled.
    pub fn install(signal: TerminationSignal) -> io::Result<Self> {
        let listener = OsSignals::install()?;
        Ok(Self { signal, listener })
    }

    /// Wait for an OS signal or for the session to end some other way.
    pub async fn run(mut self) {
        tokio::select! {
            name = self.listener.recv() => {
                self.signal.close(ShutdownReason::Signal(name));
            }
            _ = self.signal.closed() => {
                log::debug!("shutdown coordinator stopping");
            }
        }
    }
}

#[cfg(unix)]
struct OsSignals {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl OsSignals {
    fn install() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    async fn recv(&mut self) -> &'static str {
        tokio::select! {
            _ = self.interrupt.recv() => "SIGINT",
            _ = self.terminate.recv() => "SIGTERM",
        }
    }
}

#[cfg(not(unix))]
struct OsSignals;

#[cfg(not(unix))]
impl OsSignals {
    fn install() -> io::Result<Self> {
        Ok(Self)
    }

    async fn recv(&mut self) -> &'static str {
        match tokio::signal::ctrl_c().await {
            Ok(()) => "ctrl-c",
            Err(e) => {
                log::warn!("ctrl-c handler unavailable: {e}");
                std::future::pending().await
            }
        }
    }
}
