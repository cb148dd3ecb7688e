//! Blocking byte reader.
//!
//! Raw-mode stdin is read one byte per call on a dedicated OS thread and
//! forwarded over a channel, so the main loop can select between input and
//! termination instead of blocking inside `read`.

use std::io::{self, Read};
use std::thread;

use tokio::sync::mpsc;

/// One unit from the input stream, or the error that ended it.
pub type InputUnit = io::Result<u8>;

/// Spawn the reader thread.
///
/// The thread stops after forwarding the first error (end of stream is
/// reported as `UnexpectedEof`) or when the receiver is dropped. It is
/// detached: a thread parked in `read` must not hold up process exit.
pub fn spawn_byte_reader<R>(mut reader: R, tx: mpsc::Sender<InputUnit>) -> io::Result<()>
where
    R: Read + Send + 'static,
{
    thread::Builder::new()
        .name("input-reader".into())
        .spawn(move || {
            let mut buf = [0u8; 1];
            loop {
                let unit = match reader.read(&mut buf) {
                    Ok(0) => Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "input stream closed",
                    )),
                    Ok(_) => Ok(buf[0]),
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => Err(e),
                };

                let failed = unit.is_err();
                if tx.blocking_send(unit).is_err() || failed {
                    break;
                }
            }
            log::debug!("input reader stopped");
        })?;
    Ok(())
}
