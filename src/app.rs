//! Session main loop.
//!
//! Sequential render → wait → dispatch. The wait selects between the next
//! input byte and the termination signal, so an OS signal ends the session
//! even while no key is pressed.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::config::GameConfig;
use crate::core::PhrasePicker;
use crate::input::{spawn_byte_reader, InputDispatcher, InputUnit, TerminationSignal, View};
use crate::shutdown::ShutdownCoordinator;
use crate::term::{Renderer, TermError};
use crate::types::DisplayGeometry;

/// Capacity of the reader → main loop channel.
const INPUT_BUFFER: usize = 64;

/// Run a session on stdin/stdout. Raw mode must already be entered.
pub async fn run(config: &GameConfig, geometry: DisplayGeometry) -> Result<()> {
    let signal = TerminationSignal::new();

    match ShutdownCoordinator::install(signal.clone()) {
        Ok(coordinator) => {
            tokio::spawn(coordinator.run());
        }
        Err(e) => log::warn!("OS signal handling unavailable: {e}"),
    }

    let (tx, mut rx) = mpsc::channel(INPUT_BUFFER);
    spawn_byte_reader(io::stdin(), tx).map_err(TermError::Io)?;

    let picker = PhrasePicker::new(config.seed);
    let mut dispatcher = InputDispatcher::new(picker, signal.clone(), Instant::now());
    let mut renderer = Renderer::new(geometry);

    run_session(&mut dispatcher, &mut renderer, &signal, &mut rx).await
}

/// Drive the dispatcher until the termination signal closes.
///
/// Returns `Ok` for an interrupt or OS signal and
/// [`TermError::InputReadFailure`] when the input stream fails or closes.
pub async fn run_session<W: Write>(
    dispatcher: &mut InputDispatcher,
    renderer: &mut Renderer<W>,
    signal: &TerminationSignal,
    input: &mut mpsc::Receiver<InputUnit>,
) -> Result<()> {
    loop {
        if signal.is_closed() {
            return Ok(());
        }

        match dispatcher.view() {
            View::Round(round) => {
                renderer.render_round(round.target(), round.typed(), round.mistake_count())?
            }
            View::Results(stats) => renderer.render_results(stats)?,
        }

        tokio::select! {
            biased;
            _ = signal.closed() => return Ok(()),
            unit = input.recv() => match unit {
                Some(Ok(b)) => {
                    dispatcher.handle_byte(b, Instant::now());
                }
                Some(Err(e)) => {
                    log::error!("input read failed: {e}");
                    dispatcher.input_failed();
                    return Err(TermError::InputReadFailure(e).into());
                }
                None => {
                    dispatcher.input_failed();
                    let e = io::Error::new(io::ErrorKind::BrokenPipe, "input reader stopped");
                    return Err(TermError::InputReadFailure(e).into());
                }
            },
        }
    }
}
