//! Per-keystroke state machine.
//!
//! The dispatcher owns the current round and applies one input byte at a
//! time. It never fails: every byte maps to exactly one transition.
//!
//! ```text
//! Running ──interrupt byte / read failure──▶ Terminating
//! ```
//!
//! While `Running`, a completed round switches the view to the results
//! screen. The next non-interrupt byte dismisses it without being typed and
//! restarts the clock of the round that was prepared at completion.

use std::time::Instant;

use crate::core::{PhrasePicker, RoundState};
use crate::map::map_byte;
use crate::signal::{ShutdownReason, TerminationSignal};
use crate::types::{KeyInput, RoundStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    Running,
    Terminating,
}

/// What a single byte did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Character placed in the round.
    Typed,
    /// Backspace applied (possibly on empty input).
    Erased,
    /// Round finished; a fresh round is already in place.
    Completed(RoundStats),
    /// Results screen dismissed.
    Dismissed,
    /// Session is ending.
    Terminated,
    /// Byte arrived after termination and was dropped.
    Ignored,
}

/// What the renderer should draw next.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    Round(&'a RoundState),
    Results(&'a RoundStats),
}

#[derive(Debug)]
pub struct InputDispatcher {
    state: DispatchState,
    round: RoundState,
    picker: PhrasePicker,
    results: Option<RoundStats>,
    signal: TerminationSignal,
}

impl InputDispatcher {
    pub fn new(mut picker: PhrasePicker, signal: TerminationSignal, now: Instant) -> Self {
        let round = RoundState::new(picker.pick(), now);
        Self {
            state: DispatchState::Running,
            round,
            picker,
            results: None,
            signal,
        }
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Stats of the last completed round while its results are on screen.
    #[cfg(test)]
    pub fn results(&self) -> Option<&RoundStats> {
        self.results.as_ref()
    }

    pub fn view(&self) -> View<'_> {
        match &self.results {
            Some(stats) => View::Results(stats),
            None => View::Round(&self.round),
        }
    }

    /// Apply one input byte.
    pub fn handle_byte(&mut self, b: u8, now: Instant) -> Outcome {
        if self.state == DispatchState::Terminating {
            return Outcome::Ignored;
        }

        let input = map_byte(b);
        log::trace!("input {} ({b:#04x})", input.as_str());

        match input {
            KeyInput::Interrupt => {
                self.terminate(ShutdownReason::Interrupt);
                Outcome::Terminated
            }
            _ if self.results.is_some() => {
                self.results = None;
                self.round.restart_clock(now);
                Outcome::Dismissed
            }
            KeyInput::Backspace => {
                self.round.backspace();
                Outcome::Erased
            }
            KeyInput::Char(c) => {
                if !self.round.append_char(c) {
                    return Outcome::Typed;
                }
                let stats = self.round.stats_at(now);
                log::info!(
                    "round complete: {:.2}s, {:.1}% accuracy, {:.1} wpm, {} mistakes",
                    stats.elapsed.as_secs_f64(),
                    stats.accuracy_percent,
                    stats.words_per_minute,
                    self.round.mistake_count()
                );
                self.results = Some(stats);
                self.round = RoundState::new(self.picker.pick(), now);
                Outcome::Completed(stats)
            }
        }
    }

    /// The input stream is gone; end the session.
    pub fn input_failed(&mut self) {
        self.terminate(ShutdownReason::InputFailure);
    }

    fn terminate(&mut self, reason: ShutdownReason) {
        self.signal.close(reason);
        self.state = DispatchState::Terminating;
    }
}
