//! Round state - one attempt at typing one phrase.
//!
//! The round owns everything that changes per keystroke: the target, the
//! typed prefix, the mistake count and the start time. It performs no I/O and
//! takes the clock as an argument wherever time matters.

use std::time::Instant;

use crate::scoring::compute_stats;
use crate::types::RoundStats;

#[derive(Debug, Clone)]
pub struct RoundState {
    target: Vec<u8>,
    /// Never longer than `target`.
    typed: Vec<u8>,
    /// Only ever grows during a round.
    mistake_count: u32,
    started_at: Instant,
}

impl RoundState {
    pub fn new(target: impl Into<String>, started_at: Instant) -> Self {
        let target = target.into().into_bytes();
        let typed = Vec::with_capacity(target.len());
        Self {
            target,
            typed,
            mistake_count: 0,
            started_at,
        }
    }

    pub fn target(&self) -> &[u8] {
        &self.target
    }

    pub fn typed(&self) -> &[u8] {
        &self.typed
    }

    pub fn mistake_count(&self) -> u32 {
        self.mistake_count
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn is_complete(&self) -> bool {
        self.typed.len() == self.target.len()
    }

    /// Place one character at the next position.
    ///
    /// Does nothing once the round is complete. Returns `true` only when this
    /// call completed the round.
    pub fn append_char(&mut self, c: u8) -> bool {
        if self.is_complete() {
            return false;
        }

        let pos = self.typed.len();
        self.typed.push(c);
        if self.target[pos] != c {
            self.mistake_count = self.mistake_count.saturating_add(1);
        }

        self.is_complete()
    }

    /// Remove the last typed character. Mistakes already counted stay counted.
    ///
    /// Returns whether anything was removed.
    pub fn backspace(&mut self) -> bool {
        self.typed.pop().is_some()
    }

    /// Reset the clock without touching input, e.g. after a results screen.
    pub fn restart_clock(&mut self, now: Instant) {
        self.started_at = now;
    }

    pub fn compute_stats(&self) -> RoundStats {
        self.stats_at(Instant::now())
    }

    pub fn stats_at(&self, now: Instant) -> RoundStats {
        let elapsed = now.saturating_duration_since(self.started_at);
        compute_stats(self.target.len(), self.mistake_count, elapsed)
    }
}
