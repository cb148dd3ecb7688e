//! RNG module - phrase selection
//!
//! Each round draws its target phrase uniformly from a fixed list. A small
//! LCG keeps selection deterministic for a given seed, which the tests rely on.

use crate::types::PHRASES;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 16) % max.max(1)
    }
}

/// Picks the target phrase for each new round.
#[derive(Debug, Clone)]
pub struct PhrasePicker {
    phrases: &'static [&'static str],
    rng: SimpleRng,
}

impl PhrasePicker {
    /// Picker over the built-in phrase list.
    pub fn new(seed: u32) -> Self {
        Self::with_phrases(&PHRASES, seed)
    }

    /// Picker over a caller-provided list.
    ///
    /// An empty list is replaced by the built-in phrases so `pick` always has
    /// something to return.
    pub fn with_phrases(phrases: &'static [&'static str], seed: u32) -> Self {
        let phrases = if phrases.is_empty() { &PHRASES[..] } else { phrases };
        Self {
            phrases,
            rng: SimpleRng::new(seed),
        }
    }

    /// Choose the next phrase. Repeats are allowed.
    pub fn pick(&mut self) -> &'static str {
        let idx = self.rng.next_range(self.phrases.len() as u32) as usize;
        self.phrases[idx]
    }
}

impl Default for PhrasePicker {
    fn default() -> Self {
        Self::new(1)
    }
}
