//! Scoring module - accuracy and typing speed
//!
//! Mistakes are counted once, when a character is placed. Accuracy is derived
//! from the phrase length and that count; speed uses the 5-characters-per-word
//! convention over the whole phrase.

use std::time::Duration;

use crate::types::{RoundStats, CHARS_PER_WORD};

/// Accuracy on a 0-100 scale.
///
/// `100 * (len - mistakes) / len`. Retyping after backspace can push
/// `mistakes` past `len`, in which case the result is negative.
pub fn accuracy_percent(target_len: usize, mistakes: u32) -> f64 {
    if target_len == 0 {
        return 100.0;
    }
    let len = target_len as f64;
    100.0 * (len - mistakes as f64) / len
}

/// Words per minute for a phrase typed in `elapsed`.
///
/// Returns 0 when no measurable time has passed.
pub fn words_per_minute(target_len: usize, elapsed: Duration) -> f64 {
    let minutes = elapsed.as_secs_f64() / 60.0;
    if minutes <= 0.0 {
        return 0.0;
    }
    (target_len as f64 / CHARS_PER_WORD) / minutes
}

pub fn compute_stats(target_len: usize, mistakes: u32, elapsed: Duration) -> RoundStats {
    RoundStats {
        elapsed,
        accuracy_percent: accuracy_percent(target_len, mistakes),
        words_per_minute: words_per_minute(target_len, elapsed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_accuracy_is_exact() {
        for len in 1..64 {
            assert_eq!(accuracy_percent(len, 0), 100.0);
        }
    }

    #[test]
    fn test_all_wrong_is_exactly_zero() {
        for len in 1..64 {
            assert_eq!(accuracy_percent(len, len as u32), 0.0);
        }
    }

    #[test]
    fn test_one_of_three_wrong() {
        let acc = accuracy_percent(3, 1);
        assert_eq!(format!("{acc:.1}"), "66.7");
    }

    #[test]
    fn test_excess_mistakes_go_negative() {
        assert_eq!(accuracy_percent(2, 3), -50.0);
        assert_eq!(accuracy_percent(2, 5), -150.0);
    }

    #[test]
    fn test_empty_target_accuracy() {
        assert_eq!(accuracy_percent(0, 0), 100.0);
    }

    #[test]
    fn test_wpm_standard_word_length() {
        // 10 chars = 2 words in 30s = 4 WPM
        let wpm = words_per_minute(10, Duration::from_secs(30));
        assert!((wpm - 4.0).abs() < 1e-9);

        // 25 chars = 5 words in one minute
        let wpm = words_per_minute(25, Duration::from_secs(60));
        assert!((wpm - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_wpm_zero_elapsed() {
        assert_eq!(words_per_minute(11, Duration::ZERO), 0.0);
    }

    #[test]
    fn test_compute_stats_combines_parts() {
        let stats = compute_stats(5, 0, Duration::from_secs(12));
        assert_eq!(stats.elapsed, Duration::from_secs(12));
        assert_eq!(stats.accuracy_percent, 100.0);
        assert!((stats.words_per_minute - 5.0).abs() < 1e-9);
    }
}
