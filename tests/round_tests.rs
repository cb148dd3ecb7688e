//! Integration tests for round scoring rules

use std::time::{Duration, Instant};

use tui_typing::core::{PhrasePicker, RoundState, SimpleRng};
use tui_typing::input::{InputDispatcher, Outcome, TerminationSignal};
use tui_typing::types::{BACKSPACE_BYTE, PHRASES};

/// Feed a pseudo-random mix of characters and backspaces, tracking the
/// expected mistake count independently.
#[test]
fn test_mistakes_count_first_placement_only() {
    let target = "Practice makes perfect";
    let bytes = target.as_bytes();

    for seed in 1..50 {
        let mut rng = SimpleRng::new(seed);
        let mut round = RoundState::new(target, Instant::now());
        let mut expected = 0u32;
        let mut len = 0usize;

        while !round.is_complete() {
            let before = round.mistake_count();
            if rng.next_range(4) == 0 {
                round.backspace();
                len = len.saturating_sub(1);
                assert_eq!(round.mistake_count(), before, "backspace changed mistakes");
            } else {
                let c = if rng.next_range(3) == 0 { b'#' } else { bytes[len] };
                if c != bytes[len] {
                    expected += 1;
                }
                round.append_char(c);
                len += 1;
            }
            assert_eq!(round.typed().len(), len);
            assert!(round.mistake_count() >= before);
        }

        assert_eq!(round.mistake_count(), expected, "seed {seed}");
    }
}

#[test]
fn test_append_is_noop_at_completion_boundary() {
    let mut round = RoundState::new("ab", Instant::now());
    round.append_char(b'a');
    round.append_char(b'x');
    assert!(round.is_complete());

    for c in [b'a', b'b', b'z'] {
        assert!(!round.append_char(c));
    }
    assert_eq!(round.typed(), b"ax");
    assert_eq!(round.mistake_count(), 1);
}

#[test]
fn test_accuracy_extremes_for_every_phrase() {
    for phrase in PHRASES {
        let mut perfect = RoundState::new(phrase, Instant::now());
        for &b in phrase.as_bytes() {
            perfect.append_char(b);
        }
        assert_eq!(perfect.compute_stats().accuracy_percent, 100.0);

        let mut wrong = RoundState::new(phrase, Instant::now());
        for &b in phrase.as_bytes() {
            wrong.append_char(b.wrapping_add(1));
        }
        assert_eq!(wrong.compute_stats().accuracy_percent, 0.0);
    }
}

#[test]
fn test_rounds_advance_with_fresh_state() {
    let signal = TerminationSignal::new();
    let start = Instant::now();
    let mut d = InputDispatcher::new(PhrasePicker::new(17), signal, start);

    for i in 0..5u64 {
        let now = start + Duration::from_secs(i * 10);
        let target = d.round().target().to_vec();

        // Type one wrong char, erase it, then type the phrase.
        d.handle_byte(0x01, now);
        d.handle_byte(BACKSPACE_BYTE, now);
        let mut last = Outcome::Typed;
        for &b in &target {
            last = d.handle_byte(b, now + Duration::from_secs(3));
        }

        match last {
            Outcome::Completed(stats) => {
                let len = target.len() as f64;
                let expected = 100.0 * (len - 1.0) / len;
                assert!((stats.accuracy_percent - expected).abs() < 1e-9);
            }
            other => panic!("round {i} did not complete: {other:?}"),
        }

        assert_eq!(d.round().mistake_count(), 0);
        assert!(d.round().typed().is_empty());
        assert!(PHRASES.iter().any(|p| p.as_bytes() == d.round().target()));

        assert_eq!(d.handle_byte(b' ', now), Outcome::Dismissed);
    }
}
