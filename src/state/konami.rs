use std::collections::VecDeque;

/// The classic code, as `KeyboardEvent.code` values.
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

/// Sliding window over the most recent key codes. Reports a match exactly
/// once, then resets so the egg can be triggered again from scratch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KonamiState {
    recent: VecDeque<String>,
}

impl KonamiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, code: &str) -> bool {
        self.recent.push_back(code.to_owned());
        if self.recent.len() > KONAMI_SEQUENCE.len() {
            self.recent.pop_front();
        }
        let matched = self.recent.len() == KONAMI_SEQUENCE.len()
            && self.recent.iter().zip(KONAMI_SEQUENCE.iter()).all(|(a, b)| a == b);
        if matched {
            self.recent.clear();
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(state: &mut KonamiState, codes: &[&str]) -> usize {
        codes.iter().filter(|c| state.observe(c)).count()
    }

    #[test]
    fn exact_sequence_matches_once() {
        let mut s = KonamiState::new();
        assert_eq!(feed(&mut s, &KONAMI_SEQUENCE), 1);
    }

    #[test]
    fn matches_after_leading_noise() {
        let mut s = KonamiState::new();
        assert_eq!(feed(&mut s, &["KeyQ", "Space", "Enter"]), 0);
        assert_eq!(feed(&mut s, &KONAMI_SEQUENCE), 1);
    }

    #[test]
    fn partial_or_broken_sequence_does_not_match() {
        let mut s = KonamiState::new();
        assert_eq!(feed(&mut s, &KONAMI_SEQUENCE[..9]), 0);
        // wrong final key breaks the run
        assert!(!s.observe("KeyC"));
    }

    #[test]
    fn resets_after_match_and_can_fire_again() {
        let mut s = KonamiState::new();
        assert_eq!(feed(&mut s, &KONAMI_SEQUENCE), 1);
        // immediately retyping only the tail must not fire
        assert_eq!(feed(&mut s, &KONAMI_SEQUENCE[8..]), 0);
        assert_eq!(feed(&mut s, &KONAMI_SEQUENCE), 1);
    }
}
