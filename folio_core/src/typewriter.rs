//! Typing-text hero banner.
//!
//! Reveals the animated name one character at a time, erases it faster
//! than it typed, pauses at either end, and repeats forever. The struct
//! holds no timer: [`Typewriter::tick`] performs one transition and
//! reports how long to wait before the next one.

use std::time::Duration;

/// Delay after a typing step.
pub const TYPE_TICK: Duration = Duration::from_millis(100);
/// Delay after an erasing step. Erasing reads faster than typing.
pub const ERASE_TICK: Duration = Duration::from_millis(50);
/// Pause at either end of the string before the direction flips.
pub const PHASE_PAUSE: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypewriterPhase {
    #[default]
    Typing,
    Erasing,
}

/// Cursor over the animated target string, prefixed by a fixed greeting.
#[derive(Debug, Clone)]
pub struct Typewriter {
    prefix: String,
    target: Vec<char>,
    index: usize,
    phase: TypewriterPhase,
}

impl Typewriter {
    pub fn new(prefix: impl Into<String>, target: &str) -> Self {
        Self {
            prefix: prefix.into(),
            target: target.chars().collect(),
            index: 0,
            phase: TypewriterPhase::Typing,
        }
    }

    /// Performs one transition and returns the delay until the next.
    ///
    /// Mid-string, a transition reveals or erases exactly one character.
    /// At either end the phase flips instead; the index is untouched and
    /// the long pause is returned.
    pub fn tick(&mut self) -> Duration {
        match self.phase {
            TypewriterPhase::Typing if self.index < self.target.len() => {
                self.index += 1;
                TYPE_TICK
            }
            TypewriterPhase::Erasing if self.index > 0 => {
                self.index -= 1;
                ERASE_TICK
            }
            TypewriterPhase::Typing => {
                self.phase = TypewriterPhase::Erasing;
                PHASE_PAUSE
            }
            TypewriterPhase::Erasing => {
                self.phase = TypewriterPhase::Typing;
                PHASE_PAUSE
            }
        }
    }

    /// The visible banner text: prefix plus the first `index` characters
    /// of the target.
    pub fn rendered(&self) -> String {
        let mut out = String::with_capacity(self.prefix.len() + self.index * 4);
        out.push_str(&self.prefix);
        out.extend(self.target[..self.index].iter());
        out
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let writer = Typewriter::new("Hello! I'm ", "Ada");
        assert_eq!(writer.index(), 0);
        assert_eq!(writer.phase(), TypewriterPhase::Typing);
        assert_eq!(writer.rendered(), "Hello! I'm ");
    }

    #[test]
    fn test_full_target_after_len_ticks() {
        let mut writer = Typewriter::new("Hello! I'm ", "Ada");
        for _ in 0..3 {
            assert_eq!(writer.tick(), TYPE_TICK);
        }
        assert_eq!(writer.rendered(), "Hello! I'm Ada");
        // Still typing; the flip happens on the next tick boundary.
        assert_eq!(writer.phase(), TypewriterPhase::Typing);

        assert_eq!(writer.tick(), PHASE_PAUSE);
        assert_eq!(writer.phase(), TypewriterPhase::Erasing);
        assert_eq!(writer.index(), 3);
    }

    #[test]
    fn test_erasing_is_faster() {
        let mut writer = Typewriter::new("", "hi");
        writer.tick();
        writer.tick();
        writer.tick(); // flip
        assert_eq!(writer.tick(), ERASE_TICK);
        assert_eq!(writer.rendered(), "h");
    }

    #[test]
    fn test_round_trip_returns_to_prefix() {
        let prefix = "Hello! I'm ";
        let target = "Ada Lovelace";
        let mut writer = Typewriter::new(prefix, target);
        let len = target.chars().count();

        for _ in 0..len {
            writer.tick();
        }
        writer.tick(); // -> Erasing
        for _ in 0..len {
            writer.tick();
        }
        writer.tick(); // -> Typing

        assert_eq!(writer.index(), 0);
        assert_eq!(writer.phase(), TypewriterPhase::Typing);
        assert_eq!(writer.rendered(), prefix);
    }

    #[test]
    fn test_index_counts_characters_not_bytes() {
        let mut writer = Typewriter::new("", "Zoë");
        writer.tick();
        writer.tick();
        writer.tick();
        assert_eq!(writer.rendered(), "Zoë");
        assert_eq!(writer.tick(), PHASE_PAUSE);
    }

    #[test]
    fn test_cycle_never_terminates() {
        let mut writer = Typewriter::new("> ", "ok");
        for _ in 0..1_000 {
            writer.tick();
            assert!(writer.index() <= 2);
        }
    }
}
