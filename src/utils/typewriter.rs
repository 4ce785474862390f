//! Tagline reveal as an explicit state machine. The timer loop in
//! `effects::typewriter` only calls `start` and `tick`; everything about the
//! progression itself can be stepped here without a clock.

/// Progress of the reveal. `Revealing(n)` means the first `n` characters are
/// on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Revealing(usize),
    Done,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    text: Vec<char>,
    phase: Phase,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Begin revealing. Clears the visible text; empty input is immediately
    /// done. Starting twice is a no-op.
    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = if self.text.is_empty() {
                Phase::Done
            } else {
                Phase::Revealing(0)
            };
        }
    }

    /// Reveal one more character. Does nothing before `start` or after the
    /// last character.
    pub fn tick(&mut self) {
        if let Phase::Revealing(shown) = self.phase {
            let shown = shown + 1;
            self.phase = if shown >= self.text.len() {
                Phase::Done
            } else {
                Phase::Revealing(shown)
            };
        }
    }

    /// Text currently on screen. Before `start` this is the full tagline, so
    /// the page never renders blank while the start delay runs.
    pub fn revealed(&self) -> String {
        match self.phase {
            Phase::Idle => self.text.iter().collect(),
            Phase::Revealing(shown) => self.text.iter().take(shown).collect(),
            Phase::Done => self.text.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_shows_full_text() {
        let tw = Typewriter::new("abc");
        assert_eq!(tw.phase(), Phase::Idle);
        assert_eq!(tw.revealed(), "abc");
    }

    #[test]
    fn reveals_one_character_per_tick() {
        let mut tw = Typewriter::new("abc");
        tw.start();
        assert_eq!(tw.phase(), Phase::Revealing(0));
        assert_eq!(tw.revealed(), "");

        tw.tick();
        assert_eq!(tw.revealed(), "a");
        tw.tick();
        assert_eq!(tw.revealed(), "ab");
        tw.tick();
        assert_eq!(tw.phase(), Phase::Done);
        assert_eq!(tw.revealed(), "abc");
    }

    #[test]
    fn ticks_after_done_change_nothing() {
        let mut tw = Typewriter::new("a");
        tw.start();
        tw.tick();
        tw.tick();
        assert_eq!(tw.phase(), Phase::Done);
        assert_eq!(tw.revealed(), "a");
    }

    #[test]
    fn tick_before_start_is_a_no_op() {
        let mut tw = Typewriter::new("abc");
        tw.tick();
        assert_eq!(tw.phase(), Phase::Idle);
    }

    #[test]
    fn empty_text_finishes_immediately() {
        let mut tw = Typewriter::new("");
        tw.start();
        assert!(tw.is_done());
        assert_eq!(tw.revealed(), "");
    }

    #[test]
    fn multibyte_text_is_revealed_by_character() {
        let mut tw = Typewriter::new("héllo");
        tw.start();
        tw.tick();
        tw.tick();
        assert_eq!(tw.revealed(), "hé");
    }
}
