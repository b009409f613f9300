//! Cyclic typewriter state over the fixed hero sentence list.
//!
//! The machine is deterministic: each [`TypewriterState::step`] moves one
//! character and reports which delay class precedes the following step. The
//! component maps those classes to (jittered) milliseconds; keeping the
//! randomness out of the machine is what makes the cycle testable.
//!
//! The step that types the final character flips the direction and asks for
//! the long hold; the step that erases the last character advances the
//! sentence (wrapping) and asks for the short hold. So a sentence of length
//! L takes exactly L typing steps and L erasing steps per cycle.

/// Base/jitter milliseconds per delay class (`base + random * jitter`).
pub const TYPE_BASE_MS: u32 = 80;
pub const TYPE_JITTER_MS: u32 = 40;
pub const ERASE_BASE_MS: u32 = 50;
pub const ERASE_JITTER_MS: u32 = 30;
/// Hold on a fully typed sentence before erasing starts.
pub const FULL_HOLD_MS: u32 = 2_000;
/// Hold on the empty line before the next sentence starts typing.
pub const SENTENCE_HOLD_MS: u32 = 500;
/// Delay between mount and the very first typed character.
pub const START_DELAY_MS: u32 = 2_500;

/// Delay class preceding the next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDelay {
    /// Next character reveal.
    Type,
    /// Sentence fully typed; hold before erasing.
    FullHold,
    /// Next character removal.
    Erase,
    /// Line emptied and sentence advanced; hold before retyping.
    SentenceHold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Typing,
    Erasing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterState {
    sentence: usize,
    chars: usize,
    dir: Direction,
}

impl TypewriterState {
    pub fn new() -> Self {
        Self {
            sentence: 0,
            chars: 0,
            dir: Direction::Typing,
        }
    }

    pub fn direction(&self) -> Direction {
        self.dir
    }

    pub fn sentence_index(&self) -> usize {
        self.sentence
    }

    /// Currently visible prefix of the active sentence. Character-based, so
    /// multi-byte text never splits mid-codepoint.
    pub fn visible<'a>(&self, sentences: &[&'a str]) -> &'a str {
        let Some(sentence) = sentences.get(self.sentence % sentences.len().max(1)) else {
            return "";
        };
        match sentence.char_indices().nth(self.chars) {
            Some((byte, _)) => &sentence[..byte],
            None => sentence,
        }
    }

    /// Advances one animation step and reports the delay class that should
    /// precede the step after it.
    pub fn step(&mut self, sentences: &[&str]) -> StepDelay {
        if sentences.is_empty() {
            return StepDelay::SentenceHold;
        }
        let len = sentences[self.sentence % sentences.len()].chars().count();
        match self.dir {
            Direction::Typing => {
                self.chars += 1;
                if self.chars >= len {
                    self.chars = len;
                    self.dir = Direction::Erasing;
                    StepDelay::FullHold
                } else {
                    StepDelay::Type
                }
            }
            Direction::Erasing => {
                self.chars = self.chars.saturating_sub(1);
                if self.chars == 0 {
                    self.sentence = (self.sentence + 1) % sentences.len();
                    self.dir = Direction::Typing;
                    StepDelay::SentenceHold
                } else {
                    StepDelay::Erase
                }
            }
        }
    }
}

impl Default for TypewriterState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTENCES: &[&str] = &["alpha beta", "second one here", "x"];

    #[test]
    fn types_one_character_per_step() {
        let mut tw = TypewriterState::new();
        assert_eq!(tw.visible(SENTENCES), "");
        assert_eq!(tw.step(SENTENCES), StepDelay::Type);
        assert_eq!(tw.visible(SENTENCES), "a");
        assert_eq!(tw.step(SENTENCES), StepDelay::Type);
        assert_eq!(tw.visible(SENTENCES), "al");
    }

    #[test]
    fn full_sentence_flips_to_erasing_with_long_hold() {
        let mut tw = TypewriterState::new();
        let len = SENTENCES[0].chars().count();
        for _ in 0..len - 1 {
            assert_eq!(tw.step(SENTENCES), StepDelay::Type);
        }
        assert_eq!(tw.step(SENTENCES), StepDelay::FullHold);
        assert_eq!(tw.visible(SENTENCES), SENTENCES[0]);
        assert_eq!(tw.direction(), Direction::Erasing);
    }

    #[test]
    fn l_typing_plus_l_erasing_steps_advance_exactly_one_sentence() {
        let mut tw = TypewriterState::new();
        let len = SENTENCES[0].chars().count();
        for _ in 0..len {
            tw.step(SENTENCES);
        }
        for _ in 0..len - 1 {
            assert_eq!(tw.step(SENTENCES), StepDelay::Erase);
        }
        assert_eq!(tw.step(SENTENCES), StepDelay::SentenceHold);
        assert_eq!(tw.visible(SENTENCES), "");
        assert_eq!(tw.sentence_index(), 1);
        assert_eq!(tw.direction(), Direction::Typing);
    }

    #[test]
    fn wraps_to_first_sentence_after_the_last() {
        let mut tw = TypewriterState::new();
        for sentence in SENTENCES {
            for _ in 0..2 * sentence.chars().count() {
                tw.step(SENTENCES);
            }
        }
        assert_eq!(tw.sentence_index(), 0);
        assert_eq!(tw.visible(SENTENCES), "");
    }

    #[test]
    fn single_character_sentence_cycles_in_two_steps() {
        let mut tw = TypewriterState::new();
        // Walk to the one-character sentence.
        for _ in 0..2 * SENTENCES[0].chars().count() {
            tw.step(SENTENCES);
        }
        for _ in 0..2 * SENTENCES[1].chars().count() {
            tw.step(SENTENCES);
        }
        assert_eq!(tw.sentence_index(), 2);
        assert_eq!(tw.step(SENTENCES), StepDelay::FullHold);
        assert_eq!(tw.visible(SENTENCES), "x");
        assert_eq!(tw.step(SENTENCES), StepDelay::SentenceHold);
        assert_eq!(tw.sentence_index(), 0);
    }

    #[test]
    fn multibyte_text_splits_on_character_boundaries() {
        let sentences: &[&str] = &["héllo"];
        let mut tw = TypewriterState::new();
        tw.step(sentences);
        assert_eq!(tw.visible(sentences), "h");
        tw.step(sentences);
        assert_eq!(tw.visible(sentences), "hé");
        tw.step(sentences);
        assert_eq!(tw.visible(sentences), "hél");
    }

    #[test]
    fn visible_is_always_a_prefix() {
        let mut tw = TypewriterState::new();
        for _ in 0..200 {
            tw.step(SENTENCES);
            let shown = tw.visible(SENTENCES);
            assert!(SENTENCES[tw.sentence_index()].starts_with(shown));
        }
    }

    #[test]
    fn empty_sentence_list_is_inert() {
        let mut tw = TypewriterState::new();
        assert_eq!(tw.step(&[]), StepDelay::SentenceHold);
        assert_eq!(tw.visible(&[]), "");
    }
}
