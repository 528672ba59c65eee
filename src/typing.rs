//! Typewriter effect over a list of phrases.
//!
//! [`TypeWriter`] types each phrase a character at a time, holds, then
//! deletes it and moves to the next, wrapping forever. Every call to
//! [`step`](TypeWriter::step) returns the text to display plus the
//! delay the host should wait before the next step, so the effect runs
//! against any timer.

use std::time::Duration;

/// Delay after typing one character.
const TYPE_DELAY: Duration = Duration::from_millis(100);
/// Delay after deleting one character.
const DELETE_DELAY: Duration = Duration::from_millis(50);
/// Hold once a phrase is fully typed, before deleting starts.
const HOLD_DELAY: Duration = Duration::from_millis(2000);
/// Pause after a phrase is fully deleted, before the next one starts.
const NEXT_PHRASE_DELAY: Duration = Duration::from_millis(500);

/// One frame of the effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeFrame<'a> {
    /// The text to display right now.
    pub text: &'a str,
    /// How long to wait before the next [`TypeWriter::step`].
    pub delay: Duration,
}

/// Cycles through phrases, typing and deleting them character by
/// character.
#[derive(Debug, Clone)]
pub struct TypeWriter {
    phrases: Vec<String>,
    phrase_index: usize,
    chars_shown: usize,
    deleting: bool,
}

impl TypeWriter {
    /// Create a typewriter over the given phrases. Phrases are cycled
    /// in order, wrapping after the last.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            phrase_index: 0,
            chars_shown: 0,
            deleting: false,
        }
    }

    /// Advance by one character (typed or deleted) and report what to
    /// display and how long to wait.
    ///
    /// With an empty phrase list the text is always empty and the delay
    /// is the next-phrase pause.
    pub fn step(&mut self) -> TypeFrame<'_> {
        if self.phrases.is_empty() {
            return TypeFrame {
                text: "",
                delay: NEXT_PHRASE_DELAY,
            };
        }

        let phrase_len = self.phrases[self.phrase_index].chars().count();
        if self.deleting {
            self.chars_shown = self.chars_shown.saturating_sub(1);
        } else {
            self.chars_shown = (self.chars_shown + 1).min(phrase_len);
        }

        let mut delay = if self.deleting {
            DELETE_DELAY
        } else {
            TYPE_DELAY
        };

        if !self.deleting && self.chars_shown == phrase_len {
            delay = HOLD_DELAY;
            self.deleting = true;
        } else if self.deleting && self.chars_shown == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            delay = NEXT_PHRASE_DELAY;
        }

        let phrase = &self.phrases[self.phrase_index];
        let end = phrase
            .char_indices()
            .nth(self.chars_shown)
            .map_or(phrase.len(), |(i, _)| i);

        TypeFrame {
            text: &phrase[..end],
            delay,
        }
    }

    /// Whether the current phrase is being deleted.
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Index of the phrase currently displayed.
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_then_holds_then_deletes() {
        let mut tw = TypeWriter::new(["ab", "xyz"]);

        let f = tw.step();
        assert_eq!(f.text, "a");
        assert_eq!(f.delay, TYPE_DELAY);

        // Second character completes the phrase: hold before deleting.
        let f = tw.step();
        assert_eq!(f.text, "ab");
        assert_eq!(f.delay, HOLD_DELAY);
        assert!(tw.is_deleting());

        let f = tw.step();
        assert_eq!(f.text, "a");
        assert_eq!(f.delay, DELETE_DELAY);

        // Deleting the last character moves on to the next phrase.
        let f = tw.step();
        assert_eq!(f.text, "");
        assert_eq!(f.delay, NEXT_PHRASE_DELAY);
        assert!(!tw.is_deleting());
        assert_eq!(tw.phrase_index(), 1);

        let f = tw.step();
        assert_eq!(f.text, "x");
    }

    #[test]
    fn test_wraps_to_first_phrase() {
        let mut tw = TypeWriter::new(["hi"]);
        // type h, type i (hold), delete i, delete h (advance)
        for _ in 0..4 {
            tw.step();
        }
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.step().text, "h");
    }

    #[test]
    fn test_multibyte_phrases() {
        let mut tw = TypeWriter::new(["héllo"]);
        assert_eq!(tw.step().text, "h");
        assert_eq!(tw.step().text, "hé");
        assert_eq!(tw.step().text, "hél");
    }

    #[test]
    fn test_empty_phrase_list() {
        let mut tw = TypeWriter::new(Vec::<String>::new());
        let f = tw.step();
        assert_eq!(f.text, "");
        assert_eq!(f.delay, NEXT_PHRASE_DELAY);
    }
}
