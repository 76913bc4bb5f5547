use std::time::Duration;

pub const START_DELAY: Duration = Duration::from_millis(1_000);
pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
pub const HOLD_DELAY: Duration = Duration::from_millis(2_000);
pub const NEXT_PHRASE_DELAY: Duration = Duration::from_millis(500);

pub const HERO_PHRASES: &[&str] = &[
    "Full Stack Developer",
    "UI/UX Designer",
    "Web Developer",
    "Problem Solver",
    "Creative Thinker",
];

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub next_delay: Duration,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            phrases: phrases
                .into_iter()
                .map(|phrase| phrase.as_ref().chars().collect())
                .collect(),
            phrase_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    pub fn hero() -> Self {
        Self::new(HERO_PHRASES.iter().copied())
    }

    /// Returns `None` when there is nothing to type.
    pub fn tick(&mut self) -> Option<TypingFrame> {
        let phrase = self.phrases.get(self.phrase_index)?;
        if phrase.is_empty() && self.phrases.iter().all(Vec::is_empty) {
            return None;
        }

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(phrase.len());
        }
        let text: String = phrase[..self.char_index].iter().collect();

        let next_delay = if !self.deleting && self.char_index == phrase.len() {
            self.deleting = true;
            HOLD_DELAY
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            NEXT_PHRASE_DELAY
        } else if self.deleting {
            DELETE_DELAY
        } else {
            TYPE_DELAY
        };

        Some(TypingFrame { text, next_delay })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_holds_erases_and_moves_on() {
        let mut typewriter = Typewriter::new(["ab", "c"]);

        let frames: Vec<TypingFrame> = (0..6).filter_map(|_| typewriter.tick()).collect();
        let texts: Vec<&str> = frames.iter().map(|frame| frame.text.as_str()).collect();
        let delays: Vec<Duration> = frames.iter().map(|frame| frame.next_delay).collect();

        assert_eq!(texts, ["a", "ab", "a", "", "c", ""]);
        assert_eq!(
            delays,
            [TYPE_DELAY, HOLD_DELAY, DELETE_DELAY, NEXT_PHRASE_DELAY, HOLD_DELAY, NEXT_PHRASE_DELAY]
        );
    }

    #[test]
    fn multibyte_phrases_are_split_on_characters() {
        let mut typewriter = Typewriter::new(["héé"]);
        assert_eq!(typewriter.tick().map(|frame| frame.text), Some("h".to_string()));
        assert_eq!(typewriter.tick().map(|frame| frame.text), Some("hé".to_string()));
    }

    #[test]
    fn empty_phrase_list_yields_nothing() {
        let mut typewriter = Typewriter::new(Vec::<String>::new());
        assert!(typewriter.tick().is_none());
    }

    #[test]
    fn hero_cycles_back_to_first_phrase() {
        let mut typewriter = Typewriter::hero();
        let mut completed = Vec::new();

        while completed.len() < HERO_PHRASES.len() + 1 {
            let frame = typewriter.tick().expect("hero has phrases");
            if frame.next_delay == HOLD_DELAY {
                completed.push(frame.text);
            }
        }

        assert_eq!(completed.first(), completed.last());
        assert_eq!(completed[1], "UI/UX Designer");
    }
}
