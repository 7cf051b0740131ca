use std::time::Duration;

pub const TYPE_INTERVAL: Duration = Duration::from_millis(100);
pub const DELETE_INTERVAL: Duration = Duration::from_millis(40);
pub const PAUSE_DWELL: Duration = Duration::from_millis(1800);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
}

/// Cycles through `titles`, typing each one out, pausing, then deleting it.
///
/// Each call to [`Typewriter::tick`] performs one step and returns how long
/// the caller should wait before the next one.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    titles: Vec<String>,
    index: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        Self {
            titles,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn text(&self) -> String {
        self.current().chars().take(self.shown).collect()
    }

    fn current(&self) -> &str {
        self.titles.get(self.index).map(String::as_str).unwrap_or("")
    }

    fn current_len(&self) -> usize {
        self.current().chars().count()
    }

    pub fn tick(&mut self) -> Duration {
        if self.titles.is_empty() {
            return PAUSE_DWELL;
        }

        match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(self.current_len());
                if self.shown >= self.current_len() {
                    self.phase = Phase::Pausing;
                    PAUSE_DWELL
                } else {
                    TYPE_INTERVAL
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
                DELETE_INTERVAL
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.titles.len();
                    self.phase = Phase::Typing;
                    TYPE_INTERVAL
                } else {
                    DELETE_INTERVAL
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_advances_to_next_title_with_empty_text() {
        let mut typewriter = Typewriter::new(["Rust", "Yew"]);
        let len = "Rust".len();

        for _ in 0..len {
            typewriter.tick();
        }
        assert_eq!(typewriter.text(), "Rust");
        assert_eq!(typewriter.phase(), Phase::Pausing);

        typewriter.tick();
        assert_eq!(typewriter.phase(), Phase::Deleting);
        assert_eq!(typewriter.text(), "Rust");

        for _ in 0..len {
            typewriter.tick();
        }
        assert_eq!(typewriter.index(), 1);
        assert_eq!(typewriter.text(), "");
        assert_eq!(typewriter.phase(), Phase::Typing);
    }

    #[test]
    fn index_wraps_after_last_title() {
        let mut typewriter = Typewriter::new(["ab", "c"]);
        let ticks = (2 + 1 + 2) + (1 + 1 + 1);
        for _ in 0..ticks {
            typewriter.tick();
        }
        assert_eq!(typewriter.index(), 0);
        assert_eq!(typewriter.text(), "");
    }

    #[test]
    fn typing_is_slower_than_deleting_and_dwell_follows_full_title() {
        let mut typewriter = Typewriter::new(["abc"]);
        assert_eq!(typewriter.tick(), TYPE_INTERVAL);
        assert_eq!(typewriter.tick(), TYPE_INTERVAL);
        assert_eq!(typewriter.tick(), PAUSE_DWELL);
        assert_eq!(typewriter.tick(), DELETE_INTERVAL);
        assert_eq!(typewriter.tick(), DELETE_INTERVAL);
        assert!(TYPE_INTERVAL > DELETE_INTERVAL);
    }

    #[test]
    fn multibyte_titles_type_whole_characters() {
        let mut typewriter = Typewriter::new(["نور"]);
        typewriter.tick();
        assert_eq!(typewriter.text(), "ن");
    }

    #[test]
    fn empty_title_list_is_inert() {
        let mut typewriter = Typewriter::new(Vec::<String>::new());
        assert_eq!(typewriter.tick(), PAUSE_DWELL);
        assert_eq!(typewriter.text(), "");
    }
}
