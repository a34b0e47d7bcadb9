//! Typewriter effect for the hero headline.
//!
//! ```text
//! Typing ──(last char)──► Holding ──(hold delay)──► Deleting
//!    ▲                                                 │
//!    └──────────── (last char removed, next phrase) ───┘
//! ```
//!
//! [`Typewriter`] is the pure state machine: one [`Typewriter::step`] per
//! timer tick, with [`Typewriter::next_delay`] saying how long to wait before
//! the next one. [`TypewriterHandle`] runs it on tokio alongside an
//! independent [`CursorBlink`] and publishes frames on a watch channel.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::{PortfolioError, PortfolioResult};
use crate::timer::TimerGuard;

/// Timing constants for the typewriter, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterTiming {
    /// Delay between revealed characters
    pub type_interval_ms: u64,
    /// Delay between deleted characters
    pub delete_interval_ms: u64,
    /// Dwell time with the full phrase shown
    pub hold_delay_ms: u64,
    /// Cursor visibility toggle period
    pub blink_interval_ms: u64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_interval_ms: 60,
            delete_interval_ms: 30,
            hold_delay_ms: 1500,
            blink_interval_ms: 500,
        }
    }
}

impl TypewriterTiming {
    pub fn type_interval(&self) -> Duration {
        Duration::from_millis(self.type_interval_ms)
    }

    pub fn delete_interval(&self) -> Duration {
        Duration::from_millis(self.delete_interval_ms)
    }

    pub fn hold_delay(&self) -> Duration {
        Duration::from_millis(self.hold_delay_ms)
    }

    pub fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.blink_interval_ms)
    }
}

/// Where the typewriter is within the current phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypePhase {
    /// Revealing one character per tick
    #[default]
    Typing,
    /// Phrase fully shown, waiting out the hold delay
    Holding,
    /// Removing one character per tick
    Deleting,
}

/// Character-by-character phrase cycler.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    index: usize,
    shown: usize,
    phase: TypePhase,
    timing: TypewriterTiming,
}

impl Typewriter {
    /// Create a typewriter over an ordered, non-empty list of phrases.
    pub fn new<I, S>(phrases: I) -> PortfolioResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<Vec<char>> = phrases
            .into_iter()
            .map(|p| p.as_ref().chars().collect())
            .collect();

        if phrases.is_empty() {
            return Err(PortfolioError::EmptyPhrases);
        }

        Ok(Self {
            phrases,
            index: 0,
            shown: 0,
            phase: TypePhase::Typing,
            timing: TypewriterTiming::default(),
        })
    }

    /// Replace the timing constants.
    pub fn with_timing(mut self, timing: TypewriterTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn timing(&self) -> TypewriterTiming {
        self.timing
    }

    pub fn phase(&self) -> TypePhase {
        self.phase
    }

    /// Index of the phrase currently being typed or deleted.
    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Number of characters of the current phrase on screen.
    pub fn shown_len(&self) -> usize {
        self.shown
    }

    /// Length of the current phrase in characters.
    pub fn current_len(&self) -> usize {
        self.phrases[self.index].len()
    }

    /// The visible prefix of the current phrase.
    pub fn text(&self) -> String {
        self.phrases[self.index][..self.shown].iter().collect()
    }

    /// How long to wait before the next [`step`](Self::step).
    pub fn next_delay(&self) -> Duration {
        match self.phase {
            TypePhase::Typing => self.timing.type_interval(),
            TypePhase::Holding => self.timing.hold_delay(),
            TypePhase::Deleting => self.timing.delete_interval(),
        }
    }

    /// Apply exactly one transition.
    pub fn step(&mut self) {
        let len = self.current_len();
        match self.phase {
            TypePhase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown == len {
                    self.phase = TypePhase::Holding;
                }
            }
            TypePhase::Holding => {
                self.phase = TypePhase::Deleting;
            }
            TypePhase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = TypePhase::Typing;
                }
            }
        }
    }

    fn frame(&self, cursor_visible: bool) -> TypewriterFrame {
        TypewriterFrame {
            text: self.text(),
            phrase_index: self.index,
            phase: self.phase,
            cursor_visible,
        }
    }
}

/// Blinking cursor, independent of the typing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorBlink {
    visible: bool,
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl CursorBlink {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip visibility and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }
}

/// Snapshot published to the view on every change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypewriterFrame {
    pub text: String,
    pub phrase_index: usize,
    pub phase: TypePhase,
    pub cursor_visible: bool,
}

/// Running typewriter. Dropping it cancels both the typing and blink timers.
#[derive(Debug)]
pub struct TypewriterHandle {
    _cycle: TimerGuard,
    _blink: TimerGuard,
}

impl TypewriterHandle {
    /// Start typing on the current tokio runtime.
    ///
    /// Only one cycle timer is ever live: each tick sleeps, steps, publishes
    /// and then computes the next delay.
    pub fn spawn(
        typewriter: Typewriter,
        timing: TypewriterTiming,
    ) -> (Self, watch::Receiver<TypewriterFrame>) {
        let mut typewriter = typewriter.with_timing(timing);
        let (tx, rx) = watch::channel(typewriter.frame(true));

        let cycle_tx = tx.clone();
        let cycle = TimerGuard::spawn(async move {
            loop {
                tokio::time::sleep(typewriter.next_delay()).await;
                let previous = typewriter.phrase_index();
                typewriter.step();
                if typewriter.phrase_index() != previous {
                    tracing::trace!(phrase = typewriter.phrase_index(), "Typewriter advanced");
                }
                cycle_tx.send_modify(|frame| {
                    let cursor_visible = frame.cursor_visible;
                    *frame = typewriter.frame(cursor_visible);
                });
                if cycle_tx.is_closed() {
                    break;
                }
            }
        });

        let blink_interval = timing.blink_interval();
        let blink = TimerGuard::spawn(async move {
            let mut cursor = CursorBlink::default();
            loop {
                tokio::time::sleep(blink_interval).await;
                let visible = cursor.toggle();
                tx.send_modify(|frame| frame.cursor_visible = visible);
                if tx.is_closed() {
                    break;
                }
            }
        });

        (
            Self {
                _cycle: cycle,
                _blink: blink,
            },
            rx,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_phrase_list_is_rejected() {
        let phrases: Vec<&str> = Vec::new();
        assert!(matches!(
            Typewriter::new(phrases),
            Err(PortfolioError::EmptyPhrases)
        ));
    }

    #[test]
    fn types_holds_deletes_and_advances() {
        let mut tw = Typewriter::new(["ab", "c"]).unwrap();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.next_delay(), Duration::from_millis(60));

        tw.step();
        assert_eq!(tw.text(), "a");
        tw.step();
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.phase(), TypePhase::Holding);
        assert_eq!(tw.next_delay(), Duration::from_millis(1500));

        tw.step();
        assert_eq!(tw.phase(), TypePhase::Deleting);
        assert_eq!(tw.next_delay(), Duration::from_millis(30));

        tw.step();
        assert_eq!(tw.text(), "a");
        tw.step();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.phase(), TypePhase::Typing);
    }

    #[test]
    fn wraps_to_first_phrase() {
        let mut tw = Typewriter::new(["x"]).unwrap();
        // type, hold, delete
        for _ in 0..3 {
            tw.step();
        }
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.phase(), TypePhase::Typing);
    }

    #[test]
    fn multibyte_characters_are_revealed_whole() {
        let mut tw = Typewriter::new(["Hé 🚀"]).unwrap();
        for _ in 0..4 {
            tw.step();
        }
        assert_eq!(tw.text(), "Hé 🚀");
        assert_eq!(tw.current_len(), 4);
    }

    #[test]
    fn empty_phrase_is_skipped_through() {
        let mut tw = Typewriter::new(["", "z"]).unwrap();
        tw.step();
        assert_eq!(tw.phase(), TypePhase::Holding);
        tw.step();
        tw.step();
        assert_eq!(tw.phrase_index(), 1);
    }

    #[test]
    fn cursor_toggles() {
        let mut cursor = CursorBlink::default();
        assert!(cursor.is_visible());
        assert!(!cursor.toggle());
        assert!(cursor.toggle());
    }
}
