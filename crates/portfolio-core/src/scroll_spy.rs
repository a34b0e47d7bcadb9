//! Scroll-spy navigation state.
//!
//! The page reports a [`ScrollSample`] (scroll offset plus the viewport
//! bounding box of every tracked section) on scroll. [`ScrollSpy`] turns
//! those into the active nav section and the two scroll-depth flags the
//! chrome cares about: the nav bar's "scrolled" style and the footer's
//! back-to-top button.
//!
//! Samples arrive far faster than anyone can see; [`throttle_latest`] keeps
//! recomputation to one per interval without losing the final position.

use std::time::Duration;

use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use crate::error::{PortfolioError, PortfolioResult};

/// Tunables for scroll tracking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSpyConfig {
    /// Distance from the viewport top of the line a section must span
    pub reference_line_px: f64,
    /// Scroll offset past which the nav bar switches style
    pub scrolled_threshold_px: f64,
    /// Scroll offset past which the back-to-top button shows
    pub back_to_top_threshold_px: f64,
    /// Minimum spacing between recomputations
    pub throttle_ms: u64,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            reference_line_px: 100.0,
            scrolled_threshold_px: 20.0,
            back_to_top_threshold_px: 500.0,
            throttle_ms: 100,
        }
    }
}

impl ScrollSpyConfig {
    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}

/// Viewport-relative vertical extent of one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, bottom: f64) -> Self {
        Self {
            id: id.into(),
            top,
            bottom,
        }
    }

    /// Whether this box spans a horizontal line `line` pixels from the top.
    pub fn spans(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// One scroll observation from the page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollSample {
    pub scroll_y: f64,
    #[serde(default)]
    pub sections: Vec<SectionBounds>,
}

/// What an applied sample changed. `None` means unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpyChange {
    pub active: Option<String>,
    pub scrolled: Option<bool>,
    pub back_to_top: Option<bool>,
}

impl SpyChange {
    pub fn is_empty(&self) -> bool {
        self.active.is_none() && self.scrolled.is_none() && self.back_to_top.is_none()
    }
}

/// Tracks which of an ordered list of sections is active.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    sections: Vec<String>,
    active: usize,
    scrolled: bool,
    back_to_top: bool,
    config: ScrollSpyConfig,
}

impl ScrollSpy {
    /// Track `sections` in render order. The first one starts active.
    pub fn new<I, S>(sections: I, config: ScrollSpyConfig) -> PortfolioResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections: Vec<String> = sections.into_iter().map(Into::into).collect();
        if sections.is_empty() {
            return Err(PortfolioError::NoSections);
        }
        Ok(Self {
            sections,
            active: 0,
            scrolled: false,
            back_to_top: false,
            config,
        })
    }

    pub fn config(&self) -> &ScrollSpyConfig {
        &self.config
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn active(&self) -> &str {
        &self.sections[self.active]
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == id
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top
    }

    /// Force the active section, e.g. right after a nav link is clicked.
    pub fn set_active(&mut self, id: &str) -> PortfolioResult<()> {
        let index = self
            .position(id)
            .ok_or_else(|| PortfolioError::UnknownSection(id.to_string()))?;
        self.active = index;
        Ok(())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s == id)
    }

    /// The first tracked section, in nav order, whose box spans the
    /// reference line. Boxes for unknown ids are ignored.
    pub fn intersecting(&self, bounds: &[SectionBounds]) -> Option<&str> {
        let line = self.config.reference_line_px;
        self.sections
            .iter()
            .find(|id| bounds.iter().any(|b| &b.id == *id && b.spans(line)))
            .map(String::as_str)
    }

    /// Fold one sample into the state.
    ///
    /// When nothing spans the reference line the previous section stays
    /// active rather than flickering to none.
    pub fn apply(&mut self, sample: &ScrollSample) -> SpyChange {
        let mut change = SpyChange::default();

        if let Some(index) = self
            .intersecting(&sample.sections)
            .and_then(|id| self.position(id))
        {
            if index != self.active {
                self.active = index;
                change.active = Some(self.sections[index].clone());
            }
        }

        let scrolled = sample.scroll_y > self.config.scrolled_threshold_px;
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            change.scrolled = Some(scrolled);
        }

        let back_to_top = sample.scroll_y > self.config.back_to_top_threshold_px;
        if back_to_top != self.back_to_top {
            self.back_to_top = back_to_top;
            change.back_to_top = Some(back_to_top);
        }

        if let Some(ref id) = change.active {
            tracing::debug!(section = %id, scroll_y = sample.scroll_y, "Active section changed");
        }

        change
    }
}

/// Feed `stream` into `handle`, at most once per `interval`.
///
/// The first item of a burst is handled immediately. Later items inside
/// the window replace each other and the latest one is handled when the
/// window closes, so the last observed position is never dropped.
pub async fn throttle_latest<S, T, F>(stream: S, interval: Duration, mut handle: F)
where
    S: Stream<Item = T> + Unpin,
    F: FnMut(T),
{
    let mut stream = stream.fuse();
    let mut pending: Option<T> = None;
    let mut window_end: Option<Instant> = None;

    loop {
        match window_end {
            None => match stream.next().await {
                Some(item) => {
                    handle(item);
                    window_end = Some(Instant::now() + interval);
                }
                None => return,
            },
            Some(end) => {
                tokio::select! {
                    item = stream.next() => match item {
                        Some(item) => pending = Some(item),
                        None => {
                            if let Some(item) = pending.take() {
                                handle(item);
                            }
                            return;
                        }
                    },
                    _ = tokio::time::sleep_until(end) => match pending.take() {
                        Some(item) => {
                            handle(item);
                            window_end = Some(Instant::now() + interval);
                        }
                        None => window_end = None,
                    },
                }
            }
        }
    }
}
