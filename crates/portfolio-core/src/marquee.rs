//! Infinite marquee rows.
//!
//! The list is rendered twice back-to-back and translated by exactly one
//! list width per cycle, so the loop point is invisible. The animation
//! itself belongs to the rendering engine, which also keeps the play-head
//! across a pause. This module decides what is rendered and how long one
//! cycle takes.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::PortfolioError;

/// Scroll speed tier, in pixels per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum MarqueeSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl MarqueeSpeed {
    pub fn px_per_sec(&self) -> f64 {
        match self {
            MarqueeSpeed::Slow => 20.0,
            MarqueeSpeed::Normal => 40.0,
            MarqueeSpeed::Fast => 60.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarqueeSpeed::Slow => "slow",
            MarqueeSpeed::Normal => "normal",
            MarqueeSpeed::Fast => "fast",
        }
    }
}

impl FromStr for MarqueeSpeed {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slow" => Ok(MarqueeSpeed::Slow),
            "normal" => Ok(MarqueeSpeed::Normal),
            "fast" => Ok(MarqueeSpeed::Fast),
            other => Err(PortfolioError::Config(format!("unknown marquee speed '{other}'"))),
        }
    }
}

impl fmt::Display for MarqueeSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way the row travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum MarqueeDirection {
    /// Right-to-left
    #[default]
    Forward,
    /// Left-to-right
    Reverse,
}

impl MarqueeDirection {
    /// Value for the CSS `animation-direction` property.
    pub fn css(&self) -> &'static str {
        match self {
            MarqueeDirection::Forward => "normal",
            MarqueeDirection::Reverse => "reverse",
        }
    }
}

/// A configured marquee over `items`.
#[derive(Debug, Clone, PartialEq)]
pub struct Marquee<T> {
    items: Vec<T>,
    direction: MarqueeDirection,
    speed: MarqueeSpeed,
    pause_on_hover: bool,
    reduced_motion: bool,
    hovered: bool,
}

impl<T> Marquee<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            direction: MarqueeDirection::default(),
            speed: MarqueeSpeed::default(),
            pause_on_hover: true,
            reduced_motion: false,
            hovered: false,
        }
    }

    pub fn with_direction(mut self, direction: MarqueeDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_speed(mut self, speed: MarqueeSpeed) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_pause_on_hover(mut self, pause: bool) -> Self {
        self.pause_on_hover = pause;
        self
    }

    /// Honour the visitor's motion-reduction preference.
    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn direction(&self) -> MarqueeDirection {
        self.direction
    }

    pub fn speed(&self) -> MarqueeSpeed {
        self.speed
    }

    /// Whether the row animates at all.
    pub fn is_animated(&self) -> bool {
        !self.reduced_motion && !self.items.is_empty()
    }

    /// The rendered sequence: the list followed by itself, or just the list
    /// once when the row is static.
    pub fn track(&self) -> impl Iterator<Item = &T> + '_ {
        let copies = if self.is_animated() { 2 } else { 1 };
        self.items.iter().cycle().take(self.items.len() * copies)
    }

    /// Pointer or keyboard focus entered the row.
    pub fn hover_start(&mut self) {
        if self.pause_on_hover {
            self.hovered = true;
        }
    }

    /// Pointer or keyboard focus left the row.
    pub fn hover_end(&mut self) {
        self.hovered = false;
    }

    pub fn is_paused(&self) -> bool {
        self.hovered
    }

    /// Value for the CSS `animation-play-state` property.
    pub fn play_state(&self) -> &'static str {
        if self.is_paused() {
            "paused"
        } else {
            "running"
        }
    }

    /// Time for one full cycle given the width of a single copy of the list.
    ///
    /// Wider content gets a longer cycle so pixel velocity stays constant.
    pub fn duration_for(&self, list_width_px: f64) -> Option<Duration> {
        cycle_duration(list_width_px, self.speed)
    }
}

/// `list_width / speed`, or `None` when there is nothing to scroll.
pub fn cycle_duration(list_width_px: f64, speed: MarqueeSpeed) -> Option<Duration> {
    if !list_width_px.is_finite() || list_width_px <= 0.0 {
        return None;
    }
    Some(Duration::from_secs_f64(list_width_px / speed.px_per_sec()))
}

/// Keyframes scoped to one marquee instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarqueeKeyframes {
    /// Animation name to reference from the track's inline style
    pub name: String,
    /// The `@keyframes` rule to emit next to the track
    pub css: String,
}

/// Build the keyframes for an instance identified by `scope`.
///
/// Each row carries its own rule, so there is no shared style sheet to
/// inject into or clean up. The track holds two copies, so -50% is exactly
/// one list width.
pub fn keyframes(scope: &str) -> MarqueeKeyframes {
    let slug: String = scope
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    let name = format!("marquee-{slug}");
    let css = format!(
        "@keyframes {name} {{ 0% {{ transform: translateX(0); }} 100% {{ transform: translateX(-50%); }} }}"
    );
    MarqueeKeyframes { name, css }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_is_list_twice() {
        let marquee = Marquee::new(vec![1, 2, 3]);
        let track: Vec<_> = marquee.track().copied().collect();
        assert_eq!(track, vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn reduced_motion_renders_once() {
        let marquee = Marquee::new(vec!["a", "b"]).with_reduced_motion(true);
        assert!(!marquee.is_animated());
        assert_eq!(marquee.track().count(), 2);
    }

    #[test]
    fn wider_content_scrolls_longer() {
        let marquee = Marquee::new(vec![()]).with_speed(MarqueeSpeed::Normal);
        assert_eq!(marquee.duration_for(400.0), Some(Duration::from_secs(10)));
        assert_eq!(marquee.duration_for(800.0), Some(Duration::from_secs(20)));
        assert_eq!(marquee.duration_for(0.0), None);
    }

    #[test]
    fn speed_tiers() {
        assert_eq!(MarqueeSpeed::Slow.px_per_sec(), 20.0);
        assert_eq!(MarqueeSpeed::Fast.px_per_sec(), 60.0);
        assert_eq!("fast".parse::<MarqueeSpeed>().unwrap(), MarqueeSpeed::Fast);
        assert!("warp".parse::<MarqueeSpeed>().is_err());
    }

    #[test]
    fn hover_pauses_only_when_enabled() {
        let mut marquee = Marquee::new(vec![1]);
        marquee.hover_start();
        assert_eq!(marquee.play_state(), "paused");
        marquee.hover_end();
        assert_eq!(marquee.play_state(), "running");

        let mut fixed = Marquee::new(vec![1]).with_pause_on_hover(false);
        fixed.hover_start();
        assert!(!fixed.is_paused());
    }

    #[test]
    fn keyframes_are_scoped() {
        let a = keyframes("Skills Row 1");
        let b = keyframes("skills-row-2");
        assert_eq!(a.name, "marquee-skills-row-1");
        assert_ne!(a.name, b.name);
        assert!(a.css.contains("translateX(-50%)"));
    }
}
