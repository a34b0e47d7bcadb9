//! Tag Components
//!
//! Small rounded labels for project tags, tech names and level badges.

use dioxus::prelude::*;
use portfolio_core::catalog::level_label;

/// Tag tone variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TagTone {
    /// Pale teal
    #[default]
    Accent,
    /// Neutral grey
    Muted,
    /// Green, for finished items
    Success,
    /// Amber, for items in progress
    Warning,
}

impl TagTone {
    pub fn class(&self) -> &'static str {
        match self {
            TagTone::Accent => "tag tag-accent",
            TagTone::Muted => "tag tag-muted",
            TagTone::Success => "tag tag-success",
            TagTone::Warning => "tag tag-warning",
        }
    }

    /// Tone for a skill level badge.
    pub fn for_level(level: u8) -> Self {
        match level_label(level) {
            "Expert" => TagTone::Success,
            "Advanced" => TagTone::Accent,
            _ => TagTone::Warning,
        }
    }
}

#[component]
pub fn Tag(label: String, #[props(default)] tone: TagTone) -> Element {
    rsx! {
        span { class: tone.class(), "{label}" }
    }
}

/// Proficiency badge ("Expert", "Advanced", "Intermediate")
#[component]
pub fn LevelBadge(level: u8) -> Element {
    rsx! {
        Tag { label: level_label(level).to_string(), tone: TagTone::for_level(level) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_classes() {
        assert_eq!(TagTone::Accent.class(), "tag tag-accent");
        assert_eq!(TagTone::Warning.class(), "tag tag-warning");
        assert_eq!(TagTone::default(), TagTone::Accent);
    }

    #[test]
    fn level_tones_follow_labels() {
        assert_eq!(TagTone::for_level(90), TagTone::Success);
        assert_eq!(TagTone::for_level(75), TagTone::Accent);
        assert_eq!(TagTone::for_level(60), TagTone::Warning);
    }
}
