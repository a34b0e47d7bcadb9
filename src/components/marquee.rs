//! Infinite skill marquee.
//!
//! The track holds the skills twice and a per-row keyframe slides it by
//! half its width, one full list, per cycle. The cycle length comes from
//! the measured list width so every row moves at its tier's pixel speed.

use dioxus::prelude::*;
use portfolio_core::catalog::Skill;
use portfolio_core::marquee::keyframes;
use portfolio_core::{Marquee, MarqueeDirection, MarqueeSpeed};
use portfolio_ui::{LevelBadge, ProgressBar};

use crate::context::use_motion;

#[derive(Props, Clone, PartialEq)]
pub struct SkillMarqueeProps {
    /// Unique per row; names the row's keyframes
    pub scope: String,
    pub skills: Vec<Skill>,
    #[props(default)]
    pub direction: MarqueeDirection,
    #[props(default)]
    pub speed: MarqueeSpeed,
    /// Smaller cards
    #[props(default = false)]
    pub compact: bool,
}

/// Inline animation for the track, empty while the row is static or its
/// width is not yet known.
pub fn track_style<T>(marquee: &Marquee<T>, animation: &str, list_width: Option<f64>) -> String {
    if !marquee.is_animated() {
        return String::new();
    }
    match list_width.and_then(|w| marquee.duration_for(w)) {
        Some(cycle) => format!(
            "animation: {} {:.2}s linear infinite; animation-direction: {}; animation-play-state: {};",
            animation,
            cycle.as_secs_f64(),
            marquee.direction().css(),
            marquee.play_state(),
        ),
        None => String::new(),
    }
}

#[component]
pub fn SkillMarquee(props: SkillMarqueeProps) -> Element {
    let motion = use_motion();
    let reduced = *motion.reduced.peek();
    let mut row = use_signal(|| {
        Marquee::new(props.skills.clone())
            .with_direction(props.direction)
            .with_speed(props.speed)
            .with_reduced_motion(reduced)
    });
    let mut list_width = use_signal(|| None::<f64>);
    let frames = use_hook(|| keyframes(&props.scope));

    let marquee = row();
    let animated = marquee.is_animated();
    let copies = if animated { 2.0 } else { 1.0 };

    let animation = track_style(&marquee, &frames.name, list_width());
    let track: Vec<Skill> = marquee.track().copied().collect();
    let compact = props.compact;

    rsx! {
        div {
            class: if animated { "marquee" } else { "marquee static" },
            onmouseenter: move |_| row.write().hover_start(),
            onmouseleave: move |_| row.write().hover_end(),
            onfocusin: move |_| row.write().hover_start(),
            onfocusout: move |_| row.write().hover_end(),

            if animated {
                style { "{frames.css}" }
            }
            div {
                class: "marquee-track",
                style: "{animation}",
                onmounted: move |evt| async move {
                    if let Ok(rect) = evt.get_client_rect().await {
                        let width = rect.size.width / copies;
                        tracing::debug!(width, "Marquee measured");
                        list_width.set(Some(width));
                    }
                },
                for (i, skill) in track.into_iter().enumerate() {
                    SkillCard { key: "{i}", skill, compact }
                }
            }
        }
    }
}

#[component]
fn SkillCard(skill: Skill, compact: bool) -> Element {
    rsx! {
        div { class: if compact { "skill-card compact" } else { "skill-card" },
            div { class: "skill-card-head",
                span { class: "focus-dot", style: "background: {skill.color};" }
                h4 { "{skill.name}" }
            }
            ProgressBar {
                percent: skill.level,
                color: skill.color.to_string(),
                compact,
            }
            if !compact {
                LevelBadge { level: skill.level }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_follows_measured_width() {
        let marquee = Marquee::new(vec![1, 2]).with_speed(MarqueeSpeed::Slow);
        let style = track_style(&marquee, "marquee-row", Some(300.0));
        assert!(style.starts_with("animation: marquee-row 15.00s linear infinite;"));
        assert!(style.contains("animation-play-state: running;"));
    }

    #[test]
    fn hover_or_focus_pauses_the_track() {
        let mut marquee = Marquee::new(vec![1]).with_direction(MarqueeDirection::Reverse);
        marquee.hover_start();
        let style = track_style(&marquee, "marquee-row", Some(400.0));
        assert!(style.contains("animation-direction: reverse;"));
        assert!(style.contains("animation-play-state: paused;"));

        marquee.hover_end();
        let style = track_style(&marquee, "marquee-row", Some(400.0));
        assert!(style.contains("animation-play-state: running;"));
    }

    #[test]
    fn static_until_animated_and_measured() {
        let marquee = Marquee::new(vec![1]);
        assert_eq!(track_style(&marquee, "marquee-row", None), "");
        assert_eq!(track_style(&marquee, "marquee-row", Some(0.0)), "");

        let reduced = Marquee::new(vec![1]).with_reduced_motion(true);
        assert_eq!(track_style(&reduced, "marquee-row", Some(400.0)), "");
    }
}
