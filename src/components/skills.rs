//! Skills section - category filter, three marquee rows and a radar chart.

use dioxus::prelude::*;
use portfolio_core::catalog::{skill_rows, SkillFilter};
use portfolio_core::{MarqueeDirection, MarqueeSpeed};
use portfolio_ui::{CategoryPills, PillOption, SectionHeading};

use super::marquee::SkillMarquee;
use super::radar_chart::SkillRadar;
use super::reveal::Reveal;
use crate::context::use_motion;

/// Speed, direction and card size of each row, top to bottom.
const ROWS: [(MarqueeSpeed, MarqueeDirection, bool); 3] = [
    (MarqueeSpeed::Fast, MarqueeDirection::Forward, true),
    (MarqueeSpeed::Normal, MarqueeDirection::Reverse, false),
    (MarqueeSpeed::Slow, MarqueeDirection::Forward, false),
];

/// Keyframe scope for one row. Changes whenever the row must remount.
pub fn row_scope(filter: SkillFilter, row: usize, reduced: bool) -> String {
    let motion = if reduced { "still" } else { "moving" };
    format!("skills-{}-{}-{}", filter.key(), row, motion)
}

#[component]
pub fn Skills() -> Element {
    let mut filter = use_signal(SkillFilter::default);
    let motion = use_motion();

    let current = filter();
    let reduced = (motion.reduced)();
    let rows = skill_rows(current);
    let options: Vec<PillOption> = SkillFilter::all()
        .iter()
        .map(|f| PillOption::new(f.key(), f.label()))
        .collect();

    rsx! {
        section { id: "skills", class: "section section-alt",
            div { class: "container",
                SectionHeading {
                    title: "My".to_string(),
                    highlight: "Skills".to_string(),
                    subtitle: "Technologies I work with day to day".to_string(),
                }

                CategoryPills {
                    options,
                    selected: current.key().to_string(),
                    aria_label: "Skill category".to_string(),
                    on_select: move |key: String| {
                        if let Some(next) = SkillFilter::from_key(&key) {
                            filter.set(next);
                        }
                    },
                }

                Reveal {
                    for (i, (skills, (speed, direction, compact))) in rows.iter().zip(ROWS).enumerate() {
                        SkillMarquee {
                            key: "{row_scope(current, i, reduced)}",
                            scope: row_scope(current, i, reduced),
                            skills: skills.iter().map(|s| **s).collect::<Vec<_>>(),
                            speed,
                            direction,
                            compact,
                        }
                    }
                }

                Reveal { delay_ms: 150,
                    SkillRadar { filter: current }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::catalog::SkillCategory;

    #[test]
    fn row_scopes_are_distinct() {
        let a = row_scope(SkillFilter::All, 0, false);
        let b = row_scope(SkillFilter::All, 1, false);
        let c = row_scope(SkillFilter::Only(SkillCategory::Tools), 0, false);
        let d = row_scope(SkillFilter::All, 0, true);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }
}
