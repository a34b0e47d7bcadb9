//! Radar chart of skill levels, drawn as inline SVG.

use dioxus::prelude::*;
use portfolio_core::catalog::SkillFilter;
use portfolio_core::chart::{skills_radar, svg_points, tick_color, CENTRE_CAPTION};

use crate::theme::colors::{INK_MUTED, RADAR_GRID, RADAR_LABEL};

#[component]
pub fn SkillRadar(filter: SkillFilter) -> Element {
    let chart = skills_radar(filter);
    let size = chart.size;
    let center = chart.center();
    let (cx, cy) = (center.x, center.y);

    let rings: Vec<String> = chart.rings().iter().map(|ring| svg_points(ring)).collect();
    let spokes: Vec<(String, String)> = chart
        .spokes()
        .iter()
        .map(|end| (format!("{:.2}", end.x), format!("{:.2}", end.y)))
        .collect();
    let labels: Vec<(String, String, String, &'static str)> = chart
        .label_anchors()
        .into_iter()
        .map(|l| (l.text, format!("{:.2}", l.at.x), format!("{:.2}", l.at.y), l.anchor))
        .collect();
    let polygons: Vec<(String, String, String)> = chart
        .series
        .iter()
        .map(|s| (svg_points(&chart.polygon(s)), s.stroke.clone(), s.fill.clone()))
        .collect();
    // Value labels sit just outside each vertex of the first series.
    let values: Vec<(String, String, f64)> = chart
        .series
        .first()
        .map(|s| {
            s.values
                .iter()
                .enumerate()
                .map(|(axis, value)| {
                    let at = chart.value_point(axis, *value + 8.0);
                    (format!("{:.2}", at.x), format!("{:.2}", at.y), *value)
                })
                .collect()
        })
        .unwrap_or_default();
    let caption = chart.shows_caption();

    rsx! {
        div { class: "radar-card",
            h3 { "Skill Overview: {filter.label()}" }
            svg {
                class: "radar-chart",
                view_box: "0 0 {size} {size}",
                role: "img",
                "aria-label": "Radar chart of {filter.label()} skill levels",

                for (i, ring) in rings.iter().enumerate() {
                    polygon {
                        key: "ring-{i}",
                        points: "{ring}",
                        fill: "none",
                        stroke: RADAR_GRID,
                        stroke_width: "1",
                    }
                }
                for (i, (x2, y2)) in spokes.iter().enumerate() {
                    line {
                        key: "spoke-{i}",
                        x1: "{cx}",
                        y1: "{cy}",
                        x2: "{x2}",
                        y2: "{y2}",
                        stroke: RADAR_GRID,
                        stroke_width: "1",
                    }
                }
                for (i, (points, stroke, fill)) in polygons.iter().enumerate() {
                    polygon {
                        key: "series-{i}",
                        points: "{points}",
                        fill: "{fill}",
                        stroke: "{stroke}",
                        stroke_width: "2",
                    }
                }
                for (i, (x, y, value)) in values.iter().enumerate() {
                    text {
                        key: "value-{i}",
                        x: "{x}",
                        y: "{y}",
                        fill: tick_color(*value),
                        font_size: "11",
                        font_weight: "600",
                        text_anchor: "middle",
                        "{value}"
                    }
                }
                for (label, x, y, anchor) in labels.iter() {
                    text {
                        key: "{label}",
                        x: "{x}",
                        y: "{y}",
                        text_anchor: *anchor,
                        dominant_baseline: "middle",
                        fill: RADAR_LABEL,
                        font_size: "13",
                        "{label}"
                    }
                }
                if caption {
                    text {
                        class: "radar-caption",
                        fill: INK_MUTED,
                        x: "{cx}",
                        y: "{cy}",
                        text_anchor: "middle",
                        dominant_baseline: "middle",
                        "{CENTRE_CAPTION}"
                    }
                }
            }
        }
    }
}
