//! Radar chart geometry for the skills section.
//!
//! ```text
//!              axis 0
//!                |
//!      axis n-1  |  axis 1        rings at step, 2*step, .., max
//!           \    |    /
//!            \   |   /            values map linearly from the centre
//!             \  |  /             (0) to the outer ring (max)
//!              (cx,cy)
//! ```
//!
//! Everything is computed in a square viewbox of side `size`, so the UI can
//! drop the numbers straight into SVG attributes.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::catalog::{skills_in, SkillCategory, SkillFilter};

/// Caption drawn in the centre of crowded charts.
pub const CENTRE_CAPTION: &str = "Skill Levels";

const CAPTION_MIN_AXES: usize = 5;

/// Colour for a tick or value label.
pub fn tick_color(value: f64) -> &'static str {
    if value >= 80.0 {
        "#10B981"
    } else if value >= 60.0 {
        "#F59E0B"
    } else {
        "#EF4444"
    }
}

/// One polygon on the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    pub name: String,
    /// One value per axis; missing values plot as zero
    pub values: Vec<f64>,
    pub stroke: String,
    pub fill: String,
}

impl RadarSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            stroke: "rgba(20, 184, 166, 1)".to_string(),
            fill: "rgba(20, 184, 166, 0.2)".to_string(),
        }
    }
}

/// A point in viewbox coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Where and how to place an axis label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelAnchor {
    pub text: String,
    pub at: Point,
    /// SVG `text-anchor`
    pub anchor: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarChart {
    pub labels: Vec<String>,
    pub series: Vec<RadarSeries>,
    pub max: f64,
    pub step: f64,
    /// Side of the square viewbox
    pub size: f64,
}

impl RadarChart {
    pub fn new(labels: Vec<String>, series: Vec<RadarSeries>) -> Self {
        Self {
            labels,
            series,
            max: 100.0,
            step: 20.0,
            size: 400.0,
        }
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.size / 2.0,
            y: self.size / 2.0,
        }
    }

    /// Radius of the outer ring. Leaves a margin for labels.
    pub fn radius(&self) -> f64 {
        self.size * 0.35
    }

    pub fn axis_count(&self) -> usize {
        self.labels.len()
    }

    fn angle(&self, axis: usize) -> f64 {
        let n = self.axis_count().max(1) as f64;
        -FRAC_PI_2 + TAU * axis as f64 / n
    }

    fn polar(&self, axis: usize, distance: f64) -> Point {
        let c = self.center();
        let angle = self.angle(axis);
        Point {
            x: c.x + distance * angle.cos(),
            y: c.y + distance * angle.sin(),
        }
    }

    /// Position of `value` on `axis`. Values are clamped to `[0, max]`.
    pub fn value_point(&self, axis: usize, value: f64) -> Point {
        let ratio = if self.max > 0.0 {
            (value / self.max).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.polar(axis, self.radius() * ratio)
    }

    /// Ring values from `step` to `max` inclusive.
    pub fn ring_values(&self) -> Vec<f64> {
        if self.step <= 0.0 {
            return vec![self.max];
        }
        let count = (self.max / self.step).ceil() as usize;
        (1..=count)
            .map(|i| (i as f64 * self.step).min(self.max))
            .collect()
    }

    /// Polygon outline of each grid ring.
    pub fn rings(&self) -> Vec<Vec<Point>> {
        self.ring_values()
            .into_iter()
            .map(|v| (0..self.axis_count()).map(|i| self.value_point(i, v)).collect())
            .collect()
    }

    /// Outer end of each spoke.
    pub fn spokes(&self) -> Vec<Point> {
        (0..self.axis_count())
            .map(|i| self.polar(i, self.radius()))
            .collect()
    }

    /// Polygon for one series, one vertex per axis.
    pub fn polygon(&self, series: &RadarSeries) -> Vec<Point> {
        (0..self.axis_count())
            .map(|i| self.value_point(i, series.values.get(i).copied().unwrap_or(0.0)))
            .collect()
    }

    pub fn label_anchors(&self) -> Vec<LabelAnchor> {
        let distance = self.radius() + 24.0;
        self.labels
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let cos = self.angle(i).cos();
                let anchor = if cos > 0.1 {
                    "start"
                } else if cos < -0.1 {
                    "end"
                } else {
                    "middle"
                };
                LabelAnchor {
                    text: text.clone(),
                    at: self.polar(i, distance),
                    anchor,
                }
            })
            .collect()
    }

    pub fn shows_caption(&self) -> bool {
        self.axis_count() > CAPTION_MIN_AXES
    }
}

/// Format points for an SVG `points` attribute.
pub fn svg_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The chart for a skills filter.
///
/// "All" plots the mean level of each category; a single category plots its
/// individual skills.
pub fn skills_radar(filter: SkillFilter) -> RadarChart {
    let (labels, values): (Vec<String>, Vec<f64>) = match filter {
        SkillFilter::All => SkillCategory::all()
            .iter()
            .map(|category| {
                let levels: Vec<f64> = skills_in(*category).map(|s| f64::from(s.level)).collect();
                let mean = if levels.is_empty() {
                    0.0
                } else {
                    levels.iter().sum::<f64>() / levels.len() as f64
                };
                (category.label().to_string(), mean.round())
            })
            .unzip(),
        SkillFilter::Only(category) => skills_in(category)
            .map(|s| (s.name.to_string(), f64::from(s.level)))
            .unzip(),
    };
    RadarChart::new(labels, vec![RadarSeries::new("Skill Level", values)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn tick_colors() {
        assert_eq!(tick_color(80.0), "#10B981");
        assert_eq!(tick_color(79.0), "#F59E0B");
        assert_eq!(tick_color(60.0), "#F59E0B");
        assert_eq!(tick_color(59.9), "#EF4444");
    }

    #[test]
    fn first_axis_points_up() {
        let chart = RadarChart::new(
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            Vec::new(),
        );
        let p = chart.value_point(0, 100.0);
        assert!(close(p.x, 200.0));
        assert!(close(p.y, 200.0 - chart.radius()));
        let zero = chart.value_point(2, 0.0);
        assert!(close(zero.x, 200.0) && close(zero.y, 200.0));
    }

    #[test]
    fn values_are_clamped() {
        let chart = RadarChart::new(vec!["a".into()], Vec::new());
        assert_eq!(chart.value_point(0, 250.0), chart.value_point(0, 100.0));
        assert_eq!(chart.value_point(0, -5.0), chart.center());
    }

    #[test]
    fn rings_follow_step() {
        let chart = RadarChart::new(vec!["a".into(), "b".into(), "c".into()], Vec::new());
        assert_eq!(chart.ring_values(), vec![20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(chart.rings().len(), 5);
        assert!(chart.rings().iter().all(|r| r.len() == 3));
    }

    #[test]
    fn caption_needs_more_than_five_axes() {
        assert!(!skills_radar(SkillFilter::All).shows_caption());
        assert!(skills_radar(SkillFilter::Only(SkillCategory::Frontend)).shows_caption());
    }

    #[test]
    fn all_filter_plots_category_means() {
        let chart = skills_radar(SkillFilter::All);
        assert_eq!(chart.labels, vec!["Frontend", "Backend", "Database", "Tools"]);
        // backend: (85 + 80 + 70 + 60) / 4 = 73.75
        assert_eq!(chart.series[0].values[1], 74.0);
    }

    #[test]
    fn svg_points_format() {
        let pts = [Point { x: 1.0, y: 2.5 }, Point { x: 3.0, y: 4.0 }];
        assert_eq!(svg_points(&pts), "1.00,2.50 3.00,4.00");
    }
}
