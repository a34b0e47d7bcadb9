//! Progress Bar Component
//!
//! Horizontal meter for skill levels and course progress.

use dioxus::prelude::*;

/// Width style for a percentage, clamped to 0–100.
pub fn fill_width(percent: u8) -> String {
    format!("width: {}%;", percent.min(100))
}

/// Properties for the ProgressBar component
#[derive(Clone, PartialEq, Props)]
pub struct ProgressBarProps {
    /// Fill, in percent
    pub percent: u8,
    /// Fill colour; defaults to the stylesheet accent
    #[props(default)]
    pub color: Option<String>,
    /// Caption on the left
    #[props(default)]
    pub label: Option<String>,
    /// Show "NN%" on the right
    #[props(default = true)]
    pub show_value: bool,
    #[props(default = false)]
    pub compact: bool,
}

#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let percent = props.percent.min(100);
    let mut fill_style = fill_width(percent);
    if let Some(color) = &props.color {
        fill_style.push_str(&format!(" background: {};", color));
    }

    rsx! {
        div {
            class: if props.compact { "progress progress-compact" } else { "progress" },
            if props.label.is_some() || props.show_value {
                div { class: "progress-caption",
                    if let Some(label) = &props.label {
                        span { class: "progress-label", "{label}" }
                    }
                    if props.show_value {
                        span { class: "progress-value", "{percent}%" }
                    }
                }
            }
            div {
                class: "progress-track",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{percent}",
                div { class: "progress-fill", style: "{fill_style}" }
            }
        }
    }
}
