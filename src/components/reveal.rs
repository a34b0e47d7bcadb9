//! Reveal wrapper - fades its children in the first time they scroll into
//! view, then leaves them alone.

use dioxus::prelude::*;

use crate::context::use_config;
use crate::hooks::use_reveal;

#[derive(Props, Clone, PartialEq)]
pub struct RevealProps {
    pub children: Element,
    /// Extra classes for the wrapper
    #[props(default)]
    pub class: Option<String>,
    /// Visible fraction required; defaults to the configured threshold
    #[props(default)]
    pub threshold: Option<f64>,
    /// Stagger for items in a grid
    #[props(default = 0)]
    pub delay_ms: u32,
}

#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let config = use_config();
    let (id, visible) = use_reveal(props.threshold.unwrap_or(config.reveal_threshold));

    let mut class = String::from("reveal");
    if visible() {
        class.push_str(" visible");
    }
    if let Some(extra) = props.class.as_deref() {
        class.push(' ');
        class.push_str(extra);
    }
    let style = if props.delay_ms > 0 {
        format!("transition-delay: {}ms;", props.delay_ms)
    } else {
        String::new()
    };

    rsx! {
        div {
            id: "{id}",
            class: "{class}",
            style: "{style}",
            {props.children}
        }
    }
}
