//! Section Heading Component
//!
//! Centred title with an accent underline and an optional lede.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct SectionHeadingProps {
    /// Plain part of the title
    pub title: String,
    /// Trailing part rendered in the accent gradient
    #[props(default)]
    pub highlight: Option<String>,
    #[props(default)]
    pub subtitle: Option<String>,
}

#[component]
pub fn SectionHeading(props: SectionHeadingProps) -> Element {
    rsx! {
        header { class: "section-heading",
            h2 { class: "section-title",
                "{props.title}"
                if let Some(highlight) = &props.highlight {
                    " "
                    span { class: "text-gradient", "{highlight}" }
                }
            }
            div { class: "section-underline" }
            if let Some(subtitle) = &props.subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}
