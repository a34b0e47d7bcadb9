//! Category Pills Component
//!
//! Horizontal single-choice filter. The selected pill is filled teal.

use dioxus::prelude::*;

/// One selectable pill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PillOption {
    /// Stable value passed back on selection
    pub value: String,
    /// Text shown on the pill
    pub label: String,
}

impl PillOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Class for a pill in the given selection state.
pub fn pill_class(selected: bool) -> &'static str {
    if selected {
        "pill selected"
    } else {
        "pill"
    }
}

/// Properties for the CategoryPills component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// Available options, in display order
    pub options: Vec<PillOption>,
    /// Value of the selected option
    pub selected: String,
    /// Handler called with the chosen value
    pub on_select: EventHandler<String>,
    /// Accessible name of the group
    #[props(default = "Category selection".to_string())]
    pub aria_label: String,
}

/// Displays a horizontal row of selectable category pills
///
/// # Example
///
/// ```rust,ignore
/// let mut filter = use_signal(SkillFilter::default);
///
/// rsx! {
///     CategoryPills {
///         options: SkillFilter::all()
///             .iter()
///             .map(|f| PillOption::new(f.key(), f.label()))
///             .collect(),
///         selected: filter().key().to_string(),
///         on_select: move |key: String| {
///             if let Some(f) = SkillFilter::from_key(&key) {
///                 filter.set(f);
///             }
///         }
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div {
            class: "category-pills",
            role: "radiogroup",
            "aria-label": "{props.aria_label}",
            for option in props.options.iter() {
                {
                    let value = option.value.clone();
                    let is_selected = selected == option.value;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{option.value}",
                            class: pill_class(is_selected),
                            r#type: "button",
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| {
                                tracing::debug!(category = %value, "Category selected");
                                on_select.call(value.clone());
                            },
                            "{option.label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pill_classes() {
        assert_eq!(pill_class(true), "pill selected");
        assert_eq!(pill_class(false), "pill");
    }

    #[test]
    fn option_keeps_value_and_label_apart() {
        let option = PillOption::new("frontend", "Frontend");
        assert_eq!(option.value, "frontend");
        assert_eq!(option.label, "Frontend");
    }
}
