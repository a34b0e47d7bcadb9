//! Button Components
//!
//! - Primary: filled teal call to action
//! - Outline: bordered secondary action
//! - Ghost: text-only, used in the nav and footer
//! - Light: white fill for dark backgrounds

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled teal, the main action of a section
    #[default]
    Primary,
    /// Teal border, transparent fill
    Outline,
    /// No border or fill
    Ghost,
    /// White fill on dark or gradient backgrounds
    Light,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Light => "btn-light",
        }
    }
}

fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         button_type: "submit".to_string(),
///         disabled: !form.can_submit(),
///         "Send Message"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_class(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Properties for an anchor styled as a button
#[derive(Clone, PartialEq, Props)]
pub struct LinkButtonProps {
    /// Link target
    pub href: String,
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    /// Open in a new tab
    #[props(default = false)]
    pub external: bool,
    /// Offer the target as a download under this file name
    #[props(default)]
    pub download: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// Anchor with button styling, for in-page jumps and outbound links
#[component]
pub fn LinkButton(props: LinkButtonProps) -> Element {
    let full_class = join_class(props.variant.class(), props.class.as_deref());

    rsx! {
        a {
            class: "{full_class}",
            href: "{props.href}",
            target: if props.external { "_blank" },
            rel: if props.external { "noopener noreferrer" },
            download: props.download.clone(),
            {props.children}
        }
    }
}

/// Icon button for compact actions (menu toggle, back to top)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_class("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
        assert_eq!(ButtonVariant::Light.class(), "btn-light");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(join_class("btn-primary", None), "btn-primary");
        assert_eq!(join_class("btn-primary", Some("")), "btn-primary");
        assert_eq!(join_class("icon-btn", Some("menu-toggle")), "icon-btn menu-toggle");
    }
}
