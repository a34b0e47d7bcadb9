//! Navbar - fixed header with scroll-spy highlighting.
//!
//! The highlighted link follows the section under the reference line;
//! the bar itself switches to a compact, opaque style once the page has
//! scrolled a little.

use dioxus::prelude::*;
use portfolio_core::catalog::{NavSection, BRAND, BRAND_SUFFIX, NAV_SECTIONS};
use portfolio_ui::IconButton;

use super::icons::{Icon, IconKind};
use crate::context::use_scroll_state;
use crate::hooks::scroll_to_section;

/// Class for a nav link given the active section id.
pub fn nav_link_class(section: &NavSection, active: &str) -> &'static str {
    if section.id == active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

#[component]
pub fn Navbar() -> Element {
    let scroll = use_scroll_state();
    let mut menu_open = use_signal(|| false);

    let active = (scroll.active)();
    let bar_class = if (scroll.scrolled)() {
        "navbar scrolled"
    } else {
        "navbar"
    };

    let menu_label = if menu_open() { "Close menu" } else { "Open menu" };

    let mut go_to = move |id: &'static str| {
        scroll.select(id);
        scroll_to_section(id);
        menu_open.set(false);
    };

    rsx! {
        nav { class: "{bar_class}",
            div { class: "container navbar-inner",
                a {
                    class: "nav-brand",
                    href: "#home",
                    onclick: move |evt| {
                        evt.prevent_default();
                        go_to("home");
                    },
                    "{BRAND}"
                    span { class: "brand-suffix", "{BRAND_SUFFIX}" }
                }

                ul { class: "nav-links",
                    for section in NAV_SECTIONS.iter() {
                        li { key: "{section.id}",
                            a {
                                class: nav_link_class(section, &active),
                                href: "{section.href()}",
                                "aria-current": if section.id == active { "page" },
                                onclick: move |evt| {
                                    evt.prevent_default();
                                    go_to(section.id);
                                },
                                "{section.label}"
                                if section.special {
                                    span { class: "sparkle", Icon { kind: IconKind::Sparkles, size: 12 } }
                                }
                            }
                        }
                    }
                }

                IconButton {
                    class: "menu-toggle".to_string(),
                    aria_label: menu_label.to_string(),
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() {
                        Icon { kind: IconKind::Close }
                    } else {
                        Icon { kind: IconKind::Menu }
                    }
                }
            }

            div { class: if menu_open() { "mobile-menu open" } else { "mobile-menu" },
                for section in NAV_SECTIONS.iter() {
                    a {
                        key: "mobile-{section.id}",
                        class: nav_link_class(section, &active),
                        href: "{section.href()}",
                        onclick: move |evt| {
                            evt.prevent_default();
                            go_to(section.id);
                        },
                        "{section.label}"
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
    fn only_active_link_is_highlighted() {
        let highlighted: Vec<_> = NAV_SECTIONS
            .iter()
            .filter(|s| nav_link_class(s, "skills") == "nav-link active")
            .map(|s| s.id)
            .collect();
        assert_eq!(highlighted, vec!["skills"]);
    }
}
