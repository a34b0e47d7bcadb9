//! Footer - brand blurb, quick links, newsletter and back-to-top.

use chrono::Datelike;
use dioxus::prelude::*;
use portfolio_core::catalog::{BRAND, BRAND_SUFFIX, RESUME_URL, SOCIAL_LINKS};
use portfolio_ui::{Button, IconButton};

use super::icons::{Icon, IconKind};
use crate::context::use_scroll_state;
use crate::hooks::{scroll_to_section, scroll_to_top};

/// In-page quick links. The résumé link is rendered separately.
const QUICK_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

pub fn copyright_line(year: i32) -> String {
    format!("© {year} {BRAND}{BRAND_SUFFIX}. All rights reserved.")
}

#[component]
pub fn Footer() -> Element {
    let scroll = use_scroll_state();
    let mut email = use_signal(String::new);
    let year = chrono::Local::now().year();
    let top_class = if (scroll.back_to_top)() {
        "back-to-top visible"
    } else {
        "back-to-top"
    };

    rsx! {
        footer { class: "footer",
            div { class: "container footer-grid",
                div {
                    a { class: "nav-brand", href: "#home",
                        "{BRAND}"
                        span { class: "brand-suffix", "{BRAND_SUFFIX}" }
                    }
                    p {
                        "Building thoughtful, performant web experiences. "
                        "Always happy to talk about a new project or idea."
                    }
                    div { class: "social-links",
                        for link in SOCIAL_LINKS.iter() {
                            a {
                                key: "{link.name}",
                                href: link.href,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "aria-label": "{link.name}",
                                Icon { kind: IconKind::from(link.kind), size: 18 }
                            }
                        }
                    }
                }

                div {
                    h4 { "Quick Links" }
                    ul { class: "footer-links",
                        for (id, label) in QUICK_LINKS.iter().copied() {
                            li { key: "{id}",
                                a {
                                    href: "#{id}",
                                    onclick: move |evt| {
                                        evt.prevent_default();
                                        scroll.select(id);
                                        scroll_to_section(id);
                                    },
                                    "{label}"
                                }
                            }
                        }
                        li {
                            a { href: RESUME_URL, target: "_blank", rel: "noopener noreferrer", "Resume" }
                        }
                    }
                }

                div { class: "newsletter",
                    h4 { "Stay Updated" }
                    p { "Subscribe to my newsletter for the latest articles, tutorials, and project updates." }
                    form {
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            tracing::debug!("Newsletter signup is not wired to a backend");
                            email.set(String::new());
                        },
                        input {
                            class: "input-field",
                            r#type: "email",
                            placeholder: "Your email address",
                            "aria-label": "Email address",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                        Button { button_type: "submit".to_string(), "Subscribe" }
                    }
                    small { "No spam, unsubscribe at any time." }
                }
            }

            div { class: "container footer-bottom",
                p { "{copyright_line(year)}" }
                p {
                    "Made with "
                    Icon { kind: IconKind::Heart, size: 14 }
                    " and "
                    Icon { kind: IconKind::Code, size: 14 }
                }
            }

            IconButton {
                class: top_class.to_string(),
                aria_label: "Back to top".to_string(),
                onclick: move |_| scroll_to_top(),
                Icon { kind: IconKind::ArrowUp }
            }
        }
    }
}
