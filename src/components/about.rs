//! About section - avatar, introduction, focus areas and favourite tools.

use dioxus::prelude::*;
use portfolio_core::catalog::{AVATAR_URL, FOCUS_AREAS, OWNER_NAME, TECH_STACK};
use portfolio_ui::{SectionHeading, Tag, TagTone};

use super::reveal::Reveal;

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about", class: "section section-alt",
            div { class: "container",
                SectionHeading {
                    title: "About".to_string(),
                    highlight: "Me".to_string(),
                }

                div { class: "about-grid",
                    Reveal { class: "avatar-wrap".to_string(),
                        img {
                            class: "avatar",
                            src: AVATAR_URL,
                            alt: "Portrait of {OWNER_NAME}",
                        }
                    }

                    Reveal { class: "about-copy".to_string(), delay_ms: 150,
                        h3 { "Hey, I'm {OWNER_NAME} 👋" }
                        p {
                            "I'm a full-stack developer who enjoys turning ideas into fast, "
                            "accessible products. I care about the whole path from the database "
                            "schema to the last pixel on screen."
                        }
                        p {
                            "When I'm not shipping features I'm usually exploring a new framework, "
                            "contributing to side projects or learning something about data."
                        }

                        h4 { "What I Do" }
                        div { class: "badge-row",
                            for area in FOCUS_AREAS.iter() {
                                span { key: "{area.name}", class: "focus-badge",
                                    span { class: "focus-dot", style: "background: {area.color};" }
                                    "{area.name}"
                                }
                            }
                        }

                        h4 { "Tech I Love" }
                        div { class: "badge-row",
                            for tech in TECH_STACK.iter() {
                                Tag { key: "{tech}", label: tech.to_string(), tone: TagTone::Muted }
                            }
                        }
                    }
                }
            }
        }
    }
}
