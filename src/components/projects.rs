//! Projects section - a card per featured project.

use dioxus::prelude::*;
use portfolio_core::catalog::{Project, ALL_PROJECTS_URL, PROJECTS};
use portfolio_ui::{ButtonVariant, LinkButton, SectionHeading, Tag};

use super::icons::{Icon, IconKind};
use super::reveal::Reveal;

/// Stagger between neighbouring cards.
const CARD_STAGGER_MS: u32 = 100;

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { id: "projects", class: "section",
            div { class: "container",
                SectionHeading {
                    title: "My".to_string(),
                    highlight: "Projects".to_string(),
                    subtitle: "A selection of things I've built recently".to_string(),
                }

                div { class: "project-grid",
                    for (index, project) in PROJECTS.iter().enumerate() {
                        Reveal {
                            key: "{project.title}",
                            delay_ms: index as u32 * CARD_STAGGER_MS,
                            ProjectCard { project: *project }
                        }
                    }
                }

                div { class: "projects-more",
                    LinkButton {
                        href: ALL_PROJECTS_URL.to_string(),
                        variant: ButtonVariant::Outline,
                        external: true,
                        "View All Projects"
                        Icon { kind: IconKind::ArrowRight, size: 18 }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        article { class: "project-card",
            div { class: "project-media",
                img { src: project.image, alt: "{project.title}", loading: "lazy" }
                span { class: "project-kind", "{project.kind.label()}" }
            }
            div { class: "project-body",
                h3 { "{project.title}" }
                p { "{project.description}" }
                div { class: "badge-row",
                    for tag in project.tags.iter() {
                        Tag { key: "{tag}", label: tag.to_string() }
                    }
                }
                div { class: "project-links",
                    a {
                        href: project.repo_url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Icon { kind: IconKind::Github, size: 18 }
                        "Code"
                    }
                    if let Some(live) = project.live_url {
                        a {
                            href: live,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { kind: IconKind::ExternalLink, size: 18 }
                            "Live Demo"
                        }
                    }
                }
            }
        }
    }
}
