//! Contact section - contact details, social links and the message form.

use dioxus::prelude::*;
use portfolio_core::catalog::{CONTACT_INFO, SOCIAL_LINKS};
use portfolio_core::{ContactField, FormStatus, SubmitAction};
use portfolio_ui::{Button, Input, SectionHeading, TextArea};

use super::icons::{Icon, IconKind};
use super::reveal::Reveal;
use crate::context::use_config;
use crate::hooks::use_contact_form;

/// Class of the status line under the form, if it is shown at all.
pub fn status_class(status: FormStatus) -> Option<&'static str> {
    match status {
        FormStatus::Submitted => Some("form-status success"),
        FormStatus::Error => Some("form-status error"),
        FormStatus::Idle | FormStatus::Submitting => None,
    }
}

fn info_icon(title: &str) -> IconKind {
    match title {
        "Email" => IconKind::Mail,
        "Phone" => IconKind::Phone,
        _ => IconKind::MapPin,
    }
}

#[component]
pub fn Contact() -> Element {
    let config = use_config();
    let (controller, form) = use_contact_form(config.contact.dismiss_after());

    let snapshot = form.read().clone();
    let submitting = snapshot.status() == FormStatus::Submitting;
    let status_line = status_class(snapshot.status());
    let message = snapshot.message().to_string();
    let fields = snapshot.fields().clone();

    let bind = |field: ContactField| {
        let controller = controller.clone();
        move |value: String| controller.set_field(field, value)
    };
    let submit_controller = controller.clone();

    rsx! {
        section { id: "contact", class: "section section-alt",
            div { class: "container",
                SectionHeading {
                    title: "Get In".to_string(),
                    highlight: "Touch".to_string(),
                    subtitle: "Have a question or want to work together? Feel free to contact me anytime!".to_string(),
                }

                div { class: "contact-grid",
                    Reveal { class: "contact-info".to_string(),
                        h3 { "Contact Information" }
                        for info in CONTACT_INFO.iter() {
                            div { key: "{info.title}", class: "info-item",
                                Icon { kind: info_icon(info.title) }
                                div {
                                    div { class: "info-title", "{info.title}" }
                                    if let Some(href) = info.href {
                                        a { class: "info-content", href, "{info.content}" }
                                    } else {
                                        div { class: "info-content", "{info.content}" }
                                    }
                                }
                            }
                        }

                        h4 { "Follow Me" }
                        div { class: "social-links",
                            for link in SOCIAL_LINKS.iter() {
                                a {
                                    key: "{link.name}",
                                    href: link.href,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "aria-label": "{link.name}",
                                    Icon { kind: IconKind::from(link.kind) }
                                }
                            }
                        }
                    }

                    Reveal { delay_ms: 150,
                        form {
                            class: "contact-form",
                            novalidate: true,
                            onsubmit: move |evt| {
                                evt.prevent_default();
                                if let SubmitAction::Dispatch(fields) = submit_controller.submit() {
                                    tracing::info!(email = %fields.email, "Contact message dispatched");
                                }
                            },

                            div { class: "form-row",
                                Input {
                                    id: "contact-name".to_string(),
                                    label: ContactField::Name.label().to_string(),
                                    value: fields.name.clone(),
                                    oninput: bind(ContactField::Name),
                                    required: true,
                                    disabled: submitting,
                                }
                                Input {
                                    id: "contact-email".to_string(),
                                    label: ContactField::Email.label().to_string(),
                                    input_type: "email".to_string(),
                                    value: fields.email.clone(),
                                    oninput: bind(ContactField::Email),
                                    required: true,
                                    disabled: submitting,
                                }
                            }
                            Input {
                                id: "contact-subject".to_string(),
                                label: ContactField::Subject.label().to_string(),
                                value: fields.subject.clone(),
                                oninput: bind(ContactField::Subject),
                                disabled: submitting,
                            }
                            TextArea {
                                id: "contact-message".to_string(),
                                label: ContactField::Message.label().to_string(),
                                value: fields.message.clone(),
                                oninput: bind(ContactField::Message),
                                required: true,
                                disabled: submitting,
                            }

                            Button {
                                button_type: "submit".to_string(),
                                disabled: !snapshot.can_submit(),
                                class: "btn-block".to_string(),
                                if submitting {
                                    span { class: "spinner" }
                                    "Sending..."
                                } else {
                                    Icon { kind: IconKind::Send, size: 18 }
                                    "Send Message"
                                }
                            }

                            if let Some(class) = status_line {
                                p { class, role: "status", "{message}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
