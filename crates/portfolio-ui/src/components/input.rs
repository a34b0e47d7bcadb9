//! Form Field Components
//!
//! Labelled text inputs and textareas with a teal focus ring.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used to associate the label
    pub id: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
}

/// Labelled single-line input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         id: "contact-email".to_string(),
///         value: form.fields().email.clone(),
///         oninput: move |v| controller.set_field(ContactField::Email, v),
///         label: "Your Email*".to_string(),
///         input_type: "email".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.id}",
                    "{label}"
                }
            }
            input {
                id: "{props.id}",
                name: "{props.id}",
                class: "input-field",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub id: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
}

/// Labelled multi-line input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.id}",
                    "{label}"
                }
            }
            textarea {
                id: "{props.id}",
                name: "{props.id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
