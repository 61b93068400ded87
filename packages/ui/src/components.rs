//! Form primitives shared by every page.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Destructive,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
            ButtonVariant::Destructive => "btn btn-destructive",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] kind: String,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let base = variant.class();
    rsx! {
        button {
            class: "{base} {class}",
            r#type: "{kind}",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Label(#[props(default)] html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "form-label", r#for: "{html_for}", {children} }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] value: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    #[props(default)] class: String,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "form-input {class}",
            r#type: "{kind}",
            value: "{value}",
            placeholder: "{placeholder}",
            required,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default)] id: String,
    #[props(default)] value: String,
    #[props(default)] placeholder: String,
    #[props(default = 4)] rows: u32,
    #[props(default)] class: String,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "form-input form-textarea {class}",
            rows: "{rows}",
            value: "{value}",
            placeholder: "{placeholder}",
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

/// Single-choice dropdown. An empty `placeholder` hides the blank option.
#[component]
pub fn Select(
    #[props(default)] id: String,
    value: String,
    options: Vec<String>,
    #[props(default)] placeholder: String,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "form-input",
            value: "{value}",
            onchange: move |evt| onchange.call(evt.value()),
            if !placeholder.is_empty() {
                option { value: "", disabled: true, selected: value.is_empty(), "{placeholder}" }
            }
            for opt in options.iter() {
                option {
                    key: "{opt}",
                    value: "{opt}",
                    selected: *opt == value,
                    "{opt}"
                }
            }
        }
    }
}

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error-banner", role: "alert", "{message}" }
    }
}

/// Labelled text input bound to a `String` value.
#[component]
pub fn TextField(
    label: String,
    id: String,
    value: String,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "form-field",
            Label { html_for: "{id}", "{label}" }
            Input {
                id: "{id}",
                kind,
                value,
                placeholder,
                required,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}

/// Labelled dropdown over a fixed option list.
#[component]
pub fn SelectField(
    label: String,
    id: String,
    value: String,
    options: Vec<String>,
    #[props(default = "Select an option".to_string())] placeholder: String,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "form-field",
            Label { html_for: "{id}", "{label}" }
            Select { id: "{id}", value, options, placeholder, onchange }
        }
    }
}

/// Owned option list from a constant table.
pub fn options(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
