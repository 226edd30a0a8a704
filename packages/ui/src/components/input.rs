use dioxus::prelude::*;
use dioxus_primitives::label;

#[component]
pub fn Label(html_for: String, #[props(default)] required: bool, children: Element) -> Element {
    rsx! {
        label::Label {
            class: "label",
            html_for,
            {children}
            if required {
                span { class: "label-required", " *" }
            }
        }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default)] invalid: bool,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    let class = if invalid { "input input-invalid" } else { "input" };

    rsx! {
        input {
            id: "{id}",
            class,
            r#type: "{input_type}",
            placeholder: "{placeholder}",
            value: "{value}",
            aria_invalid: invalid,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// Inline validation message under a field.
#[component]
pub fn FieldMessage(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { class: "field-error", role: "alert", "{message}" }
        }
    }
}
