use dioxus::prelude::*;
use store::{FormErrors, ToteDraft, ToteField};

use crate::components::{Button, FieldMessage, Input, Label};
use crate::RichTextEditor;

static FORM_COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

/// Title plus rich-text body, shared by the add and edit dialogs.
///
/// With `validate` set, `on_submit` only fires once the title passes validation.
#[component]
pub fn ToteForm(
    initial: ToteDraft,
    title_label: String,
    submit_label: String,
    placeholder: String,
    #[props(default = true)] validate: bool,
    on_submit: EventHandler<ToteDraft>,
) -> Element {
    let mut title = use_signal(|| initial.title.clone());
    let content = use_signal(|| initial.content.clone());
    let mut errors = use_signal(FormErrors::<ToteField>::default);
    let field_id = use_signal(|| {
        let n = FORM_COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        format!("tote-title-{n}")
    });

    let title_error = errors.read().get(ToteField::Title).map(|e| e.to_string());

    rsx! {
        form {
            class: "tote-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let draft = ToteDraft {
                    title: title.read().clone(),
                    content: content.read().clone(),
                };
                if validate {
                    if let Err(e) = draft.validate() {
                        errors.set(e);
                        return;
                    }
                }
                errors.set(FormErrors::default());
                on_submit.call(draft);
            },
            div {
                class: "field",
                Label { html_for: "{field_id}", required: validate, "{title_label}" }
                Input {
                    id: "{field_id}",
                    value: "{title}",
                    invalid: title_error.is_some(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
                FieldMessage { message: title_error }
            }
            div {
                class: "field",
                RichTextEditor { content, placeholder }
            }
            div {
                class: "form-actions",
                Button { button_type: "submit", "{submit_label}" }
            }
        }
    }
}
