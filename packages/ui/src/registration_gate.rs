use dioxus::prelude::*;
use store::{FormErrors, RegistrationField, RegistrationForm};

use crate::components::{Button, FieldMessage, Input, Label};
use crate::use_profile;
use crate::views::{ModalOverlay, ModalSize};

/// Shows the sign-up dialog until a profile exists, then the children.
#[component]
pub fn RegistrationGate(children: Element) -> Element {
    let handle = use_profile();

    if handle.is_registered() {
        return rsx! { {children} };
    }

    rsx! { SignUp {} }
}

#[component]
fn SignUp() -> Element {
    let mut handle = use_profile();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut errors = use_signal(FormErrors::<RegistrationField>::default);

    let message = move |field: RegistrationField| errors.read().get(field).map(|e| e.to_string());
    let first_error = message(RegistrationField::FirstName);
    let last_error = message(RegistrationField::LastName);
    let email_error = message(RegistrationField::Email);

    rsx! {
        div {
            class: "gate",
            ModalOverlay {
                title: "Sign Up",
                dismissible: false,
                size: ModalSize::Small,
                form {
                    class: "registration-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        let form = RegistrationForm {
                            first_name: first_name.read().clone(),
                            last_name: last_name.read().clone(),
                            email: email.read().clone(),
                        };
                        match handle.register(&form) {
                            Ok(()) => errors.set(FormErrors::default()),
                            Err(e) => errors.set(e),
                        }
                    },
                    div {
                        class: "field",
                        Label { html_for: "first-name", required: true, "First Name" }
                        Input {
                            id: "first-name",
                            placeholder: "John",
                            value: "{first_name}",
                            invalid: first_error.is_some(),
                            oninput: move |evt: FormEvent| first_name.set(evt.value()),
                        }
                        FieldMessage { message: first_error }
                    }
                    div {
                        class: "field",
                        Label { html_for: "last-name", required: true, "Last Name" }
                        Input {
                            id: "last-name",
                            placeholder: "Doe",
                            value: "{last_name}",
                            invalid: last_error.is_some(),
                            oninput: move |evt: FormEvent| last_name.set(evt.value()),
                        }
                        FieldMessage { message: last_error }
                    }
                    div {
                        class: "field",
                        Label { html_for: "email", required: true, "Email" }
                        Input {
                            id: "email",
                            input_type: "email",
                            placeholder: "johndoe@mail.com",
                            value: "{email}",
                            invalid: email_error.is_some(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        FieldMessage { message: email_error }
                    }
                    div {
                        class: "form-actions",
                        Button { button_type: "submit", "Register" }
                    }
                }
            }
        }
    }
}
