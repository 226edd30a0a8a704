use dioxus::prelude::*;
use store::ToteDraft;

use crate::components::Button;
use crate::icons::FaPlus;
use crate::views::{ModalOverlay, ModalSize};
use crate::{use_profile, Icon, ToteCard, ToteForm};

/// Greeting, the add button, and the grid of notes.
#[component]
pub fn HomeView() -> Element {
    let mut handle = use_profile();
    let mut adding = use_signal(|| false);

    let Some(profile) = handle.profile() else {
        return rsx! {};
    };
    let placeholder = handle.placeholder();

    rsx! {
        main {
            class: "home",
            header {
                class: "home-header",
                div {
                    p { class: "greeting", "Hello, {profile.first_name}!" }
                    h1 { class: "home-title", "My Totes" }
                }
                Button {
                    onclick: move |_| adding.set(true),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    "Add Totes"
                }
            }

            if profile.totes.is_empty() {
                div {
                    class: "card empty-state",
                    "No totes yet. Click on the button above to add one."
                }
            } else {
                section {
                    class: "grid",
                    for tote in profile.totes.iter() {
                        ToteCard { key: "{tote.id}", tote: tote.clone() }
                    }
                }
            }
        }

        if adding() {
            ModalOverlay {
                title: "Add Tote",
                size: ModalSize::Large,
                on_close: move |_| adding.set(false),
                ToteForm {
                    initial: ToteDraft::with_placeholder(&placeholder),
                    title_label: "Title",
                    submit_label: "Add Tote",
                    placeholder: placeholder.clone(),
                    on_submit: move |draft: ToteDraft| {
                        handle.add(draft);
                        adding.set(false);
                    },
                }
            }
        }
    }
}
