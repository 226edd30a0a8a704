use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::FaXmark;
use crate::Icon;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ModalSize {
    fn class(&self) -> &'static str {
        match self {
            ModalSize::Small => "modal modal-sm",
            ModalSize::Medium => "modal modal-md",
            ModalSize::Large => "modal modal-lg",
        }
    }
}

/// A full-screen overlay that centers its children in a titled modal card.
///
/// When `dismissible`, clicking outside the card or on the close button
/// triggers `on_close`. A non-dismissible modal has neither.
#[component]
pub fn ModalOverlay(
    title: String,
    #[props(default = true)] dismissible: bool,
    #[props(default)] size: ModalSize,
    #[props(default)] on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| {
                if dismissible {
                    on_close.call(());
                }
            },
            div {
                class: size.class(),
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    if dismissible {
                        Button {
                            variant: ButtonVariant::Ghost,
                            title: "Close",
                            onclick: move |_| on_close.call(()),
                            Icon { icon: FaXmark, width: 14, height: 14 }
                        }
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}
