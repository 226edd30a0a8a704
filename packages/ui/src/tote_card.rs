use dioxus::prelude::*;
use store::content::{card_html, view_html};
use store::{Tote, ToteDraft};

use crate::components::{
    ConfirmDialog, DropdownMenu, DropdownMenuContent, DropdownMenuItem, DropdownMenuTrigger,
};
use crate::icons::{FaEllipsis, FaEye, FaPenToSquare, FaTrashCan};
use crate::views::{ModalOverlay, ModalSize};
use crate::{use_profile, Icon, ToteForm};

#[derive(Clone, Copy, Debug, PartialEq)]
enum CardDialog {
    View,
    Edit,
    Delete,
}

fn delete_prompt(title: &str) -> String {
    format!("Are you sure you want to delete this tote entitled '{title}'")
}

/// One note in the list: title, clamped preview, and its action menu.
#[component]
pub fn ToteCard(tote: Tote) -> Element {
    let mut handle = use_profile();
    let mut dialog = use_signal(|| None::<CardDialog>);

    let mut open = move |which: CardDialog| dialog.set(Some(which));
    let mut close = move || dialog.set(None);

    let placeholder = handle.placeholder();
    let mut initial = ToteDraft::from_tote(&tote);
    if initial.content.is_empty() {
        initial.content = placeholder.clone();
    }

    let preview = card_html(&tote).to_string();
    let body = view_html(&tote).to_string();
    let edit_id = tote.id.clone();
    let delete_id = tote.id.clone();
    let prompt = delete_prompt(&tote.title);

    rsx! {
        article {
            class: "card tote-card",
            header {
                class: "card-header",
                h3 { class: "card-title", "{tote.title}" }
                DropdownMenu {
                    DropdownMenuTrigger {
                        title: "Actions",
                        Icon { icon: FaEllipsis, width: 14, height: 14 }
                    }
                    DropdownMenuContent {
                        DropdownMenuItem::<CardDialog> {
                            value: CardDialog::View,
                            index: 0usize,
                            on_select: move |which| open(which),
                            Icon { icon: FaEye, width: 12, height: 12 }
                            "View"
                        }
                        DropdownMenuItem::<CardDialog> {
                            value: CardDialog::Edit,
                            index: 1usize,
                            on_select: move |which| open(which),
                            Icon { icon: FaPenToSquare, width: 12, height: 12 }
                            "Edit"
                        }
                        DropdownMenuItem::<CardDialog> {
                            value: CardDialog::Delete,
                            index: 2usize,
                            danger: true,
                            on_select: move |which| open(which),
                            Icon { icon: FaTrashCan, width: 12, height: 12 }
                            "Delete"
                        }
                    }
                }
            }
            div {
                class: "card-preview line-clamp",
                dangerous_inner_html: "{preview}",
            }
        }

        {match dialog() {
            Some(CardDialog::View) => rsx! {
                ModalOverlay {
                    title: "{tote.title}",
                    size: ModalSize::Large,
                    on_close: move |_| close(),
                    hr {}
                    div { class: "tote-body", dangerous_inner_html: "{body}" }
                }
            },
            Some(CardDialog::Edit) => rsx! {
                ModalOverlay {
                    title: "Edit Tote",
                    size: ModalSize::Large,
                    on_close: move |_| close(),
                    ToteForm {
                        initial,
                        title_label: "Name",
                        submit_label: "Save",
                        validate: false,
                        placeholder,
                        on_submit: move |draft: ToteDraft| {
                            handle.update(&edit_id, draft);
                            close();
                        },
                    }
                }
            },
            Some(CardDialog::Delete) => rsx! {
                ConfirmDialog {
                    title: "Delete Tote",
                    confirm_label: "Delete",
                    on_confirm: move |_| handle.delete(&delete_id),
                    on_close: move |_| close(),
                    "{prompt}"
                }
            },
            None => rsx! {},
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_prompt_names_the_note() {
        assert_eq!(
            delete_prompt("Groceries"),
            "Are you sure you want to delete this tote entitled 'Groceries'"
        );
    }
}
