use dioxus::prelude::*;
use dioxus_primitives::alert_dialog;

/// Confirmation dialog with Cancel and a destructive confirm action.
///
/// Mounted open. Cancel, Escape, and the confirm action all close it through
/// `on_close`; `on_confirm` runs first when the action is chosen.
#[component]
pub fn ConfirmDialog(
    title: String,
    confirm_label: String,
    on_confirm: EventHandler<()>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        alert_dialog::AlertDialogRoot {
            class: "alert-dialog-backdrop",
            default_open: true,
            on_open_change: move |open: bool| {
                if !open {
                    on_close.call(());
                }
            },
            alert_dialog::AlertDialogContent {
                class: "modal modal-sm alert-dialog",
                alert_dialog::AlertDialogTitle { class: "modal-title", "{title}" }
                alert_dialog::AlertDialogDescription { class: "alert-dialog-description", {children} }
                alert_dialog::AlertDialogActions {
                    class: "form-actions",
                    alert_dialog::AlertDialogCancel { class: "btn btn-outline", "Cancel" }
                    alert_dialog::AlertDialogAction {
                        class: "btn btn-danger",
                        on_click: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
