use dioxus::prelude::*;
use store::content::normalize_editor_html;

use super::toolbar::{
    command_script, create_editor_script, destroy_script, set_content_script, ToolbarControl,
    TOOLBAR_GROUPS,
};

/// Simple counter for unique IDs
static EDITOR_COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

/// Outcome of one editor update event.
#[derive(Debug, PartialEq)]
pub(crate) struct EditorUpdate {
    /// Value recorded as the form content.
    pub recorded: String,
    /// Script that resets the live editor, when its document must change.
    pub reset_script: Option<String>,
}

/// Normalize an update from the editor. The reset runs before the value is
/// recorded and does not itself emit another update.
pub(crate) fn apply_update(editor_id: &str, html: &str, placeholder: &str) -> EditorUpdate {
    let recorded = normalize_editor_html(html, placeholder);
    let reset_script = (recorded != html).then(|| set_content_script(editor_id, &recorded));
    EditorUpdate {
        recorded,
        reset_script,
    }
}

/// Rich-text editor bound to an HTML string signal.
///
/// `content` seeds the editor and receives every update. An update that empties
/// the document is replaced by `placeholder`, both in the editor and in `content`.
#[component]
pub fn RichTextEditor(
    content: Signal<String>,
    #[props(default)] on_change: EventHandler<String>,
    placeholder: String,
) -> Element {
    let editor_id = use_signal(|| {
        let n = EDITOR_COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        format!("tiptap-editor-{n}")
    });

    // ── Mount the editor and bridge its updates ──
    use_effect(move || {
        let eid = editor_id.peek().clone();
        let js = create_editor_script(&eid, &content.peek());
        let placeholder = placeholder.clone();

        spawn(async move {
            let mut content = content;
            let mut eval = document::eval(&js);
            loop {
                match eval.recv::<String>().await {
                    Ok(html) => {
                        let update = apply_update(&eid, &html, &placeholder);
                        if let Some(js) = &update.reset_script {
                            document::eval(js);
                        }
                        content.set(update.recorded.clone());
                        on_change.call(update.recorded);
                    }
                    Err(_) => break,
                }
            }
        });
    });

    use_drop(move || {
        document::eval(&destroy_script(&editor_id.peek()));
    });

    let run = move |control: ToolbarControl| {
        document::eval(&command_script(&editor_id.peek(), control));
    };

    rsx! {
        div {
            class: "rte",
            div {
                class: "rte-toolbar",
                for (i, group) in TOOLBAR_GROUPS.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "rte-controls-group",
                        for (control, title, label) in group.iter().map(|&c| (c, c.title(), c.label())) {
                            button {
                                key: "{title}",
                                class: "rte-control",
                                r#type: "button",
                                title,
                                aria_label: title,
                                // keep the editor selection
                                onmousedown: move |evt: Event<MouseData>| evt.prevent_default(),
                                onclick: move |_| run(control),
                                "{label}"
                            }
                        }
                    }
                }
            }
            div {
                id: "{editor_id}",
                class: "rte-content",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::content::{DEFAULT_PLACEHOLDER_HTML, EMPTY_PARAGRAPH_HTML};

    #[test]
    fn test_empty_document_resets_to_placeholder() {
        let update = apply_update("tiptap-editor-0", EMPTY_PARAGRAPH_HTML, DEFAULT_PLACEHOLDER_HTML);
        assert_eq!(update.recorded, DEFAULT_PLACEHOLDER_HTML);

        let js = update.reset_script.expect("reset script");
        assert!(js.contains(r#"["tiptap-editor-0"]"#));
        assert!(js.contains(&format!("setContent(\"{DEFAULT_PLACEHOLDER_HTML}\", false)")));
    }

    #[test]
    fn test_other_content_is_recorded_verbatim() {
        let update = apply_update("tiptap-editor-0", "<p>milk</p>", DEFAULT_PLACEHOLDER_HTML);
        assert_eq!(update.recorded, "<p>milk</p>");
        assert_eq!(update.reset_script, None);
    }

    #[test]
    fn test_custom_placeholder_is_used() {
        let update = apply_update("e", "<p></p>", "<p>Start here</p>");
        assert_eq!(update.recorded, "<p>Start here</p>");
        assert!(update.reset_script.is_some());
    }
}
