//! Note body policy: placeholder markup and display fallbacks.
//!
//! Note bodies are HTML strings produced by the rich-text editor and stored
//! verbatim. The editor is never allowed to settle on an empty document: when
//! it reports [`EMPTY_PARAGRAPH_HTML`] the body is reset to the placeholder.

use crate::models::Tote;

/// Body given to new notes and to an editor that has been cleared.
pub const DEFAULT_PLACEHOLDER_HTML: &str =
    "<p><strong>Hey there!</strong></p><p>You can add content here</p>";

/// What the editor emits once every character has been deleted.
pub const EMPTY_PARAGRAPH_HTML: &str = "<p></p>";

/// Card preview body for a note without content.
pub const EMPTY_CARD_HTML: &str = "<p>NOTHING TO SEE HERE</p>";

/// Whether the editor output is the empty document.
pub fn is_empty_document(html: &str) -> bool {
    html.trim() == EMPTY_PARAGRAPH_HTML
}

/// Apply the reset policy to fresh editor output.
///
/// The empty document becomes `placeholder`; anything else is returned unchanged.
pub fn normalize_editor_html(html: &str, placeholder: &str) -> String {
    if is_empty_document(html) {
        placeholder.to_string()
    } else {
        html.to_string()
    }
}

/// Markup shown in the "View" dialog.
pub fn view_html(tote: &Tote) -> &str {
    non_empty_or(&tote.content, DEFAULT_PLACEHOLDER_HTML)
}

/// Markup shown in the list card preview.
pub fn card_html(tote: &Tote) -> &str {
    non_empty_or(&tote.content, EMPTY_CARD_HTML)
}

fn non_empty_or<'a>(content: &'a str, fallback: &'a str) -> &'a str {
    if content.is_empty() {
        fallback
    } else {
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn tote_with(content: &str) -> Tote {
        let now = Utc::now();
        Tote {
            id: "id".into(),
            title: "t".into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
            is_archived: false,
        }
    }

    #[test]
    fn test_empty_paragraph_resets_to_placeholder() {
        assert_eq!(
            normalize_editor_html("<p></p>", DEFAULT_PLACEHOLDER_HTML),
            DEFAULT_PLACEHOLDER_HTML
        );
    }

    #[test]
    fn test_custom_placeholder() {
        assert_eq!(normalize_editor_html("<p></p>", "<p>…</p>"), "<p>…</p>");
    }

    #[test]
    fn test_other_markup_passes_through() {
        for html in ["<p>milk</p>", "<h1>Title</h1><p></p>", "<p><br></p>", ""] {
            assert_eq!(normalize_editor_html(html, DEFAULT_PLACEHOLDER_HTML), html);
        }
    }

    #[test]
    fn test_display_fallbacks() {
        let empty = tote_with("");
        assert_eq!(view_html(&empty), DEFAULT_PLACEHOLDER_HTML);
        assert_eq!(card_html(&empty), EMPTY_CARD_HTML);

        let filled = tote_with("<p>milk</p>");
        assert_eq!(view_html(&filled), "<p>milk</p>");
        assert_eq!(card_html(&filled), "<p>milk</p>");
    }
}
