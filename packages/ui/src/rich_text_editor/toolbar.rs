/// Tiptap release the editor modules are pinned to.
const TIPTAP_VERSION: &str = "2.11.5";

/// ES module CDN that serves npm packages.
const ESM_CDN: &str = "https://esm.sh";

/// Extensions loaded into every editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extension {
    /// Paragraphs, bold/italic/strike/code, headings, lists, blockquote, rule, history.
    StarterKit,
    Underline,
    Link,
    Superscript,
    Subscript,
    Highlight,
    /// Alignment for headings and paragraphs.
    TextAlign,
}

impl Extension {
    pub const ALL: [Extension; 7] = [
        Extension::StarterKit,
        Extension::Underline,
        Extension::Link,
        Extension::Superscript,
        Extension::Subscript,
        Extension::Highlight,
        Extension::TextAlign,
    ];

    pub fn package(&self) -> &'static str {
        match self {
            Extension::StarterKit => "@tiptap/starter-kit",
            Extension::Underline => "@tiptap/extension-underline",
            Extension::Link => "@tiptap/extension-link",
            Extension::Superscript => "@tiptap/extension-superscript",
            Extension::Subscript => "@tiptap/extension-subscript",
            Extension::Highlight => "@tiptap/extension-highlight",
            Extension::TextAlign => "@tiptap/extension-text-align",
        }
    }

    /// Module URL. Core and ProseMirror are pinned so every extension shares one copy.
    pub fn module_url(&self) -> String {
        format!(
            "{ESM_CDN}/{}@{TIPTAP_VERSION}?deps=@tiptap/core@{TIPTAP_VERSION},@tiptap/pm@{TIPTAP_VERSION}",
            self.package()
        )
    }

    /// Expression producing the configured extension from its imported module.
    pub fn instance_js(&self, module: &str) -> String {
        match self {
            Extension::TextAlign => {
                format!("{module}.default.configure({{ types: ['heading', 'paragraph'] }})")
            }
            Extension::Link => format!("{module}.default.configure({{ openOnClick: false }})"),
            _ => format!("{module}.default"),
        }
    }
}

fn core_module_url() -> String {
    format!("{ESM_CDN}/@tiptap/core@{TIPTAP_VERSION}?deps=@tiptap/pm@{TIPTAP_VERSION}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarControl {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    ClearFormatting,
    Highlight,
    Code,
    H1,
    H2,
    H3,
    H4,
    Blockquote,
    Hr,
    BulletList,
    OrderedList,
    Subscript,
    Superscript,
    Link,
    Unlink,
    AlignLeft,
    AlignCenter,
    AlignJustify,
    AlignRight,
}

/// Toolbar layout, one slice per button group.
pub const TOOLBAR_GROUPS: &[&[ToolbarControl]] = &[
    &[
        ToolbarControl::Bold,
        ToolbarControl::Italic,
        ToolbarControl::Underline,
        ToolbarControl::Strikethrough,
        ToolbarControl::ClearFormatting,
        ToolbarControl::Highlight,
        ToolbarControl::Code,
    ],
    &[
        ToolbarControl::H1,
        ToolbarControl::H2,
        ToolbarControl::H3,
        ToolbarControl::H4,
    ],
    &[
        ToolbarControl::Blockquote,
        ToolbarControl::Hr,
        ToolbarControl::BulletList,
        ToolbarControl::OrderedList,
        ToolbarControl::Subscript,
        ToolbarControl::Superscript,
    ],
    &[ToolbarControl::Link, ToolbarControl::Unlink],
    &[
        ToolbarControl::AlignLeft,
        ToolbarControl::AlignCenter,
        ToolbarControl::AlignJustify,
        ToolbarControl::AlignRight,
    ],
];

impl ToolbarControl {
    /// Short glyph shown on the button.
    pub fn label(&self) -> &'static str {
        match self {
            ToolbarControl::Bold => "B",
            ToolbarControl::Italic => "I",
            ToolbarControl::Underline => "U",
            ToolbarControl::Strikethrough => "S",
            ToolbarControl::ClearFormatting => "Tx",
            ToolbarControl::Highlight => "Hl",
            ToolbarControl::Code => "</>",
            ToolbarControl::H1 => "H1",
            ToolbarControl::H2 => "H2",
            ToolbarControl::H3 => "H3",
            ToolbarControl::H4 => "H4",
            ToolbarControl::Blockquote => "\u{201C}",
            ToolbarControl::Hr => "\u{2015}",
            ToolbarControl::BulletList => "\u{2022}",
            ToolbarControl::OrderedList => "1.",
            ToolbarControl::Subscript => "x\u{2082}",
            ToolbarControl::Superscript => "x\u{00B2}",
            ToolbarControl::Link => "\u{1F517}",
            ToolbarControl::Unlink => "\u{2300}",
            ToolbarControl::AlignLeft => "\u{21E4}",
            ToolbarControl::AlignCenter => "\u{2194}",
            ToolbarControl::AlignJustify => "\u{2261}",
            ToolbarControl::AlignRight => "\u{21E5}",
        }
    }

    /// Accessible name / tooltip.
    pub fn title(&self) -> &'static str {
        match self {
            ToolbarControl::Bold => "Bold",
            ToolbarControl::Italic => "Italic",
            ToolbarControl::Underline => "Underline",
            ToolbarControl::Strikethrough => "Strikethrough",
            ToolbarControl::ClearFormatting => "Clear formatting",
            ToolbarControl::Highlight => "Highlight text",
            ToolbarControl::Code => "Code",
            ToolbarControl::H1 => "Heading 1",
            ToolbarControl::H2 => "Heading 2",
            ToolbarControl::H3 => "Heading 3",
            ToolbarControl::H4 => "Heading 4",
            ToolbarControl::Blockquote => "Blockquote",
            ToolbarControl::Hr => "Horizontal line",
            ToolbarControl::BulletList => "Bullet list",
            ToolbarControl::OrderedList => "Ordered list",
            ToolbarControl::Subscript => "Subscript",
            ToolbarControl::Superscript => "Superscript",
            ToolbarControl::Link => "Link",
            ToolbarControl::Unlink => "Remove link",
            ToolbarControl::AlignLeft => "Align text: left",
            ToolbarControl::AlignCenter => "Align text: center",
            ToolbarControl::AlignJustify => "Align text: justify",
            ToolbarControl::AlignRight => "Align text: right",
        }
    }

    /// Command chain run against the focused editor.
    pub fn chain(&self) -> &'static str {
        match self {
            ToolbarControl::Bold => "toggleBold()",
            ToolbarControl::Italic => "toggleItalic()",
            ToolbarControl::Underline => "toggleUnderline()",
            ToolbarControl::Strikethrough => "toggleStrike()",
            ToolbarControl::ClearFormatting => "unsetAllMarks().clearNodes()",
            ToolbarControl::Highlight => "toggleHighlight()",
            ToolbarControl::Code => "toggleCode()",
            ToolbarControl::H1 => "toggleHeading({ level: 1 })",
            ToolbarControl::H2 => "toggleHeading({ level: 2 })",
            ToolbarControl::H3 => "toggleHeading({ level: 3 })",
            ToolbarControl::H4 => "toggleHeading({ level: 4 })",
            ToolbarControl::Blockquote => "toggleBlockquote()",
            ToolbarControl::Hr => "setHorizontalRule()",
            ToolbarControl::BulletList => "toggleBulletList()",
            ToolbarControl::OrderedList => "toggleOrderedList()",
            ToolbarControl::Subscript => "toggleSubscript()",
            ToolbarControl::Superscript => "toggleSuperscript()",
            ToolbarControl::Link => "extendMarkRange('link').setLink({ href: url })",
            ToolbarControl::Unlink => "unsetLink()",
            ToolbarControl::AlignLeft => "setTextAlign('left')",
            ToolbarControl::AlignCenter => "setTextAlign('center')",
            ToolbarControl::AlignJustify => "setTextAlign('justify')",
            ToolbarControl::AlignRight => "setTextAlign('right')",
        }
    }
}

/// Escape a string so it's safe to embed inside a JS string literal (double-quoted).
pub fn js_string_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c < '\x20' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Live editors keyed by element id. Lookups go through this map rather than
/// the DOM so an editor can still be reached after its element is detached.
const REGISTRY_JS: &str = "(window.__totesEditors = window.__totesEditors || {})";

/// Script that mounts an editor into the element `editor_id` and reports every
/// update through `dioxus.send(html)`.
pub fn create_editor_script(editor_id: &str, content: &str) -> String {
    let imports = std::iter::once(core_module_url())
        .chain(Extension::ALL.iter().map(Extension::module_url))
        .map(|url| format!("import({})", js_string_escape(&url)))
        .collect::<Vec<_>>()
        .join(",\n                    ");
    let extensions = Extension::ALL
        .iter()
        .enumerate()
        .map(|(i, ext)| ext.instance_js(&format!("mods[{}]", i + 1)))
        .collect::<Vec<_>>()
        .join(",\n                        ");

    format!(
        r#"(async function() {{
            var editors = {REGISTRY_JS};
            var container = document.getElementById({eid_js});
            if (!container || editors[{eid_js}]) return;
            var mods = await Promise.all([
                    {imports}
            ]);
            editors[{eid_js}] = new mods[0].Editor({{
                element: container,
                extensions: [
                        {extensions}
                ],
                content: {content_js},
                onUpdate: function(props) {{
                    dioxus.send(props.editor.getHTML());
                }}
            }});
        }})();"#,
        eid_js = js_string_escape(editor_id),
        content_js = js_string_escape(content),
    )
}

/// Script that replaces the editor document without emitting an update.
pub fn set_content_script(editor_id: &str, html: &str) -> String {
    format!(
        r#"(function() {{
            var editor = {REGISTRY_JS}[{eid_js}];
            if (!editor) return;
            editor.commands.setContent({html_js}, false);
        }})();"#,
        eid_js = js_string_escape(editor_id),
        html_js = js_string_escape(html),
    )
}

/// Script that runs a toolbar control against the editor.
pub fn command_script(editor_id: &str, control: ToolbarControl) -> String {
    let prelude = match control {
        ToolbarControl::Link => {
            "var url = window.prompt('Enter link URL'); if (!url) return;"
        }
        _ => "",
    };
    format!(
        r#"(function() {{
            var editor = {REGISTRY_JS}[{eid_js}];
            if (!editor) return;
            {prelude}
            editor.chain().focus().{chain}.run();
        }})();"#,
        eid_js = js_string_escape(editor_id),
        chain = control.chain(),
    )
}

/// Script that tears the editor down when its component unmounts. Works
/// whether or not the element is still attached.
pub fn destroy_script(editor_id: &str) -> String {
    format!(
        r#"(function() {{
            var editors = {REGISTRY_JS};
            var editor = editors[{eid_js}];
            if (!editor) return;
            delete editors[{eid_js}];
            editor.destroy();
        }})();"#,
        eid_js = js_string_escape(editor_id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolbar_covers_formatting_set() {
        let all: Vec<ToolbarControl> = TOOLBAR_GROUPS.iter().flat_map(|g| g.iter().copied()).collect();
        assert_eq!(TOOLBAR_GROUPS.len(), 5);
        assert_eq!(all.len(), 23);
        for control in [
            ToolbarControl::Bold,
            ToolbarControl::Italic,
            ToolbarControl::Underline,
            ToolbarControl::Strikethrough,
            ToolbarControl::H1,
            ToolbarControl::BulletList,
            ToolbarControl::OrderedList,
            ToolbarControl::Blockquote,
            ToolbarControl::Hr,
            ToolbarControl::AlignJustify,
            ToolbarControl::Superscript,
            ToolbarControl::Subscript,
            ToolbarControl::Link,
            ToolbarControl::Highlight,
        ] {
            assert!(all.contains(&control), "{control:?} missing");
        }
    }

    #[test]
    fn test_text_align_configured_for_headings_and_paragraphs() {
        assert_eq!(
            Extension::TextAlign.instance_js("m"),
            "m.default.configure({ types: ['heading', 'paragraph'] })"
        );
        assert_eq!(Extension::Underline.instance_js("m"), "m.default");
    }

    #[test]
    fn test_module_urls_are_pinned() {
        for ext in Extension::ALL {
            let url = ext.module_url();
            assert!(url.starts_with("https://esm.sh/@tiptap/"));
            assert!(url.contains(&format!("@{TIPTAP_VERSION}?")));
        }
    }

    #[test]
    fn test_create_script_imports_every_extension() {
        let js = create_editor_script("tiptap-editor-0", "<p>hi</p>");
        assert!(js.contains("\"tiptap-editor-0\""));
        assert!(js.contains("@tiptap/core@"));
        for ext in Extension::ALL {
            assert!(js.contains(ext.package()), "{ext:?} not imported");
        }
        assert!(js.contains("mods[7].default.configure"));
        assert!(js.contains("dioxus.send(props.editor.getHTML())"));
        // content is embedded as an escaped literal
        assert!(js.contains(r#""<p>hi</p>""#));
    }

    #[test]
    fn test_link_prompts_for_url() {
        let js = command_script("e", ToolbarControl::Link);
        assert!(js.contains("window.prompt"));
        assert!(js.contains("setLink({ href: url })"));

        let bold = command_script("e", ToolbarControl::Bold);
        assert!(!bold.contains("window.prompt"));
        assert!(bold.contains(".chain().focus().toggleBold().run()"));
    }

    #[test]
    fn test_set_content_does_not_emit_update() {
        let js = set_content_script("e", "<p>x</p>");
        assert!(js.contains(r#"setContent("<p>x</p>", false)"#));
    }

    #[test]
    fn test_destroy_uses_registry_not_dom() {
        let js = destroy_script("tiptap-editor-3");
        assert!(!js.contains("getElementById"));
        assert!(js.contains("window.__totesEditors"));
        assert!(js.contains(r#"delete editors["tiptap-editor-3"]"#));
        assert!(js.contains("editor.destroy()"));

        let create = create_editor_script("tiptap-editor-3", "");
        assert!(create.contains(r#"editors["tiptap-editor-3"] = new mods[0].Editor"#));
    }

    #[test]
    fn test_js_string_escape() {
        assert_eq!(js_string_escape(r#"a"b\c"#), r#""a\"b\\c""#);
        assert_eq!(js_string_escape("line\nbreak"), r#""line\nbreak""#);
        assert_eq!(js_string_escape("</script>"), r#""</script>""#);
    }
}
