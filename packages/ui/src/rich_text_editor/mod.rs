//! Rich-text editing surface.
//!
//! The editing engine is Tiptap, loaded as ES modules at runtime. [`toolbar`]
//! holds the extension set and the toolbar controls as plain data and renders
//! the JavaScript snippets that drive the editor; [`component`] mounts the
//! editor and bridges its change events back into a signal.

pub mod component;
pub mod toolbar;

pub use component::RichTextEditor;
pub use toolbar::{Extension, ToolbarControl, TOOLBAR_GROUPS};
