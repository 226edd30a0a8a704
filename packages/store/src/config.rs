//! # Application configuration: `totes.toml`
//!
//! Optional TOML file read from the desktop data directory (filename:
//! [`TotesConfig::filename`] = `"totes.toml"`). The web build has no filesystem
//! and always runs with [`TotesConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! key = "accountData"     # key the profile document is stored under
//!
//! [editor]
//! placeholder = "<p><strong>Hey there!</strong></p><p>You can add content here</p>"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`TotesConfig`] | Top-level config. Parses from TOML and knows its canonical filename. |
//! | [`StorageConfig`] | Storage section: the profile key. |
//! | [`EditorConfig`] | Editor section: the body new notes start with and cleared editors reset to. |
//!
//! Every field has a default, so a missing or empty file is equivalent to the
//! default configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::content::DEFAULT_PLACEHOLDER_HTML;
use crate::repo::DEFAULT_PROFILE_KEY;

/// Top-level configuration stored in `totes.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TotesConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_key() -> String {
    DEFAULT_PROFILE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { key: default_key() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER_HTML.to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}

impl TotesConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "totes.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Read `totes.toml` from `dir`.
    ///
    /// A missing file yields the default config; an unreadable or invalid one is
    /// logged and also falls back to the default.
    pub fn load_from_dir(dir: &Path) -> Self {
        let path = dir.join(Self::filename());
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), "failed to read config: {e}");
                return Self::default();
            }
        };
        Self::from_toml(&raw).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), "invalid config, using defaults: {e}");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        let config = TotesConfig::from_toml("").unwrap();
        assert_eq!(config, TotesConfig::default());
        assert_eq!(config.storage.key, "accountData");
        assert_eq!(config.editor.placeholder, DEFAULT_PLACEHOLDER_HTML);
    }

    #[test]
    fn test_partial_section() {
        let config = TotesConfig::from_toml("[storage]\nkey = \"profile\"\n").unwrap();
        assert_eq!(config.storage.key, "profile");
        assert_eq!(config.editor, EditorConfig::default());
    }

    #[test]
    fn test_full_file() {
        let raw = "[storage]\nkey = \"alt\"\n\n[editor]\nplaceholder = \"<p>Start here</p>\"\n";
        let config = TotesConfig::from_toml(raw).unwrap();
        assert_eq!(config.storage.key, "alt");
        assert_eq!(config.editor.placeholder, "<p>Start here</p>");
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(TotesConfig::load_from_dir(dir.path()), TotesConfig::default());

        std::fs::write(dir.path().join("totes.toml"), "[storage]\nkey = \"k\"\n").unwrap();
        assert_eq!(TotesConfig::load_from_dir(dir.path()).storage.key, "k");

        std::fs::write(dir.path().join("totes.toml"), "[storage\n").unwrap();
        assert_eq!(TotesConfig::load_from_dir(dir.path()), TotesConfig::default());
    }
}
