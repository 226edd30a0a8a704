//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that keeps each key in its
//! own JSON file. It is used on desktop so the profile survives app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── totes.toml          # optional, see crate::config
//! └── accountData.json    # the profile document
//! ```
//!
//! ## Platform data directories
//!
//! The desktop build uses the platform data directory (`dirs::data_dir()` in the
//! `ui` crate) joined with `totes`:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/totes/` |
//! | Linux | `~/.local/share/totes/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\totes\` |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::repo::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match std::fs::read_to_string(self.entry_path(key)) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(key, "failed to read store entry: {e}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.entry_path(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{RegistrationForm, ToteDraft};
    use crate::repo::ProfileRepository;
    use chrono::Utc;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("totes");

        let repo = ProfileRepository::new(FileStore::new(base.clone()));
        let mut profile = repo
            .register(&RegistrationForm {
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                email: "ada@example.com".into(),
            })
            .unwrap();
        let draft = ToteDraft {
            title: "hello".into(),
            content: "<p>Hello from FileStore!</p>".into(),
        };
        repo.add_tote(&mut profile, draft.into_tote(Utc::now())).unwrap();

        // Re-open from same directory
        let repo2 = ProfileRepository::new(FileStore::new(base.clone()));
        let loaded = repo2.load().unwrap();
        assert_eq!(loaded, profile);
        assert_eq!(loaded.totes[0].content, "<p>Hello from FileStore!</p>");
        assert!(base.join("accountData.json").exists());
    }

    #[test]
    fn test_missing_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never-created"));
        assert!(store.get("accountData").is_none());
    }
}
