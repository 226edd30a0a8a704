//! # Browser `localStorage` store: web persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] implementation used on the
//! **web platform**. Each key maps to one `window.localStorage` entry, so the
//! profile document lives under `localStorage["accountData"]`.
//!
//! ## Error handling
//!
//! Reads swallow errors: a disabled or inaccessible `localStorage` looks the
//! same as an empty one, which sends the user to the registration gate.
//! Writes report [`StoreError::Unavailable`] when there is no storage object and
//! [`StoreError::Backend`] when the browser rejects the value (quota exceeded).

use web_sys::Storage;

use crate::error::StoreError;
use crate::repo::KeyValueStore;

/// localStorage-backed KeyValueStore for web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(format!("{e:?}")))
    }
}
