//! Shared repository constructor for all platforms.
//!
//! Returns a [`store::ProfileRepository`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): one JSON file per key via [`store::FileStore`]

use store::{ProfileRepository, TotesConfig};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// Create a platform-appropriate repository using the configured profile key.
pub fn make_repo(config: &TotesConfig) -> ProfileRepository<PlatformStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        ProfileRepository::with_key(store::LocalStorageStore::new(), &config.storage.key)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        ProfileRepository::with_key(store::MemoryStore::new(), &config.storage.key)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        ProfileRepository::with_key(store::FileStore::new(data_dir()), &config.storage.key)
    }
}

/// Load the platform configuration.
///
/// Native builds read `totes.toml` from the data directory; the browser has no
/// filesystem and always uses the defaults.
pub fn load_config() -> TotesConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        TotesConfig::load_from_dir(&data_dir())
    }
    #[cfg(target_arch = "wasm32")]
    {
        TotesConfig::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("totes")
}
