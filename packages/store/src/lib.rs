pub mod config;
pub mod content;
pub mod error;
pub mod forms;
pub mod models;
pub mod repo;
pub mod totes;

mod file_store;
pub use file_store::FileStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::TotesConfig;
pub use error::{RegistrationError, StoreError};
pub use forms::{FieldError, FormErrors, RegistrationField, RegistrationForm, ToteDraft, ToteField};
pub use models::{Profile, Tote, TotePatch};
pub use repo::{KeyValueStore, ProfileRepository};
