//! Error types for the store crate.

use thiserror::Error;

use crate::forms::{FormErrors, RegistrationField};

/// Failure to persist the profile document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend cannot be reached at all (e.g. storage disabled in the browser).
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to serialize profile: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The backend rejected the write (quota exceeded and similar).
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Why [`crate::ProfileRepository::register`] did not create a profile.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("registration form is invalid")]
    Invalid(FormErrors<RegistrationField>),
    #[error(transparent)]
    Store(#[from] StoreError),
}
