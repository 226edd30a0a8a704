//! # Repository: the profile document on an abstract key-value store
//!
//! Totes keeps all of its state in one JSON document stored under a single key
//! (`"accountData"` by default). [`ProfileRepository`] owns that document's
//! lifecycle; the bytes go through the [`KeyValueStore`] trait so the same logic
//! runs against the browser's `localStorage`, a file on desktop, or memory in tests.
//!
//! ## [`KeyValueStore`] trait
//!
//! Two synchronous methods: `get` returns the raw string under a key (or `None`),
//! `set` overwrites it. Implementations live in sibling modules
//! ([`crate::memory`], [`crate::file_store`], and the `local_storage` module on web).
//!
//! ## Read path
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`load`](ProfileRepository::load) | Deserialises the stored document. Absent and unparseable are both `None`, which the UI treats as "not registered yet". |
//!
//! ## Write path
//!
//! Every write serialises the **whole** profile and overwrites the key; there is no
//! partial or merged update. The note operations first mutate the caller's
//! in-memory profile via [`crate::totes`], then save it. A failed save is reported
//! but the in-memory change stays, so the UI keeps showing what the user did.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`save`](ProfileRepository::save) | Overwrites the stored document. |
//! | [`register`](ProfileRepository::register) | Validates a [`RegistrationForm`] and stores a profile with no notes. |
//! | [`add_tote`](ProfileRepository::add_tote) | Appends a note under a fresh identifier. |
//! | [`update_tote`](ProfileRepository::update_tote) | Shallow-merges a [`TotePatch`] into the matching note. |
//! | [`delete_tote`](ProfileRepository::delete_tote) | Removes the matching note; unknown ids change nothing. |
//!
//! Concurrent writers (two browser tabs) are not arbitrated: the last save wins.

use crate::error::{RegistrationError, StoreError};
use crate::forms::RegistrationForm;
use crate::models::{Profile, Tote, TotePatch};
use crate::totes;

/// Key the profile document lives under unless configured otherwise.
pub const DEFAULT_PROFILE_KEY: &str = "accountData";

/// Synchronous string storage keyed by name.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// The profile document backed by a KeyValueStore.
pub struct ProfileRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ProfileRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_PROFILE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored profile, if any.
    pub fn load(&self) -> Option<Profile> {
        let raw = self.store.get(&self.key)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!(key = %self.key, "ignoring unreadable profile document: {e}");
                None
            }
        }
    }

    /// Overwrite the stored profile.
    pub fn save(&self, profile: &Profile) -> Result<(), StoreError> {
        let raw = serde_json::to_string(profile)?;
        self.store.set(&self.key, &raw)
    }

    /// Validate the sign-up form and store the initial profile.
    pub fn register(&self, form: &RegistrationForm) -> Result<Profile, RegistrationError> {
        form.validate().map_err(RegistrationError::Invalid)?;
        let profile = Profile::new(
            form.first_name.clone(),
            form.last_name.clone(),
            form.email.clone(),
        );
        self.save(&profile)?;
        tracing::info!("registered local profile");
        Ok(profile)
    }

    /// Append `candidate` under a fresh identifier and persist.
    pub fn add_tote(&self, profile: &mut Profile, candidate: Tote) -> Result<Tote, StoreError> {
        let stored = totes::add(&mut profile.totes, candidate).clone();
        tracing::info!(id = %stored.id, count = profile.totes.len(), "added tote");
        self.save(profile)?;
        Ok(stored)
    }

    /// Merge `patch` into the note `id` and persist.
    pub fn update_tote(
        &self,
        profile: &mut Profile,
        id: &str,
        patch: &TotePatch,
    ) -> Result<(), StoreError> {
        let matched = totes::update(&mut profile.totes, id, patch);
        tracing::info!(%id, matched, "updated tote");
        self.save(profile)
    }

    /// Remove the note `id` and persist.
    pub fn delete_tote(&self, profile: &mut Profile, id: &str) -> Result<(), StoreError> {
        let removed = totes::delete(&mut profile.totes, id);
        tracing::info!(%id, removed, count = profile.totes.len(), "deleted tote");
        self.save(profile)
    }
}
