//! Profile context and hooks for the UI.
//!
//! [`ProfileProvider`] reads the stored profile once on mount and shares it as a
//! [`ProfileHandle`]. Every mutation goes through the handle: it updates the
//! in-memory copy, writes the whole document back, and logs a failed write
//! without rolling the view back.

use chrono::Utc;
use dioxus::prelude::*;
use store::{FormErrors, Profile, RegistrationError, RegistrationField, RegistrationForm, ToteDraft, TotesConfig};

use crate::repo::PlatformStore;
use crate::{load_config, make_repo};

/// Shared profile state. Cheap to copy into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct ProfileHandle {
    profile: Signal<Option<Profile>>,
    config: Signal<TotesConfig>,
}

impl ProfileHandle {
    /// The current profile, or `None` before registration. Subscribes the caller.
    pub fn profile(&self) -> Option<Profile> {
        self.profile.cloned()
    }

    pub fn is_registered(&self) -> bool {
        self.profile.read().is_some()
    }

    /// Body for new notes and cleared editors.
    pub fn placeholder(&self) -> String {
        self.config.read().editor.placeholder.clone()
    }

    /// Validate and store the sign-up form. Returns the field errors to show inline.
    pub fn register(&mut self, form: &RegistrationForm) -> Result<(), FormErrors<RegistrationField>> {
        let repo = make_repo(&self.config.peek());
        match repo.register(form) {
            Ok(profile) => {
                self.profile.set(Some(profile));
                Ok(())
            }
            Err(RegistrationError::Invalid(errors)) => Err(errors),
            Err(RegistrationError::Store(e)) => {
                // The profile still exists for this session.
                tracing::error!("failed to save new profile: {e}");
                self.profile.set(Some(Profile::new(
                    form.first_name.clone(),
                    form.last_name.clone(),
                    form.email.clone(),
                )));
                Ok(())
            }
        }
    }

    /// Add a note built from `draft`.
    pub fn add(&mut self, draft: ToteDraft) {
        let candidate = draft.into_tote(Utc::now());
        self.mutate(|repo, profile| repo.add_tote(profile, candidate).map(|_| ()));
    }

    /// Overwrite the note `id` with the fields of `draft`.
    pub fn update(&mut self, id: &str, draft: ToteDraft) {
        let patch = draft.into_patch(Utc::now());
        self.mutate(|repo, profile| repo.update_tote(profile, id, &patch));
    }

    /// Remove the note `id`.
    pub fn delete(&mut self, id: &str) {
        self.mutate(|repo, profile| repo.delete_tote(profile, id));
    }

    fn mutate<F>(&mut self, op: F)
    where
        F: FnOnce(&store::ProfileRepository<PlatformStore>, &mut Profile) -> Result<(), store::StoreError>,
    {
        let Some(mut next) = self.profile.peek().clone() else {
            tracing::warn!("ignoring note change without a profile");
            return;
        };
        let repo = make_repo(&self.config.peek());
        let result = op(&repo, &mut next);
        self.profile.set(Some(next));
        if let Err(e) = result {
            tracing::error!("failed to save profile: {e}");
        }
    }
}

/// Get the shared profile handle.
pub fn use_profile() -> ProfileHandle {
    use_context::<ProfileHandle>()
}

/// Provider component that loads the profile and shares it with the tree.
/// Wrap your app with this component.
#[component]
pub fn ProfileProvider(children: Element) -> Element {
    let config = use_signal(load_config);
    let profile = use_signal(|| {
        let repo = make_repo(&config.peek());
        let profile = repo.load();
        tracing::info!(key = repo.key(), registered = profile.is_some(), "loaded profile");
        profile
    });

    use_context_provider(|| ProfileHandle { profile, config });

    rsx! {
        {children}
    }
}
