//! Typed form records and their validation.
//!
//! Each form in the UI binds to one record here. Validation returns every
//! failing field at once as a [`FormErrors`] map so the UI can show the reasons
//! inline next to each input.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::content::DEFAULT_PLACEHOLDER_HTML;
use crate::models::{Tote, TotePatch};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid email regex"));
static CAPITALIZED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]").expect("valid name regex"));

/// Reason a single field was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("First letter must be capitalized")]
    NotCapitalized,
    #[error("Title is required")]
    Required,
}

/// Field-level validation failures, keyed by field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormErrors<F: Ord> {
    errors: BTreeMap<F, FieldError>,
}

impl<F: Ord> Default for FormErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> FormErrors<F> {
    pub fn insert(&mut self, field: F, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: F) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistrationField {
    FirstName,
    LastName,
    Email,
}

/// The sign-up form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), FormErrors<RegistrationField>> {
        let mut errors = FormErrors::default();
        if !CAPITALIZED_RE.is_match(&self.first_name) {
            errors.insert(RegistrationField::FirstName, FieldError::NotCapitalized);
        }
        if !CAPITALIZED_RE.is_match(&self.last_name) {
            errors.insert(RegistrationField::LastName, FieldError::NotCapitalized);
        }
        if !EMAIL_RE.is_match(&self.email) {
            errors.insert(RegistrationField::Email, FieldError::InvalidEmail);
        }
        errors.into_result()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ToteField {
    Title,
}

/// The add/edit note form.
#[derive(Clone, Debug, PartialEq)]
pub struct ToteDraft {
    pub title: String,
    /// Latest editor output.
    pub content: String,
}

impl Default for ToteDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl ToteDraft {
    /// Blank draft with the placeholder body.
    pub fn new() -> Self {
        Self::with_placeholder(DEFAULT_PLACEHOLDER_HTML)
    }

    pub fn with_placeholder(placeholder: &str) -> Self {
        Self {
            title: String::new(),
            content: placeholder.to_string(),
        }
    }

    /// Draft prefilled from an existing note.
    pub fn from_tote(tote: &Tote) -> Self {
        Self {
            title: tote.title.clone(),
            content: tote.content.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), FormErrors<ToteField>> {
        let mut errors = FormErrors::default();
        if self.title.is_empty() {
            errors.insert(ToteField::Title, FieldError::Required);
        }
        errors.into_result()
    }

    /// Candidate for the add path. The id is left empty; add assigns it.
    pub fn into_tote(self, now: DateTime<Utc>) -> Tote {
        Tote {
            id: String::new(),
            title: self.title,
            content: self.content,
            created_at: now,
            updated_at: now,
            is_archived: false,
        }
    }

    /// Patch for the edit path, stamped with the submission time.
    pub fn into_patch(self, now: DateTime<Utc>) -> TotePatch {
        TotePatch::default()
            .title(self.title)
            .content(self.content)
            .updated_at(now)
    }
}
