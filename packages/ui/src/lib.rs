//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod repo;
pub use repo::{load_config, make_repo, PlatformStore};

pub mod views;

pub const TOTES_CSS: Asset = asset!("/assets/totes.css");

mod profile;
pub use profile::{use_profile, ProfileHandle, ProfileProvider};

mod registration_gate;
pub use registration_gate::RegistrationGate;

pub mod rich_text_editor;
pub use rich_text_editor::RichTextEditor;

mod tote_form;
pub use tote_form::ToteForm;

mod tote_card;
pub use tote_card::ToteCard;
