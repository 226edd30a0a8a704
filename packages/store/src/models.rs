//! # Domain models for the profile document
//!
//! The whole application state is one [`Profile`] document: the local user's
//! name and email plus their ordered collection of [`Tote`]s. It is stored as a
//! single JSON value, so both structs serialise with `camelCase` keys to keep the
//! persisted layout stable:
//!
//! ```json
//! {
//!   "firstName": "Ada",
//!   "lastName": "Lovelace",
//!   "email": "ada@example.com",
//!   "totes": [
//!     {
//!       "id": "0b7c4f2e-5d1a-4c8e-9f3b-2a6d8e1c7b40",
//!       "title": "Groceries",
//!       "content": "<p>milk</p>",
//!       "createdAt": "2024-03-01T09:30:00Z",
//!       "updatedAt": "2024-03-01T09:30:00Z",
//!       "isArchived": false
//!     }
//!   ]
//! }
//! ```
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Profile`] | The single persisted document. Its absence means registration has not happened yet. |
//! | [`Tote`] | One rich-text note. `content` is an HTML string produced by the editor. |
//! | [`TotePatch`] | A partial [`Tote`] used by the edit path; [`TotePatch::apply`] is a shallow merge. |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The local user's profile and notes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Display order is insertion order.
    pub totes: Vec<Tote>,
}

impl Profile {
    /// A freshly registered profile with no notes.
    pub fn new(first_name: String, last_name: String, email: String) -> Self {
        Self {
            first_name,
            last_name,
            email,
            totes: Vec::new(),
        }
    }
}

/// A single note.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tote {
    /// Generated on add; see [`new_tote_id`].
    pub id: String,
    pub title: String,
    /// HTML markup from the rich-text editor.
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Carried in the document but never toggled by any action.
    pub is_archived: bool,
}

/// Fields to overwrite on an existing note. `None` keeps the old value.
///
/// The identifier is deliberately absent: a patch never re-keys a note.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_archived: Option<bool>,
}

impl TotePatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = Some(at);
        self
    }

    /// Shallow merge: supplied fields win.
    pub fn apply(&self, tote: &mut Tote) {
        if let Some(title) = &self.title {
            tote.title = title.clone();
        }
        if let Some(content) = &self.content {
            tote.content = content.clone();
        }
        if let Some(created_at) = self.created_at {
            tote.created_at = created_at;
        }
        if let Some(updated_at) = self.updated_at {
            tote.updated_at = updated_at;
        }
        if let Some(is_archived) = self.is_archived {
            tote.is_archived = is_archived;
        }
    }
}

/// Random v4 UUID in lowercase hyphenated form,
/// `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`.
///
/// Uniqueness within a profile is not checked.
pub fn new_tote_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Tote {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        Tote {
            id: "1".to_string(),
            title: "x".to_string(),
            content: "<p>body</p>".to_string(),
            created_at: at,
            updated_at: at,
            is_archived: false,
        }
    }

    #[test]
    fn test_json_keys_are_camel_case() {
        let mut profile = Profile::new("Ada".into(), "Lovelace".into(), "ada@example.com".into());
        profile.totes.push(sample());

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["lastName"], "Lovelace");
        assert_eq!(value["email"], "ada@example.com");
        let tote = &value["totes"][0];
        assert_eq!(tote["createdAt"], "2024-03-01T09:30:00Z");
        assert_eq!(tote["updatedAt"], "2024-03-01T09:30:00Z");
        assert_eq!(tote["isArchived"], false);
    }

    #[test]
    fn test_reads_javascript_date_strings() {
        let raw = r#"{
            "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com",
            "totes": [{
                "id": "abc", "title": "t", "content": "<p>c</p>",
                "createdAt": "2023-05-04T10:11:12.345Z",
                "updatedAt": "2023-05-04T10:11:12.345Z",
                "isArchived": false
            }]
        }"#;
        let profile: Profile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.totes.len(), 1);
        assert_eq!(profile.totes[0].created_at.timestamp_millis(), 1_683_195_072_345);
    }

    #[test]
    fn test_patch_keeps_absent_fields() {
        let mut tote = sample();
        TotePatch::default().title("y").apply(&mut tote);

        assert_eq!(tote.title, "y");
        assert_eq!(tote.id, "1");
        assert_eq!(tote.content, "<p>body</p>");
        assert!(!tote.is_archived);
    }

    #[test]
    fn test_patch_overwrites_present_fields() {
        let mut tote = sample();
        let later = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        let patch = TotePatch {
            content: Some("<p>new</p>".into()),
            updated_at: Some(later),
            is_archived: Some(true),
            ..Default::default()
        };
        patch.apply(&mut tote);

        assert_eq!(tote.title, "x");
        assert_eq!(tote.content, "<p>new</p>");
        assert_eq!(tote.updated_at, later);
        assert!(tote.is_archived);
    }

    #[test]
    fn test_new_tote_id_layout() {
        let id = new_tote_id();
        let groups: Vec<&str> = id.split('-').collect();
        assert_eq!(
            groups.iter().map(|g| g.len()).collect::<Vec<_>>(),
            vec![8, 4, 4, 4, 12]
        );
        assert!(groups[2].starts_with('4'));
        assert!(matches!(groups[3].chars().next(), Some('8' | '9' | 'a' | 'b')));
        assert!(id.chars().all(|c| c == '-' || c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert_ne!(id, new_tote_id());
    }
}
