//! Pure operations over the note collection.
//!
//! These never touch storage; [`crate::ProfileRepository`] applies them to the
//! in-memory profile and then writes the whole document back.
//!
//! - [`add`] assigns a fresh identifier (overwriting any supplied one) and appends.
//! - [`update`] shallow-merges a [`TotePatch`] into every entry with a matching id.
//! - [`delete`] drops every entry with a matching id; an unknown id is a no-op.

use crate::models::{new_tote_id, Tote, TotePatch};

/// Append `candidate` under a newly generated identifier. Returns the stored note.
pub fn add(totes: &mut Vec<Tote>, mut candidate: Tote) -> &Tote {
    candidate.id = new_tote_id();
    totes.push(candidate);
    &totes[totes.len() - 1]
}

/// Merge `patch` into the note with identifier `id`. Returns how many notes matched.
pub fn update(totes: &mut [Tote], id: &str, patch: &TotePatch) -> usize {
    let mut matched = 0;
    for tote in totes.iter_mut().filter(|t| t.id == id) {
        patch.apply(tote);
        matched += 1;
    }
    matched
}

/// Remove the note with identifier `id`. Returns how many notes were removed.
pub fn delete(totes: &mut Vec<Tote>, id: &str) -> usize {
    let before = totes.len();
    totes.retain(|t| t.id != id);
    before - totes.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn tote(id: &str, title: &str) -> Tote {
        let now = Utc::now();
        Tote {
            id: id.to_string(),
            title: title.to_string(),
            content: format!("<p>{title}</p>"),
            created_at: now,
            updated_at: now,
            is_archived: false,
        }
    }

    #[test]
    fn test_add_to_empty_collection() {
        let mut totes = Vec::new();
        let mut candidate = tote("", "Groceries");
        candidate.content = "<p>milk</p>".into();

        let id = add(&mut totes, candidate).id.clone();

        assert_eq!(totes.len(), 1);
        assert!(!id.is_empty());
        assert_eq!(totes[0].id, id);
        assert_eq!(totes[0].title, "Groceries");
        assert_eq!(totes[0].content, "<p>milk</p>");
    }

    #[test]
    fn test_add_overwrites_supplied_id() {
        let mut totes = Vec::new();
        let stored = add(&mut totes, tote("caller-chosen", "a")).id.clone();
        assert_ne!(stored, "caller-chosen");
        assert!(!stored.is_empty());
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut totes = vec![tote("1", "first")];
        add(&mut totes, tote("", "second"));
        add(&mut totes, tote("", "third"));

        let titles: Vec<&str> = totes.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
        assert_ne!(totes[1].id, totes[2].id);
    }

    #[test]
    fn test_delete_removes_match() {
        let a = tote("1", "a");
        let b = tote("2", "b");
        let mut totes = vec![a, b.clone()];

        assert_eq!(delete(&mut totes, "1"), 1);
        assert_eq!(totes, vec![b]);
    }

    #[test]
    fn test_delete_twice_is_noop() {
        let mut totes = vec![tote("1", "a"), tote("2", "b")];
        delete(&mut totes, "1");
        let after_first = totes.clone();

        assert_eq!(delete(&mut totes, "1"), 0);
        assert_eq!(totes, after_first);
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut totes = vec![tote("1", "a")];
        let before = totes.clone();
        assert_eq!(delete(&mut totes, "nope"), 0);
        assert_eq!(totes, before);
    }

    #[test]
    fn test_update_replaces_only_target() {
        let a = tote("1", "x");
        let b = tote("2", "other");
        let mut totes = vec![a.clone(), b.clone()];

        let matched = update(&mut totes, "1", &TotePatch::default().title("y"));

        assert_eq!(matched, 1);
        assert_eq!(totes[0].id, "1");
        assert_eq!(totes[0].title, "y");
        assert_eq!(totes[0].content, a.content);
        assert_eq!(totes[0].created_at, a.created_at);
        assert_eq!(totes[1], b);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut totes = vec![tote("1", "x")];
        let before = totes.clone();
        assert_eq!(update(&mut totes, "2", &TotePatch::default().title("y")), 0);
        assert_eq!(totes, before);
    }
}
