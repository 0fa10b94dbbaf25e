//! Date keys and daily note resolution
//!
//! Every daily note is addressed by a calendar day. Resolution looks the date
//! up in the host's note index and falls back to creating the note, so the
//! first write for a day brings its note into existence.

use crate::host::NoteStore;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::fmt;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Opaque identity of a daily note within the host's note store.
///
/// The wrapped string is host-defined (typically a vault path). Two equal
/// `NoteId`s denote the same note.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Find the daily note for `date`, creating it when none exists yet.
///
/// # Arguments
/// * `store` - Note store capability of the host
/// * `date` - Calendar day the note is keyed by
///
/// # Returns
/// Identity of the existing or newly created note. Looking up an existing
/// note performs no write; creation failures are propagated untouched.
pub async fn resolve_daily_note(store: &dyn NoteStore, date: NaiveDate) -> Result<NoteId> {
    let notes = store.daily_notes();
    if let Some(note) = notes.get(&date) {
        return Ok(note.clone());
    }
    store.create_daily_note(date).await
}
