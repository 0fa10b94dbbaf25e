//! Capability traits implemented by the embedding host
//!
//! The routing core owns no document model, no storage, and no UI. Everything
//! it needs from the host application comes through one of the traits in this
//! module. Hosts implement them over their own editor, vault, and widget
//! machinery; the tests implement them over in-memory fakes.

use crate::command::CommandSpec;
use crate::daily::NoteId;
use crate::select::SelectionRequest;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Read access to the document open in the host editor.
///
/// The host owns and mutates the document; this core only reads it.
pub trait EditorView {
    /// Total number of lines in the document.
    fn line_count(&self) -> usize;

    /// Text of the line at `index`, or `None` when the index is out of range.
    fn line(&self, index: usize) -> Option<String>;

    /// Index of the line the cursor is on.
    fn cursor_line(&self) -> usize;

    /// Currently selected text, or `None` when nothing is selected.
    ///
    /// An empty selection reads as `None`.
    fn selection(&self) -> Option<String>;
}

/// Store of daily notes, keyed by calendar date.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// All known daily notes with their date keys.
    fn daily_notes(&self) -> HashMap<NaiveDate, NoteId>;

    /// Create the daily note for `date` and return its identity.
    ///
    /// Applying a new-note template, picking the note's location, and
    /// de-duplicating racing creations for the same date are the host's
    /// concerns.
    async fn create_daily_note(&self, date: NaiveDate) -> Result<NoteId>;

    /// Append `text` exactly as given to the end of `note`.
    ///
    /// Existing note content must be left untouched ahead of the new text.
    async fn append(&self, note: &NoteId, text: &str) -> Result<()>;
}

/// Short informational messages shown to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Interactive multi-select prompt.
///
/// `open` hands the request to the host UI and returns immediately; the UI
/// settles it later through [`SelectionRequest::confirm`] or
/// [`SelectionRequest::dismiss`]. Closing the widget once the request is
/// settled is the picker's duty.
pub trait TaskPicker: Send + Sync {
    fn open(&self, request: SelectionRequest);
}

/// Command registration with the host.
///
/// The host records each spec and later invokes the matching command (looked
/// up by id) when the user triggers it.
pub trait CommandRegistry {
    fn register(&mut self, spec: CommandSpec);
}
