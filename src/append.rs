//! Append engine for daily notes

use crate::daily::NoteId;
use crate::host::NoteStore;
use anyhow::Result;

/// Append `lines` to the end of `note`, each terminated by one line break.
///
/// Lines are written one at a time in input order, so a failure partway
/// through leaves every earlier line durably appended and nothing after it.
/// Content already in the note is never overwritten or reordered. An empty
/// slice is a no-op that performs no store call.
pub async fn append_lines(store: &dyn NoteStore, note: &NoteId, lines: &[String]) -> Result<()> {
    for line in lines {
        store.append(note, &format!("{line}\n")).await?;
    }
    Ok(())
}
