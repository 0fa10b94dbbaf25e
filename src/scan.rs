//! Open-task recognition and document scanning
//!
//! A task line is an unchecked Markdown checklist item: optional leading
//! whitespace followed by the literal `- [ ]` marker. Checked items and
//! non-list lines are not task lines.

use crate::host::EditorView;
use once_cell::sync::Lazy;
use regex::Regex;

static OPEN_TASK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*- \[ \]").expect("valid open task regex"));

/// Check whether `line` is an open checklist item.
pub fn is_open_task(line: &str) -> bool {
    OPEN_TASK_RE.is_match(line)
}

/// Collect all open checklist items in the document, in document order.
///
/// Line indices are walked in ascending order and lines the editor reports as
/// absent are skipped, so the result is an order-preserving subsequence of
/// the document's lines. An empty result is a valid outcome, not an error.
pub fn scan_open_tasks(editor: &dyn EditorView) -> Vec<String> {
    (0..editor.line_count())
        .filter_map(|index| editor.line(index))
        .filter(|line| is_open_task(line))
        .collect()
}
