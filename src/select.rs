//! Interactive selection workflow
//!
//! A selection request pairs the scanned candidate tasks with the label of
//! their destination and a completion channel that is satisfied exactly once.
//! The request is handed to the host's picker UI; the workflow suspends until
//! the user confirms a subset or dismisses the prompt. Each request runs
//! through `Idle -> Awaiting-User-Input -> {Resolved | Cancelled}` and is
//! then discarded; a fresh command starts a fresh request.

use crate::host::{Notifier, TaskPicker};
use log::debug;
use tokio::sync::oneshot;

/// Terminal outcome of one selection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The user confirmed a subset of the candidates (possibly empty).
    Confirmed(Vec<String>),
    /// The prompt was dismissed without confirming a choice.
    Dismissed,
}

/// One in-flight request for the user to pick tasks.
///
/// Settled by exactly one of [`confirm`](Self::confirm) or
/// [`dismiss`](Self::dismiss), both of which consume the request. Dropping it
/// unsettled reads as a dismissal on the awaiting side, so a picker that
/// forgets to answer cannot hang the workflow.
#[derive(Debug)]
pub struct SelectionRequest {
    candidates: Vec<String>,
    label: String,
    reply: oneshot::Sender<SelectionOutcome>,
}

impl SelectionRequest {
    pub(crate) fn new(
        candidates: Vec<String>,
        label: impl Into<String>,
    ) -> (Self, oneshot::Receiver<SelectionOutcome>) {
        let (reply, settled) = oneshot::channel();
        let request = Self {
            candidates,
            label: label.into(),
            reply,
        };
        (request, settled)
    }

    /// Candidate task lines, in document order.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Human-readable destination label, e.g. `"today's tasks"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Settle the request with the user's chosen subset.
    pub fn confirm(self, chosen: Vec<String>) {
        // The awaiting command may already be gone; its loss, not an error.
        let _ = self.reply.send(SelectionOutcome::Confirmed(chosen));
    }

    /// Settle the request as dismissed without a choice.
    pub fn dismiss(self) {
        let _ = self.reply.send(SelectionOutcome::Dismissed);
    }
}

/// Run the choose-then-commit step over `candidates`.
///
/// With no candidates the prompt is never opened: the user gets a single
/// notification and the workflow resolves immediately to an empty
/// confirmation. Otherwise a [`SelectionRequest`] is handed to `picker` and
/// the call suspends, with no timeout, until the user settles it.
pub async fn select_tasks(
    picker: &dyn TaskPicker,
    notifier: &dyn Notifier,
    candidates: Vec<String>,
    label: &str,
) -> SelectionOutcome {
    if candidates.is_empty() {
        notifier.notify(&format!("No open tasks to pick for {label}"));
        return SelectionOutcome::Confirmed(Vec::new());
    }

    let (request, settled) = SelectionRequest::new(candidates, label);
    picker.open(request);
    match settled.await {
        Ok(outcome) => outcome,
        Err(_) => {
            debug!("selection prompt for {label} went away without an answer");
            SelectionOutcome::Dismissed
        }
    }
}
