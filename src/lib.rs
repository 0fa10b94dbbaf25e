//! Daily task routing core
//!
//! This library is the engine of a note-taking plugin that copies open
//! checklist items out of the note being edited and into date-keyed daily
//! notes. It recognizes unchecked `- [ ]` lines, resolves a calendar day to
//! its daily note (creating the note on first use), appends the captured
//! lines, and threads an optional interactive pick-the-tasks step through an
//! asynchronous choose-then-commit workflow.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Command Layer**: [`TaskRouter`] - binds the user-invocable commands to
//!   the routing pipeline
//! - **Domain Layer**: `scan`, `daily`, `append`, `select` modules - task
//!   matching, date resolution, appends, and the selection workflow
//! - **Host Layer**: `host` module - capability traits the embedding
//!   application implements over its editor, note store, and UI
//!
//! The host instantiates one [`TaskRouter`], registers its command specs, and
//! invokes [`TaskRouter::run`] with the active editor whenever the user
//! triggers one of the commands.

mod append;
mod command;
mod config;
mod daily;
mod host;
mod scan;
mod select;

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use log::{debug, info};
use std::sync::Arc;

// Re-export commonly used types
pub use append::append_lines;
pub use command::{Command, CommandSpec};
pub use config::Settings;
pub use daily::{NoteId, local_date_today, resolve_daily_note};
pub use host::{CommandRegistry, EditorView, NoteStore, Notifier, TaskPicker};
pub use scan::{is_open_task, scan_open_tasks};
pub use select::{SelectionOutcome, SelectionRequest, select_tasks};

/// Routing handler binding the plugin commands to the host capabilities.
///
/// Owns the host-side collaborators for the lifetime of the plugin and runs
/// one command invocation at a time through capture/scan, optional selection,
/// daily note resolution, and append.
pub struct TaskRouter {
    store: Arc<dyn NoteStore>,
    notifier: Arc<dyn Notifier>,
    picker: Arc<dyn TaskPicker>,
    settings: Settings,
}

impl TaskRouter {
    /// Create a router with default settings.
    ///
    /// # Arguments
    /// * `store` - Daily note lookup, creation, and append capability
    /// * `notifier` - Short informational messages to the user
    /// * `picker` - Interactive multi-select prompt
    pub fn new(
        store: Arc<dyn NoteStore>,
        notifier: Arc<dyn Notifier>,
        picker: Arc<dyn TaskPicker>,
    ) -> Self {
        Self::with_settings(store, notifier, picker, Settings::default())
    }

    /// Create a router with explicit settings.
    pub fn with_settings(
        store: Arc<dyn NoteStore>,
        notifier: Arc<dyn Notifier>,
        picker: Arc<dyn TaskPicker>,
        settings: Settings,
    ) -> Self {
        Self {
            store,
            notifier,
            picker,
            settings,
        }
    }

    /// Settings the router was created with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Register all command specs with the host.
    pub fn register_commands(&self, registry: &mut dyn CommandRegistry) {
        for command in Command::ALL {
            registry.register(command.spec());
        }
    }

    /// Run `command` against the active editor, dated from the local day.
    pub async fn run(&self, command: Command, editor: &dyn EditorView) -> Result<()> {
        self.run_on(command, editor, local_date_today()).await
    }

    /// Run `command` with an explicit base date.
    ///
    /// `today` is the day the "today" commands target; the "tomorrow"
    /// commands target the day after it.
    pub async fn run_on(
        &self,
        command: Command,
        editor: &dyn EditorView,
        today: NaiveDate,
    ) -> Result<()> {
        debug!("running command {}", command.id());
        let tomorrow = today + Duration::days(1);
        match command {
            Command::AddTaskToday => self.add_capture(editor, today).await,
            Command::AddTaskTomorrow => self.add_capture(editor, tomorrow).await,
            Command::SelectTasksToday => self.select_into(editor, today, "today's tasks").await,
            Command::SelectTasksTomorrow => {
                self.select_into(editor, tomorrow, "tomorrow's tasks").await
            }
        }
    }

    /// Copy the selection, or the cursor line, into the daily note for `date`.
    ///
    /// The captured text is taken verbatim; it does not have to be a task
    /// line.
    async fn add_capture(&self, editor: &dyn EditorView, date: NaiveDate) -> Result<()> {
        let text = match editor.selection() {
            Some(selection) => selection,
            None => editor.line(editor.cursor_line()).unwrap_or_default(),
        };

        let note = resolve_daily_note(self.store.as_ref(), date).await?;
        append_lines(self.store.as_ref(), &note, std::slice::from_ref(&text)).await?;
        info!("appended captured text to {note}");
        Ok(())
    }

    /// Scan the document for open tasks, let the user pick a subset, and
    /// append the picked lines to the daily note for `date`.
    async fn select_into(
        &self,
        editor: &dyn EditorView,
        date: NaiveDate,
        label: &str,
    ) -> Result<()> {
        let candidates = scan_open_tasks(editor);
        let outcome = select_tasks(
            self.picker.as_ref(),
            self.notifier.as_ref(),
            candidates,
            label,
        )
        .await;

        let chosen = match outcome {
            SelectionOutcome::Confirmed(lines) => lines,
            SelectionOutcome::Dismissed => {
                debug!("selection for {label} dismissed");
                return Ok(());
            }
        };
        if chosen.is_empty() {
            // Nothing approved; resolving now would create a note for nothing.
            return Ok(());
        }

        let note = resolve_daily_note(self.store.as_ref(), date).await?;
        append_lines(self.store.as_ref(), &note, &chosen).await?;
        info!("appended {} task(s) to {note}", chosen.len());
        Ok(())
    }
}
