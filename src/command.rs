//! User-invocable commands
//!
//! The four actions the host can bind to its command palette. Each command
//! carries a stable id, a display name, and whether it needs an active text
//! editor; the host registers the specs once and later invokes the matching
//! command by id.

/// A user-invocable action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Append the selection (or the cursor line) to today's daily note.
    AddTaskToday,
    /// Append the selection (or the cursor line) to tomorrow's daily note.
    AddTaskTomorrow,
    /// Pick open tasks from the whole document for today's daily note.
    SelectTasksToday,
    /// Pick open tasks from the whole document for tomorrow's daily note.
    SelectTasksTomorrow,
}

impl Command {
    /// All commands, in palette order.
    pub const ALL: [Command; 4] = [
        Command::AddTaskToday,
        Command::AddTaskTomorrow,
        Command::SelectTasksToday,
        Command::SelectTasksTomorrow,
    ];

    /// Stable identifier the command is registered under.
    pub fn id(self) -> &'static str {
        match self {
            Command::AddTaskToday => "add-task-today",
            Command::AddTaskTomorrow => "add-task-tomorrow",
            Command::SelectTasksToday => "select-tasks-today",
            Command::SelectTasksTomorrow => "select-tasks-tomorrow",
        }
    }

    /// Display name shown in the host's command palette.
    pub fn name(self) -> &'static str {
        match self {
            Command::AddTaskToday => "Add Task to Today",
            Command::AddTaskTomorrow => "Add Task to Tomorrow",
            Command::SelectTasksToday => "Select Tasks for Today",
            Command::SelectTasksTomorrow => "Select Tasks for Tomorrow",
        }
    }

    /// Whether the command needs an active text editor to run.
    pub fn requires_editor(self) -> bool {
        // Every command reads the current document.
        true
    }

    /// Look a command up by its registered identifier.
    pub fn from_id(id: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|command| command.id() == id)
    }

    /// Registration data handed to the host.
    pub fn spec(self) -> CommandSpec {
        CommandSpec {
            id: self.id(),
            name: self.name(),
            requires_editor: self.requires_editor(),
        }
    }
}

/// Registration data for one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub requires_editor: bool,
}
