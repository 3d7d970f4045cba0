use crate::model::{Task, TaskId};

pub mod add;
pub mod delete;
pub mod filter;
pub mod helpers;
pub mod list;
pub mod priority;
pub mod recurrence;
pub mod search;
pub mod sort;
pub mod status;
pub mod tagging;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// The uniform outcome of every command.
///
/// Mutating commands put the records they touched in `affected_tasks`; query
/// commands fill `listed_tasks`; `add` additionally reports the new ID in
/// `created_id`. `messages` carry display-ready text, including secondary
/// warnings on otherwise successful operations.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_tasks: Vec<Task>,
    pub listed_tasks: Vec<Task>,
    pub created_id: Option<TaskId>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.affected_tasks = tasks;
        self
    }

    pub fn with_listed_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.listed_tasks = tasks;
        self
    }

    pub fn with_created_id(mut self, id: TaskId) -> Self {
        self.created_id = Some(id);
        self
    }
}
