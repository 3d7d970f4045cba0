use log::debug;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Task;
use crate::store::{self, DataStore};
use crate::validate;

/// Creates a task from raw field values.
///
/// All supplied fields are validated before anything else happens; a full
/// store rejects the create without mutating state or burning an ID.
pub fn run<S: DataStore>(
    store: &mut S,
    title: &str,
    description: Option<&str>,
    priority: Option<&str>,
    tags: Option<&str>,
) -> Result<CmdResult> {
    let title = validate::title(title)?;
    let description = validate::description(description)?;
    let priority = priority.map(validate::priority).transpose()?;
    let tags = tags.map(validate::tags).transpose()?;

    store::ensure_capacity(store)?;

    let id = store.allocate_id();
    let mut task = Task::new(id, title, description);
    if let Some(priority) = priority {
        task.priority = priority;
    }
    if let Some(tags) = tags {
        task.tags = tags;
    }
    store.save_task(&task)?;
    debug!("created task {}: {}", id, task.title);

    let mut result = CmdResult::default().with_created_id(id);
    result.add_message(CmdMessage::success(format!(
        "Task created (ID: {}): {}",
        id, task.title
    )));
    result.affected_tasks.push(task);
    Ok(result)
}
