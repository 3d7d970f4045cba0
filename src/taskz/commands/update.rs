use log::debug;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TaskId;
use crate::store::DataStore;
use crate::validate;

use super::helpers::modify_task;

/// Rewrites a task's title and/or description.
///
/// Fields that are omitted or blank keep their current value; fields that
/// are present are validated exactly as on create.
pub fn run<S: DataStore>(
    store: &mut S,
    id: TaskId,
    new_title: Option<&str>,
    new_description: Option<&str>,
) -> Result<CmdResult> {
    let new_title = match new_title {
        Some(t) if !t.trim().is_empty() => Some(validate::title(t)?),
        _ => None,
    };
    let new_description = match new_description {
        Some(d) if !d.trim().is_empty() => Some(validate::description(Some(d))?),
        _ => None,
    };

    let task = modify_task(store, id, |task| {
        if let Some(title) = new_title {
            task.title = title;
        }
        if let Some(description) = new_description {
            task.description = description;
        }
    })?;
    debug!("updated task {}", id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task updated (ID: {}): {}",
        id, task.title
    )));
    result.affected_tasks.push(task);
    Ok(result)
}
