use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TaskId;
use crate::store::DataStore;
use crate::validate;

use super::helpers::modify_task;

/// Sets a task's priority from a raw string, case-insensitively.
pub fn run<S: DataStore>(store: &mut S, id: TaskId, raw: &str) -> Result<CmdResult> {
    let priority = validate::priority(raw)?;
    let task = modify_task(store, id, |task| task.priority = priority)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task priority set to {} (ID: {})",
        priority, id
    )));
    result.affected_tasks.push(task);
    Ok(result)
}
