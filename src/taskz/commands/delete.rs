use log::debug;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TaskId;
use crate::store::DataStore;

/// Removes a task permanently. The freed ID is never reassigned and the
/// remaining tasks keep theirs.
pub fn run<S: DataStore>(store: &mut S, id: TaskId) -> Result<CmdResult> {
    let task = store.get_task(id)?;
    store.delete_task(id)?;
    debug!("deleted task {}", id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task deleted (ID: {}): {}",
        id, task.title
    )));
    result.affected_tasks.push(task);
    Ok(result)
}
