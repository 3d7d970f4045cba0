//! # Task Completion Commands
//!
//! - [`complete`]: marks a task complete, spawning the next occurrence of a
//!   recurring task
//! - [`reopen`]: marks a task incomplete again
//!
//! Both directions are idempotent: setting the state already in effect
//! still succeeds and reports success.

use log::warn;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TaskId;
use crate::schedule::{self, RecurrenceAnchor};
use crate::store::DataStore;

/// Marks a task as complete.
///
/// Only the incomplete-to-complete transition of a recurring task spawns
/// the next occurrence; re-completing an already complete task must not
/// duplicate it. Spawning is best-effort: when it fails the completion
/// still succeeds and the failure is reported as a warning.
pub fn complete<S: DataStore>(
    store: &mut S,
    id: TaskId,
    anchor: RecurrenceAnchor,
) -> Result<CmdResult> {
    let mut task = store.get_task(id)?;
    let was_completed = task.completed;

    task.completed = true;
    store.save_task(&task)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task marked as complete (ID: {})",
        id
    )));

    if !was_completed {
        match schedule::spawn_next(store, &task, anchor) {
            Ok(Some(new_id)) => {
                result.add_message(CmdMessage::info(format!(
                    "Next occurrence created (ID: {})",
                    new_id
                )));
            }
            Ok(None) => {}
            Err(err) => {
                warn!("next occurrence of task {} not created: {}", id, err);
                result.add_message(CmdMessage::warning(format!(
                    "Task completed, but the next occurrence could not be created: {}",
                    err
                )));
            }
        }
    }

    result.affected_tasks.push(task);
    Ok(result)
}

/// Marks a task as incomplete again. Recurrence state is left alone; the
/// next completion will spawn a fresh occurrence.
pub fn reopen<S: DataStore>(store: &mut S, id: TaskId) -> Result<CmdResult> {
    let mut task = store.get_task(id)?;
    task.completed = false;
    store.save_task(&task)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task marked as incomplete (ID: {})",
        id
    )));
    result.affected_tasks.push(task);
    Ok(result)
}
