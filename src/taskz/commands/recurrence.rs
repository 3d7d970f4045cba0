use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TaskId;
use crate::store::DataStore;
use crate::validate;

use super::helpers::modify_task;

/// Sets or clears a task's recurrence rule.
///
/// A pattern of "none" (or blank) clears the rule. Any change resets the
/// task's scheduled date; the recurrence engine stamps a fresh one on the
/// next spawned occurrence.
pub fn run<S: DataStore>(
    store: &mut S,
    id: TaskId,
    pattern: &str,
    interval: Option<u32>,
) -> Result<CmdResult> {
    let rule = validate::recurrence(pattern, interval)?;

    let task = modify_task(store, id, |task| {
        task.recurrence = rule;
        task.next_occurrence = None;
    })?;

    let mut result = CmdResult::default();
    let message = match rule {
        Some(rule) => format!("Task {} recurrence set to {}", id, rule.pattern),
        None => format!("Task {} recurrence removed", id),
    };
    result.add_message(CmdMessage::success(message));
    result.affected_tasks.push(task);
    Ok(result)
}
