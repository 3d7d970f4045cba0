use crate::error::Result;
use crate::model::{Task, TaskId};
use crate::store::DataStore;

/// Looks up a task, applies the mutation, and writes it back.
///
/// Every attribute setter funnels through here so not-found handling lives
/// in exactly one place. The caller validates its argument *before* calling
/// this; the closure only ever sees already-validated values.
pub fn modify_task<S, F>(store: &mut S, id: TaskId, apply: F) -> Result<Task>
where
    S: DataStore,
    F: FnOnce(&mut Task),
{
    let mut task = store.get_task(id)?;
    apply(&mut task);
    store.save_task(&task)?;
    Ok(task)
}
