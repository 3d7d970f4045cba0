use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Priority;
use crate::store::DataStore;

/// Criteria for narrowing the task list.
///
/// Supplied criteria combine with AND semantics; a task must satisfy every
/// one of them. `None` criteria are ignored, so the default filter returns
/// the full set.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub tag: Option<String>,
}

pub fn run<S: DataStore>(store: &S, filter: &TaskFilter) -> Result<CmdResult> {
    // Stored tags are lowercase, so one lowered needle compares directly.
    let tag = filter.tag.as_ref().map(|t| t.trim().to_lowercase());
    let tasks = store.list_tasks()?;

    let matched: Vec<_> = tasks
        .into_iter()
        .filter(|task| {
            filter.completed.map_or(true, |c| task.completed == c)
                && filter.priority.map_or(true, |p| task.priority == p)
                && tag.as_ref().map_or(true, |t| task.tags.iter().any(|x| x == t))
        })
        .collect();

    Ok(CmdResult::default().with_listed_tasks(matched))
}
