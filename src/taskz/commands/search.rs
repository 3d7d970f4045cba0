use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Case-insensitive substring search over titles and descriptions.
///
/// A blank keyword matches every task (the empty string is a substring of
/// everything). Results keep canonical ascending-ID order; no match is an
/// empty list, not an error.
pub fn run<S: DataStore>(store: &S, keyword: &str) -> Result<CmdResult> {
    let keyword = keyword.trim().to_lowercase();
    let tasks = store.list_tasks()?;

    let matched: Vec<_> = tasks
        .into_iter()
        .filter(|task| {
            task.title.to_lowercase().contains(&keyword)
                || task.description.to_lowercase().contains(&keyword)
        })
        .collect();

    Ok(CmdResult::default().with_listed_tasks(matched))
}
