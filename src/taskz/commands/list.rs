use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Returns every task in canonical ascending-ID order.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let tasks = store.list_tasks()?;
    Ok(CmdResult::default().with_listed_tasks(tasks))
}
