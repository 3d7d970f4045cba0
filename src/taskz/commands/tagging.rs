//! Task tagging commands.
//!
//! Tags arrive as one comma-separated string and are normalized (trimmed,
//! lowercased, de-duplicated) before they touch a task, so stored tags can
//! always be compared directly.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TaskId;
use crate::store::DataStore;
use crate::validate;

use super::helpers::modify_task;

/// Adds tags to a task. Tags the task already carries are skipped, keeping
/// the stored list duplicate-free in first-added order.
pub fn add<S: DataStore>(store: &mut S, id: TaskId, raw: &str) -> Result<CmdResult> {
    let tags = validate::tags(raw)?;

    let task = modify_task(store, id, |task| {
        for tag in &tags {
            if !task.tags.contains(tag) {
                task.tags.push(tag.clone());
            }
        }
    })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Tags added to task {}", id)));
    result.affected_tasks.push(task);
    Ok(result)
}

/// Removes tags from a task. Tags the task does not carry are silently
/// ignored.
pub fn remove<S: DataStore>(store: &mut S, id: TaskId, raw: &str) -> Result<CmdResult> {
    let tags = validate::tags(raw)?;

    let task = modify_task(store, id, |task| {
        task.tags.retain(|t| !tags.contains(t));
    })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Tags removed from task {}",
        id
    )));
    result.affected_tasks.push(task);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskzError;
    use crate::model::TAG_MAX_CHARS;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::validate::ValidationError;

    #[test]
    fn adds_normalized_tags() {
        let mut fixture = StoreFixture::new().with_task("Task");
        let result = add(&mut fixture.store, 1, "Work, URGENT, work").unwrap();

        assert_eq!(result.affected_tasks[0].tags, vec!["work", "urgent"]);
    }

    #[test]
    fn add_skips_tags_already_present() {
        let mut fixture = StoreFixture::new().with_task("Task");
        add(&mut fixture.store, 1, "work").unwrap();
        add(&mut fixture.store, 1, "Work, home").unwrap();

        assert_eq!(fixture.store.get_task(1).unwrap().tags, vec!["work", "home"]);
    }

    #[test]
    fn remove_drops_only_named_tags() {
        let mut fixture = StoreFixture::new().with_task("Task");
        add(&mut fixture.store, 1, "work, home, errands").unwrap();
        remove(&mut fixture.store, 1, "HOME").unwrap();

        assert_eq!(
            fixture.store.get_task(1).unwrap().tags,
            vec!["work", "errands"]
        );
    }

    #[test]
    fn remove_ignores_absent_tags() {
        let mut fixture = StoreFixture::new().with_task("Task");
        add(&mut fixture.store, 1, "work").unwrap();
        let result = remove(&mut fixture.store, 1, "nonexistent").unwrap();

        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Success
        ));
        assert_eq!(fixture.store.get_task(1).unwrap().tags, vec!["work"]);
    }

    #[test]
    fn oversized_tag_rejects_the_whole_input() {
        let mut fixture = StoreFixture::new().with_task("Task");
        let long_tag = "x".repeat(TAG_MAX_CHARS + 1);
        let result = add(&mut fixture.store, 1, &format!("ok, {}", long_tag));

        assert!(matches!(
            result,
            Err(TaskzError::Validation(ValidationError::TagTooLong))
        ));
        assert!(fixture.store.get_task(1).unwrap().tags.is_empty());
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut fixture = StoreFixture::new();
        let result = add(&mut fixture.store, 4, "work");
        assert!(matches!(result, Err(TaskzError::NotFound(4))));
    }
}
