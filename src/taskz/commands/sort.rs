use std::str::FromStr;

use crate::error::TaskzError;
use crate::model::Task;

/// Direction for date ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    NewestFirst,
    OldestFirst,
}

/// Sort key for task listings.
///
/// Every key breaks ties by ascending ID, so sorting equal-keyed tasks is
/// deterministic and re-sorting an already sorted list changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive ascending by title
    Alpha,
    /// High before Medium before Low
    Priority,
    /// By creation date, in the given direction
    Date(DateOrder),
    /// Incomplete before complete
    Status,
}

impl FromStr for SortKey {
    type Err = TaskzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "alpha" => Ok(SortKey::Alpha),
            "priority" => Ok(SortKey::Priority),
            "date" => Ok(SortKey::Date(DateOrder::NewestFirst)),
            "status" => Ok(SortKey::Status),
            other => Err(TaskzError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Returns a new ordering of `tasks`.
///
/// The store is never touched; whatever snapshot the caller passes in
/// (full listing, filter output, search output) comes back reordered.
pub fn run(mut tasks: Vec<Task>, key: SortKey) -> Vec<Task> {
    match key {
        SortKey::Alpha => {
            tasks.sort_by(|a, b| {
                a.title
                    .to_lowercase()
                    .cmp(&b.title.to_lowercase())
                    .then(a.id.cmp(&b.id))
            });
        }
        SortKey::Priority => {
            tasks.sort_by(|a, b| {
                a.priority
                    .rank()
                    .cmp(&b.priority.rank())
                    .then(a.id.cmp(&b.id))
            });
        }
        SortKey::Date(DateOrder::NewestFirst) => {
            tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        }
        SortKey::Date(DateOrder::OldestFirst) => {
            tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        }
        SortKey::Status => {
            tasks.sort_by(|a, b| a.completed.cmp(&b.completed).then(a.id.cmp(&b.id)));
        }
    }
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    use crate::model::{Priority, TaskId};

    fn task(id: TaskId, title: &str, priority: Priority) -> Task {
        let mut task = Task::new(id, title.to_string(), String::new());
        task.priority = priority;
        task
    }

    fn ids(tasks: &[Task]) -> Vec<TaskId> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn priority_sort_is_stable_on_id() {
        let tasks = vec![
            task(2, "B", Priority::Medium),
            task(1, "A", Priority::High),
            task(3, "C", Priority::Medium),
        ];
        let sorted = run(tasks, SortKey::Priority);
        assert_eq!(ids(&sorted), vec![1, 2, 3]);
    }

    #[test]
    fn alpha_sort_ignores_case() {
        let tasks = vec![
            task(1, "banana", Priority::Medium),
            task(2, "Apple", Priority::Medium),
            task(3, "cherry", Priority::Medium),
        ];
        let sorted = run(tasks, SortKey::Alpha);
        assert_eq!(ids(&sorted), vec![2, 1, 3]);
    }

    #[test]
    fn alpha_sort_breaks_title_ties_by_id() {
        let tasks = vec![
            task(4, "Same", Priority::Medium),
            task(2, "same", Priority::Medium),
        ];
        let sorted = run(tasks, SortKey::Alpha);
        assert_eq!(ids(&sorted), vec![2, 4]);
    }

    #[test]
    fn date_sort_honors_direction() {
        let mut old = task(1, "Old", Priority::Medium);
        old.created_at = Utc::now() - Duration::days(2);
        let mut mid = task(2, "Mid", Priority::Medium);
        mid.created_at = Utc::now() - Duration::days(1);
        let new = task(3, "New", Priority::Medium);

        let newest = run(
            vec![old.clone(), mid.clone(), new.clone()],
            SortKey::Date(DateOrder::NewestFirst),
        );
        assert_eq!(ids(&newest), vec![3, 2, 1]);

        let oldest = run(vec![new, old, mid], SortKey::Date(DateOrder::OldestFirst));
        assert_eq!(ids(&oldest), vec![1, 2, 3]);
    }

    #[test]
    fn status_sort_puts_incomplete_first() {
        let mut done = task(1, "Done", Priority::Medium);
        done.completed = true;
        let open_a = task(2, "Open A", Priority::Medium);
        let open_b = task(3, "Open B", Priority::Medium);

        let sorted = run(vec![done, open_b, open_a], SortKey::Status);
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn sorting_an_empty_list_is_fine() {
        assert!(run(Vec::new(), SortKey::Alpha).is_empty());
    }

    #[test]
    fn parses_known_keys() {
        assert_eq!(SortKey::from_str("alpha").unwrap(), SortKey::Alpha);
        assert_eq!(SortKey::from_str("Priority").unwrap(), SortKey::Priority);
        assert_eq!(
            SortKey::from_str("date").unwrap(),
            SortKey::Date(DateOrder::NewestFirst)
        );
        assert_eq!(SortKey::from_str("STATUS").unwrap(), SortKey::Status);
    }

    #[test]
    fn unknown_key_fails_loud() {
        let err = SortKey::from_str("color").unwrap_err();
        assert!(matches!(err, TaskzError::UnknownSortKey(ref k) if k == "color"));
    }
}
