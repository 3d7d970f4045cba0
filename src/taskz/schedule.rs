//! # Recurrence Engine
//!
//! A task carrying a [`Recurrence`](crate::model::Recurrence) rule is
//! regenerated when it is completed: the engine computes the next
//! occurrence's date by applying the rule as an offset from the anchor
//! instant and inserts a fresh copy of the task for it.
//!
//! Regeneration is best-effort. The completion that triggered it succeeds
//! even when the insert fails (full store) or the date arithmetic leaves
//! chrono's representable range; callers surface the failure as a warning
//! beside the successful completion.

use chrono::{DateTime, Duration, Months, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskzError};
use crate::model::{Recurrence, RecurrencePattern, Task, TaskId};
use crate::store::{self, DataStore};

/// Which instant the next occurrence is offset from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurrenceAnchor {
    /// Offset from the completed task's creation date.
    Creation,
    /// Offset from the moment of completion.
    Completion,
}

impl Default for RecurrenceAnchor {
    fn default() -> Self {
        Self::Creation
    }
}

/// Computes the occurrence after `from` under `rule`.
///
/// Monthly offsets clamp to the end of shorter months (Jan 31 + 1 month is
/// Feb 28). Returns `None` when the result is not representable.
pub fn next_occurrence(from: DateTime<Utc>, rule: Recurrence) -> Option<DateTime<Utc>> {
    let interval = i64::from(rule.interval);
    match rule.pattern {
        RecurrencePattern::Daily => from.checked_add_signed(Duration::try_days(interval)?),
        RecurrencePattern::Weekly => from.checked_add_signed(Duration::try_weeks(interval)?),
        RecurrencePattern::Monthly => from.checked_add_months(Months::new(rule.interval)),
    }
}

/// Creates the next occurrence of a just-completed task.
///
/// Returns `Ok(None)` when the task carries no recurrence rule. Otherwise
/// the new task gets a fresh ID and creation date, the same title,
/// description, priority, and tags, the rule carried forward, and its
/// scheduled date recorded. The completed original is left untouched.
pub fn spawn_next<S: DataStore>(
    store: &mut S,
    completed: &Task,
    anchor: RecurrenceAnchor,
) -> Result<Option<TaskId>> {
    let rule = match completed.recurrence {
        Some(rule) => rule,
        None => return Ok(None),
    };

    store::ensure_capacity(store)?;

    let from = match anchor {
        RecurrenceAnchor::Creation => completed.created_at,
        RecurrenceAnchor::Completion => Utc::now(),
    };
    let due = next_occurrence(from, rule).ok_or(TaskzError::DateOutOfRange)?;

    let id = store.allocate_id();
    let mut task = Task::new(id, completed.title.clone(), completed.description.clone());
    task.priority = completed.priority;
    task.tags = completed.tags.clone();
    task.recurrence = Some(rule);
    task.next_occurrence = Some(due);
    store.save_task(&task)?;
    debug!("spawned occurrence {} of task {}", id, completed.id);

    Ok(Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::model::Priority;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn rule(pattern: RecurrencePattern, interval: u32) -> Recurrence {
        Recurrence { pattern, interval }
    }

    #[test]
    fn daily_adds_interval_days() {
        let next = next_occurrence(utc(2025, 3, 10), rule(RecurrencePattern::Daily, 3)).unwrap();
        assert_eq!(next, utc(2025, 3, 13));
    }

    #[test]
    fn weekly_adds_interval_weeks() {
        let next = next_occurrence(utc(2025, 1, 1), rule(RecurrencePattern::Weekly, 2)).unwrap();
        assert_eq!(next, utc(2025, 1, 15));
    }

    #[test]
    fn monthly_clamps_to_month_end() {
        let next = next_occurrence(utc(2025, 1, 31), rule(RecurrencePattern::Monthly, 1)).unwrap();
        assert_eq!(next, utc(2025, 2, 28));

        // Leap year keeps the 29th
        let next = next_occurrence(utc(2024, 1, 31), rule(RecurrencePattern::Monthly, 1)).unwrap();
        assert_eq!(next, utc(2024, 2, 29));
    }

    #[test]
    fn monthly_crosses_year_boundaries() {
        let next = next_occurrence(utc(2025, 11, 15), rule(RecurrencePattern::Monthly, 3)).unwrap();
        assert_eq!(next, utc(2026, 2, 15));
    }

    #[test]
    fn overflowing_arithmetic_returns_none() {
        let far_future = DateTime::<Utc>::MAX_UTC;
        assert!(next_occurrence(far_future, rule(RecurrencePattern::Daily, 1)).is_none());
        assert!(next_occurrence(far_future, rule(RecurrencePattern::Monthly, 1)).is_none());
    }

    #[test]
    fn spawn_carries_fields_forward() {
        let mut fixture = StoreFixture::new().with_recurring_task(
            "Water plants",
            RecurrencePattern::Weekly,
            1,
        );
        let mut original = fixture.store.get_task(1).unwrap();
        original.priority = Priority::High;
        original.tags = vec!["garden".to_string()];
        fixture.store.save_task(&original).unwrap();
        let original = fixture.store.get_task(1).unwrap();

        let new_id = spawn_next(&mut fixture.store, &original, RecurrenceAnchor::Creation)
            .unwrap()
            .unwrap();

        assert_eq!(new_id, 2);
        let spawned = fixture.store.get_task(new_id).unwrap();
        assert_eq!(spawned.title, "Water plants");
        assert_eq!(spawned.priority, Priority::High);
        assert_eq!(spawned.tags, vec!["garden"]);
        assert_eq!(spawned.recurrence, original.recurrence);
        assert!(!spawned.completed);
        assert_eq!(
            spawned.next_occurrence,
            next_occurrence(original.created_at, original.recurrence.unwrap())
        );
    }

    #[test]
    fn spawn_skips_non_recurring_tasks() {
        let mut fixture = StoreFixture::new().with_task("One-off");
        let task = fixture.store.get_task(1).unwrap();

        let spawned = spawn_next(&mut fixture.store, &task, RecurrenceAnchor::Creation).unwrap();
        assert_eq!(spawned, None);
        assert_eq!(fixture.store.task_count(), 1);
    }

    #[test]
    fn spawn_fails_cleanly_at_capacity() {
        use crate::model::MAX_TASKS;

        let mut store = InMemoryStore::new();
        for i in 0..MAX_TASKS {
            let id = store.allocate_id();
            let task = Task::new(id, format!("Task {}", i), String::new());
            store.save_task(&task).unwrap();
        }
        let mut recurring = store.get_task(1).unwrap();
        recurring.recurrence = Some(rule(RecurrencePattern::Daily, 1));
        store.save_task(&recurring).unwrap();

        let result = spawn_next(&mut store, &recurring, RecurrenceAnchor::Creation);
        assert!(matches!(result, Err(TaskzError::CapacityReached)));
        assert_eq!(store.task_count(), MAX_TASKS);
    }

    #[test]
    fn completion_anchor_offsets_from_now() {
        let mut fixture =
            StoreFixture::new().with_recurring_task("Stretch", RecurrencePattern::Daily, 1);
        let task = fixture.store.get_task(1).unwrap();

        let before = Utc::now();
        let new_id = spawn_next(&mut fixture.store, &task, RecurrenceAnchor::Completion)
            .unwrap()
            .unwrap();
        let after = Utc::now();

        let due = fixture.store.get_task(new_id).unwrap().next_occurrence.unwrap();
        assert!(due >= before + Duration::days(1));
        assert!(due <= after + Duration::days(1));
    }
}
