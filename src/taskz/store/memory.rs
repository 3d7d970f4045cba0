use super::DataStore;
use crate::error::{Result, TaskzError};
use crate::model::{Task, TaskId};
use std::collections::BTreeMap;

/// In-memory task storage.
///
/// `BTreeMap` iteration order doubles as the canonical ascending-ID
/// ordering, so `list_tasks` needs no extra sort.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tasks: BTreeMap<TaskId, Task>,
    // Highest ID ever issued; deletes never roll it back.
    last_id: TaskId,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn save_task(&mut self, task: &Task) -> Result<()> {
        self.tasks.insert(task.id, task.clone());
        Ok(())
    }

    fn get_task(&self, id: TaskId) -> Result<Task> {
        self.tasks
            .get(&id)
            .cloned()
            .ok_or(TaskzError::NotFound(id))
    }

    fn list_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.values().cloned().collect())
    }

    fn delete_task(&mut self, id: TaskId) -> Result<()> {
        if self.tasks.remove(&id).is_none() {
            return Err(TaskzError::NotFound(id));
        }
        Ok(())
    }

    fn allocate_id(&mut self) -> TaskId {
        self.last_id += 1;
        self.last_id
    }

    fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Priority, Recurrence, RecurrencePattern};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_tasks(mut self, count: usize) -> Self {
            for i in 0..count {
                let id = self.store.allocate_id();
                let task = Task::new(id, format!("Test Task {}", i + 1), String::new());
                self.store.save_task(&task).unwrap();
            }
            self
        }

        pub fn with_task(mut self, title: &str) -> Self {
            let id = self.store.allocate_id();
            let task = Task::new(id, title.to_string(), String::new());
            self.store.save_task(&task).unwrap();
            self
        }

        pub fn with_completed_task(mut self, title: &str) -> Self {
            let id = self.store.allocate_id();
            let mut task = Task::new(id, title.to_string(), String::new());
            task.completed = true;
            self.store.save_task(&task).unwrap();
            self
        }

        pub fn with_priority_task(mut self, title: &str, priority: Priority) -> Self {
            let id = self.store.allocate_id();
            let mut task = Task::new(id, title.to_string(), String::new());
            task.priority = priority;
            self.store.save_task(&task).unwrap();
            self
        }

        pub fn with_recurring_task(
            mut self,
            title: &str,
            pattern: RecurrencePattern,
            interval: u32,
        ) -> Self {
            let id = self.store.allocate_id();
            let mut task = Task::new(id, title.to_string(), String::new());
            task.recurrence = Some(Recurrence { pattern, interval });
            self.store.save_task(&task).unwrap();
            self
        }
    }
}
