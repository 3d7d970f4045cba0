//! # Storage Layer
//!
//! This module defines the storage abstraction for taskz. The [`DataStore`]
//! trait allows the engine to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Let several independent stores coexist (one per test, one per embedding host)
//! - Allow **future backends** without changing the command layer
//! - Keep business logic **decoupled** from how records are held
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the only backend; the engine holds no
//!   persistent state by design
//!
//! ## ID Allocation
//!
//! The store owns the identifier counter. IDs are positive, strictly
//! increasing in creation order, and never reused, even after the task they
//! belonged to is deleted. There is no gap-filling.
//!
//! ## Canonical Ordering
//!
//! [`DataStore::list_tasks`] always returns tasks in ascending-ID order.
//! This is the default ordering callers see when they do not ask for an
//! explicit sort, and it is stable regardless of mutation history.

use crate::error::{Result, TaskzError};
use crate::model::{Task, TaskId, MAX_TASKS};

pub mod memory;

/// Abstract interface for task storage.
///
/// Implementations must keep IDs unique for their whole lifetime and return
/// tasks in ascending-ID order from [`list_tasks`](DataStore::list_tasks).
pub trait DataStore {
    /// Save a task (create or update)
    fn save_task(&mut self, task: &Task) -> Result<()>;

    /// Get a task by ID
    fn get_task(&self, id: TaskId) -> Result<Task>;

    /// List all tasks in ascending-ID order
    fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Delete a task permanently; its ID is never issued again
    fn delete_task(&mut self, id: TaskId) -> Result<()>;

    /// Hand out the next ID, strictly greater than every ID issued before
    fn allocate_id(&mut self) -> TaskId;

    /// Number of tasks currently stored
    fn task_count(&self) -> usize;
}

/// Fails when the store is already at [`MAX_TASKS`]. Called before every
/// insert so a full store is never mutated.
pub fn ensure_capacity<S: DataStore>(store: &S) -> Result<()> {
    if store.task_count() >= MAX_TASKS {
        return Err(TaskzError::CapacityReached);
    }
    Ok(())
}
