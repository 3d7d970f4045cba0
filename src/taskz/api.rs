//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all taskz operations, regardless of the UI or
//! host embedding the engine.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (raw ID strings are parsed and validated here)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O of any kind**: no stdout, no files, no terminal assumptions
//! - **Presentation concerns**: messages are data for the caller to render
//!
//! ## Generic Over DataStore
//!
//! `TaskzApi<S: DataStore>` is generic over the storage backend. Each
//! `TaskzApi` value owns its store, so independent engines can coexist and
//! a concurrent host serializes access simply by owning the value.

use crate::commands;
use crate::config::TaskzConfig;
use crate::error::Result;
use crate::model::Task;
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;
use crate::validate;

/// The main API facade for taskz operations.
///
/// Generic over `DataStore` to allow different storage backends. All
/// callers (CLI, web, tests) should interact through this API.
pub struct TaskzApi<S: DataStore> {
    store: S,
    config: TaskzConfig,
}

impl TaskzApi<InMemoryStore> {
    /// An engine over a fresh in-memory store with default configuration.
    pub fn new() -> Self {
        Self::with_store(InMemoryStore::new())
    }
}

impl Default for TaskzApi<InMemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DataStore> TaskzApi<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            config: TaskzConfig::default(),
        }
    }

    pub fn with_config(store: S, config: TaskzConfig) -> Self {
        Self { store, config }
    }

    pub fn add(
        &mut self,
        title: &str,
        description: Option<&str>,
        priority: Option<&str>,
        tags: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, title, description, priority, tags)
    }

    pub fn get(&self, id: &str) -> Result<Task> {
        let id = validate::task_id(id)?;
        self.store.get_task(id)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn update(
        &mut self,
        id: &str,
        new_title: Option<&str>,
        new_description: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let id = validate::task_id(id)?;
        commands::update::run(&mut self.store, id, new_title, new_description)
    }

    pub fn delete(&mut self, id: &str) -> Result<commands::CmdResult> {
        let id = validate::task_id(id)?;
        commands::delete::run(&mut self.store, id)
    }

    pub fn set_completion(&mut self, id: &str, completed: bool) -> Result<commands::CmdResult> {
        let id = validate::task_id(id)?;
        if completed {
            commands::status::complete(&mut self.store, id, self.config.recurrence_anchor)
        } else {
            commands::status::reopen(&mut self.store, id)
        }
    }

    pub fn set_priority(&mut self, id: &str, priority: &str) -> Result<commands::CmdResult> {
        let id = validate::task_id(id)?;
        commands::priority::run(&mut self.store, id, priority)
    }

    pub fn add_tags(&mut self, id: &str, tags: &str) -> Result<commands::CmdResult> {
        let id = validate::task_id(id)?;
        commands::tagging::add(&mut self.store, id, tags)
    }

    pub fn remove_tags(&mut self, id: &str, tags: &str) -> Result<commands::CmdResult> {
        let id = validate::task_id(id)?;
        commands::tagging::remove(&mut self.store, id, tags)
    }

    pub fn set_recurrence(
        &mut self,
        id: &str,
        pattern: &str,
        interval: Option<u32>,
    ) -> Result<commands::CmdResult> {
        let id = validate::task_id(id)?;
        commands::recurrence::run(&mut self.store, id, pattern, interval)
    }

    pub fn search(&self, keyword: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, keyword)
    }

    pub fn filter(&self, filter: &TaskFilter) -> Result<commands::CmdResult> {
        commands::filter::run(&self.store, filter)
    }

    /// Pure reordering; compose with `list`, `search`, or `filter` output.
    pub fn sort(&self, tasks: Vec<Task>, key: SortKey) -> Vec<Task> {
        commands::sort::run(tasks, key)
    }

    pub fn config(&self) -> &TaskzConfig {
        &self.config
    }
}

pub use commands::filter::TaskFilter;
pub use commands::sort::{DateOrder, SortKey};
pub use commands::{CmdMessage, CmdResult, MessageLevel};
