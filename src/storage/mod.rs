#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

pub mod memory;
pub mod sqlite;

use std::sync::Arc;

use crate::{
    config::{StorageConfig, utils::resolve_path},
    models::{NewTask, Task, TaskStatus},
};
use async_trait::async_trait;
use eyre::{Context, Result};
use memory::Memory;
use sqlite::Sqlite;

/// Persistence for the task set. Every method is a self-contained unit of
/// work: it commits before returning and never shares a transaction with
/// another call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Storage {
    /// Creates the tasks table if it does not exist. Safe to call repeatedly.
    async fn initialize(&self) -> Result<()>;

    /// Inserts a new active task and returns its id.
    async fn create_task(&self, task: NewTask) -> Result<i64>;

    /// Returns every task in insertion order.
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Sets the status of the task with the given id. Unknown ids are
    /// ignored; moving a completed task back to active is rejected.
    async fn update_task_status(&self, id: i64, status: TaskStatus) -> Result<()>;

    /// Removes the task with the given id. Unknown ids are ignored.
    async fn delete_task(&self, id: i64) -> Result<()>;
}

pub type ArcStorage = Arc<dyn Storage + Send + Sync>;

pub async fn new_storage(config: &StorageConfig) -> Result<ArcStorage> {
    let storage: ArcStorage = match config {
        StorageConfig::Sqlite(sqlite_config) => {
            let path = match sqlite_config.path.as_deref() {
                Some(path) => Some(
                    resolve_path(path).wrap_err(format!("resolving database path {}", path))?,
                ),
                None => None,
            };
            Arc::new(Sqlite::new(path.as_deref()).await?)
        }
        StorageConfig::Memory(_) => Arc::new(Memory::default()),
    };

    storage
        .initialize()
        .await
        .wrap_err("initializing tasks table")?;
    Ok(storage)
}
