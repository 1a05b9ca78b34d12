#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;

use async_trait::async_trait;
use eyre::{Result, bail};
use tokio::sync::Mutex;

use crate::{
    models::{NewTask, Task, TaskStatus},
    storage::Storage,
};

/// Keeps tasks in process memory. Nothing survives a restart; ids are never
/// reused within a session.
#[derive(Default)]
pub struct Memory {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    initialized: bool,
    last_id: i64,
    tasks: Vec<Task>,
}

impl Inner {
    fn ensure_initialized(&self) -> Result<()> {
        if !self.initialized {
            bail!("tasks table does not exist");
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for Memory {
    async fn initialize(&self) -> Result<()> {
        self.inner.lock().await.initialized = true;
        Ok(())
    }

    async fn create_task(&self, task: NewTask) -> Result<i64> {
        let mut inner = self.inner.lock().await;
        inner.ensure_initialized()?;

        inner.last_id += 1;
        let id = inner.last_id;
        inner.tasks.push(task.into_task(id));
        Ok(id)
    }

    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let inner = self.inner.lock().await;
        inner.ensure_initialized()?;
        Ok(inner.tasks.clone())
    }

    async fn update_task_status(&self, id: i64, status: TaskStatus) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.ensure_initialized()?;

        if let Some(task) = inner.tasks.iter_mut().find(|t| t.id() == id) {
            task.status().check_transition(status)?;
            task.set_status(status);
        }
        Ok(())
    }

    async fn delete_task(&self, id: i64) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.ensure_initialized()?;
        inner.tasks.retain(|t| t.id() != id);
        Ok(())
    }
}
