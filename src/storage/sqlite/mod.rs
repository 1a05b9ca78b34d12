#[cfg(test)]
#[path = "sqlite_test.rs"]
mod tests;

pub(crate) mod migration;

use async_trait::async_trait;
use eyre::{Context, Result};
use tokio_rusqlite::{Connection, OptionalExtension, named_params, params};

use crate::{
    config::utils::init_parent_dir,
    models::{NewTask, Task, TaskError, TaskStatus},
    storage::Storage,
};

pub struct Sqlite {
    conn: Connection,
}

struct TaskRow {
    id: i64,
    title: String,
    description: Option<String>,
    status: Option<String>,
}

impl Sqlite {
    /// Opens the database at `path`, or an in-memory database when no path
    /// is given.
    pub async fn new(path: Option<&str>) -> Result<Self> {
        let conn = match path {
            Some(path) => {
                init_parent_dir(path)?;
                Connection::open(path)
                    .await
                    .wrap_err(format!("opening database path: {}", path))?
            }
            None => Connection::open_in_memory()
                .await
                .wrap_err("opening in-memory database")?,
        };

        Ok(Self { conn })
    }
}

#[async_trait]
impl Storage for Sqlite {
    async fn initialize(&self) -> Result<()> {
        self.conn
            .call(|conn| Ok(conn.execute_batch(migration::MIGRATION)?))
            .await
            .wrap_err("executing migration")?;
        Ok(())
    }

    async fn create_task(&self, task: NewTask) -> Result<i64> {
        let id = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction()?;
                tx.execute(
                    "INSERT INTO tasks (title, description, status) VALUES (:title, :description, :status)",
                    named_params! {
                        ":title": task.title(),
                        ":description": task.description(),
                        ":status": TaskStatus::Active.as_str(),
                    },
                )?;
                let id = tx.last_insert_rowid();
                tx.commit()?;
                Ok(id)
            })
            .await
            .wrap_err("inserting task")?;

        log::debug!("Created task {}", id);
        Ok(id)
    }

    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let rows = self
            .conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare("SELECT id, title, description, status FROM tasks ORDER BY id")?;
                let mut rows = stmt.query([])?;

                let mut tasks = vec![];
                while let Some(row) = rows.next()? {
                    tasks.push(TaskRow {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        description: row.get(2)?,
                        status: row.get(3)?,
                    });
                }
                Ok(tasks)
            })
            .await
            .wrap_err("listing tasks")?;

        // A row with an unreadable status must not hide every other task.
        let tasks = rows
            .into_iter()
            .filter_map(|row| match row.into_task() {
                Ok(task) => Some(task),
                Err(err) => {
                    log::warn!("Skipping task: {:?}", err);
                    None
                }
            })
            .collect();
        Ok(tasks)
    }

    async fn update_task_status(&self, id: i64, status: TaskStatus) -> Result<()> {
        let outcome = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction()?;
                let current: Option<Option<String>> = tx
                    .query_row(
                        "SELECT status FROM tasks WHERE id = ?",
                        params![id],
                        |row| row.get(0),
                    )
                    .optional()?;

                let Some(current) = current else {
                    return Ok(None);
                };

                let check = parse_status(current.as_deref())
                    .and_then(|current| current.check_transition(status));
                if check.is_ok() {
                    tx.execute(
                        "UPDATE tasks SET status = ? WHERE id = ?",
                        params![status.as_str(), id],
                    )?;
                    tx.commit()?;
                }
                Ok(Some(check))
            })
            .await
            .wrap_err(format!("updating status of task {}", id))?;

        match outcome {
            Some(check) => {
                check?;
                log::debug!("Task {} is now {}", id, status);
            }
            None => log::debug!("Task {} not found, status unchanged", id),
        }
        Ok(())
    }

    async fn delete_task(&self, id: i64) -> Result<()> {
        let deleted = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction()?;
                let deleted = tx.execute("DELETE FROM tasks WHERE id = ?", params![id])?;
                tx.commit()?;
                Ok(deleted)
            })
            .await
            .wrap_err(format!("deleting task {}", id))?;

        if deleted == 0 {
            log::debug!("Task {} not found, nothing deleted", id);
        } else {
            log::debug!("Deleted task {}", id);
        }
        Ok(())
    }
}

impl TaskRow {
    fn into_task(self) -> Result<Task> {
        let status = parse_status(self.status.as_deref())
            .wrap_err(format!("reading status of task {}", self.id))?;
        Ok(Task::new(self.id, self.title)
            .with_description(self.description.unwrap_or_default())
            .with_status(status))
    }
}

// A NULL status falls back to the column default.
fn parse_status(raw: Option<&str>) -> Result<TaskStatus, TaskError> {
    raw.unwrap_or(TaskStatus::Active.as_str()).parse()
}
