#[cfg(test)]
#[path = "task_test.rs"]
mod tests;

use std::{fmt::Display, str::FromStr};

use thiserror::Error;

/// Labels written by older builds of the tool. They are accepted when reading
/// an existing database but never written.
const LEGACY_ACTIVE: &str = "активна";
const LEGACY_COMPLETED: &str = "завершена";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("task title cannot be empty")]
    EmptyTitle,

    #[error("unknown task status: {0}")]
    UnknownStatus(String),

    #[error("cannot change task status from {from} to {to}")]
    InvalidTransition { from: TaskStatus, to: TaskStatus },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    #[default]
    Active,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Active => "active",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }

    /// Status only moves forward: a completed task stays completed.
    pub fn can_transition_to(&self, next: TaskStatus) -> bool {
        !(self.is_completed() && next == TaskStatus::Active)
    }

    pub fn check_transition(&self, next: TaskStatus) -> Result<(), TaskError> {
        if self.can_transition_to(next) {
            return Ok(());
        }
        Err(TaskError::InvalidTransition {
            from: *self,
            to: next,
        })
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "active" | LEGACY_ACTIVE => Ok(TaskStatus::Active),
            "completed" | LEGACY_COMPLETED => Ok(TaskStatus::Completed),
            other => Err(TaskError::UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: i64,
    title: String,
    description: String,
    status: TaskStatus,
}

impl Task {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            status: TaskStatus::Active,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}

/// A validated payload for creating a task. Holding one guarantees the title
/// is not blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: String,
}

impl NewTask {
    pub fn new(title: &str, description: &str) -> Result<Self, TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        Ok(Self {
            title: title.to_string(),
            description: description.trim().to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn into_task(self, id: i64) -> Task {
        Task::new(id, self.title).with_description(self.description)
    }
}
