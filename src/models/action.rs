use super::NewTask;

/// A user gesture resolved into exactly one storage call. Every action is
/// followed by a full reload of the task table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddTask(NewTask),
    Refresh,
    CompleteTask(i64), // Task ID
    DeleteTask(i64),   // Task ID
}
