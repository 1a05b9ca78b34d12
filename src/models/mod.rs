pub mod action;
pub mod event;
pub mod notice;
pub mod task;

pub use action::Action;
pub use event::Event;
pub use notice::*;
pub use task::{NewTask, Task, TaskError, TaskStatus};
