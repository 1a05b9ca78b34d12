pub const LOG_FILE_PATH: &str = "/tmp/taskbook.log";

/// Same file name the tool has always used, relative to the working directory.
pub const DATABASE_PATH: &str = "tasks.db";

pub const FRAME_DURATION: std::time::Duration = std::time::Duration::from_millis(250);

pub const NOTICE_DURATION: std::time::Duration = std::time::Duration::from_secs(5);

/// Storage failures stay on screen longer than info toasts.
pub const ERROR_NOTICE_DURATION: std::time::Duration = std::time::Duration::from_secs(10);

pub const EMPTY_TITLE_WARNING: &str = "Task title cannot be empty";

pub const NO_SELECTION_WARNING: &str = "Select a task first";
